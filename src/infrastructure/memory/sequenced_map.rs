//! 按插入顺序遍历的并发 Map

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

/// DashMap 加插入序号
///
/// 覆盖写保留原序号，`values` 按首次插入顺序返回
pub(crate) struct SequencedMap<K, V>
where
    K: Eq + Hash,
{
    entries: DashMap<K, (u64, V)>,
    next_seq: AtomicU64,
}

impl<K, V> SequencedMap<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// 插入新条目；键已存在时返回 false 且不修改
    pub fn insert_new(&self, key: K, value: V) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert((seq, value));
                true
            }
        }
    }

    /// 在分片锁内修改已有条目，返回修改后的副本
    ///
    /// 键不存在时返回 `None`；`change` 失败时原值不变，原序号保留
    pub fn modify<E>(
        &self,
        key: &K,
        change: impl FnOnce(&mut V) -> Result<(), E>,
    ) -> Option<Result<V, E>> {
        let mut entry = self.entries.get_mut(key)?;
        let mut draft = entry.1.clone();
        Some(change(&mut draft).map(|()| {
            entry.1 = draft.clone();
            draft
        }))
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.1.clone())
    }

    pub fn values(&self) -> Vec<V> {
        let mut values: Vec<(u64, V)> = self
            .entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        values.sort_by_key(|(seq, _)| *seq);
        values.into_iter().map(|(_, value)| value).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_keep_insertion_order() {
        let map = SequencedMap::new();
        for key in [30, 10, 20] {
            assert!(map.insert_new(key, key * 2));
        }
        assert_eq!(map.values(), vec![60, 20, 40]);
    }

    #[test]
    fn test_insert_new_rejects_existing_key() {
        let map = SequencedMap::new();
        assert!(map.insert_new("a", 1));
        assert!(!map.insert_new("a", 2));
        assert_eq!(map.get(&"a"), Some(1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_modify_keeps_position() {
        let map = SequencedMap::new();
        map.insert_new("a", 1);
        map.insert_new("b", 2);

        let updated = map.modify(&"a", |value| -> Result<(), ()> {
            *value = 10;
            Ok(())
        });
        assert_eq!(updated, Some(Ok(10)));
        assert!(map.modify(&"c", |_| -> Result<(), ()> { Ok(()) }).is_none());
        assert_eq!(map.values(), vec![10, 2]);
    }

    #[test]
    fn test_failed_modify_keeps_old_value() {
        let map = SequencedMap::new();
        map.insert_new("a", 1);

        let result = map.modify(&"a", |value| {
            *value = 99;
            Err("rejected")
        });
        assert_eq!(result, Some(Err("rejected")));
        assert_eq!(map.get(&"a"), Some(1));
    }

    #[test]
    fn test_concurrent_modify_keeps_both_changes() {
        let map = SequencedMap::new();
        map.insert_new("pair", (0u32, 0u32));

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..500 {
                        map.modify(&"pair", |pair| -> Result<(), ()> {
                            pair.0 += 1;
                            Ok(())
                        });
                        map.modify(&"pair", |pair| -> Result<(), ()> {
                            pair.1 += 1;
                            Ok(())
                        });
                    }
                });
            }
        });

        assert_eq!(map.get(&"pair"), Some((2000, 2000)));
    }
}
