//! Magazine Commands

use uuid::Uuid;

/// 创建杂志命令
#[derive(Debug, Clone)]
pub struct CreateMagazine {
    pub name: String,
    pub category: String,
}

/// 修改杂志名称命令
#[derive(Debug, Clone)]
pub struct RenameMagazine {
    pub magazine_id: Uuid,
    pub name: String,
}

/// 修改杂志分类命令
#[derive(Debug, Clone)]
pub struct ChangeMagazineCategory {
    pub magazine_id: Uuid,
    pub category: String,
}
