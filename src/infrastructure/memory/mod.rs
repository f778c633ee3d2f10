//! Memory Layer - In-Memory Registries
//!
//! 实现作者、杂志、文章三个登记表的内存版本

mod article_repo;
mod author_repo;
mod magazine_repo;
mod sequenced_map;

pub use article_repo::InMemoryArticleRepository;
pub use author_repo::InMemoryAuthorRepository;
pub use magazine_repo::InMemoryMagazineRepository;
