//! Bylines - 作者、杂志与文章的多对多关系模型
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Author Context: 作者
//! - Magazine Context: 杂志
//! - Article Context: 文章（连接作者与杂志）
//!
//! 应用层 (application/):
//! - Ports: 登记表端口（AuthorRepository, MagazineRepository, ArticleRepository）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - Memory: 三个登记表的内存实现
//! - Catalog: 持有登记表与处理器的应用上下文

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use infrastructure::Catalog;
