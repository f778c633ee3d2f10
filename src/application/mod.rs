//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（作者、杂志、文章登记表）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Author commands
    AddArticle,
    CreateAuthor,
    // Magazine commands
    ChangeMagazineCategory,
    CreateMagazine,
    RenameMagazine,
    // Article commands
    CreateArticle,
    // Handlers
    handlers::{
        AddArticleHandler, ChangeMagazineCategoryHandler, CreateArticleHandler,
        CreateArticleResponse, CreateAuthorHandler, CreateAuthorResponse, CreateMagazineHandler,
        MagazineChangeResponse, RenameMagazineHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    ArticleRepositoryPort, AuthorRepositoryPort, MagazineRepositoryPort, RepositoryError,
};

pub use queries::{
    // Author queries
    GetAuthor,
    GetAuthorArticles,
    GetAuthorMagazines,
    GetAuthorTopicAreas,
    ListAuthors,
    // Magazine queries
    GetContributingAuthors,
    GetMagazine,
    GetMagazineArticleTitles,
    GetMagazineArticles,
    GetMagazineContributors,
    GetTopPublisher,
    ListMagazines,
    // Article queries
    GetArticle,
    ListArticles,
    // Handlers
    handlers::{
        ArticleResponse, AuthorResponse, GetArticleHandler, GetAuthorArticlesHandler,
        GetAuthorHandler, GetAuthorMagazinesHandler, GetAuthorTopicAreasHandler,
        GetContributingAuthorsHandler, GetMagazineArticleTitlesHandler,
        GetMagazineArticlesHandler, GetMagazineContributorsHandler, GetMagazineHandler,
        GetTopPublisherHandler, ListArticlesHandler, ListAuthorsHandler, ListMagazinesHandler,
        MagazineResponse,
    },
};
