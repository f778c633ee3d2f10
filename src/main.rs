//! Bylines - 作者、杂志与文章
//!
//! 演示程序：
//! - 加载配置、初始化日志
//! - 在内存登记表中写入一组示例数据
//! - 以 JSON 输出各项关系查询的结果

use serde::Serialize;
use uuid::Uuid;

use bylines::application::{
    AddArticle, ApplicationError, AuthorResponse, CreateArticle, CreateAuthor, CreateMagazine,
    GetAuthorMagazines, GetAuthorTopicAreas, GetContributingAuthors, GetMagazineArticleTitles,
    GetMagazineContributors, GetTopPublisher, ListAuthors, ListMagazines, MagazineResponse,
    RenameMagazine,
};
use bylines::config::{load_config, print_config, AppConfig};
use bylines::infrastructure::Catalog;

#[derive(Debug, Serialize)]
struct Report {
    authors: Vec<AuthorReport>,
    magazines: Vec<MagazineReport>,
    top_publisher: Option<MagazineResponse>,
}

#[derive(Debug, Serialize)]
struct AuthorReport {
    #[serde(flatten)]
    author: AuthorResponse,
    magazines: Vec<String>,
    topic_areas: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MagazineReport {
    #[serde(flatten)]
    magazine: MagazineResponse,
    article_titles: Vec<String>,
    contributors: Vec<String>,
    contributing_authors: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    init_tracing(&config);

    tracing::info!("Bylines - authors, magazines and articles");
    print_config(&config);

    let catalog = Catalog::in_memory();
    seed(&catalog)?;

    let report = build_report(&catalog)?;
    let json = if config.report.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.filter_directive()));

    // 日志写到 stderr，stdout 只留给报告
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 写入示例数据，其中几条会因校验失败被拒绝
fn seed(catalog: &Catalog) -> Result<(), ApplicationError> {
    let author = |name: &str| {
        catalog
            .create_author_handler
            .handle(CreateAuthor { name: name.to_string() })
            .map(|created| created.id)
    };
    let magazine = |name: &str, category: &str| {
        catalog
            .create_magazine_handler
            .handle(CreateMagazine {
                name: name.to_string(),
                category: category.to_string(),
            })
            .map(|created| created.id)
    };
    let article = |author_id: Uuid, magazine_id: Uuid, title: &str| {
        catalog
            .create_article_handler
            .handle(CreateArticle {
                author_id,
                magazine_id,
                title: title.to_string(),
            })
            .map(|_| ())
    };

    let carry = author("Carry Bradshaw")?;
    let nathaniel = author("Nathaniel Hawthorne")?;

    let vogue = magazine("Vogue", "Fashion")?;
    let ad = magazine("AD", "Architecture")?;
    let yorker = magazine("Yorker", "Culture")?;

    article(carry, vogue, "How to wear a tutu with style")?;
    article(carry, vogue, "How to be single and happy")?;
    article(carry, vogue, "Dating life in NYC")?;
    article(nathaniel, vogue, "Fashion Trends")?;
    article(carry, ad, "2023 Eccentric Design Trends")?;

    catalog.add_article_handler.handle(AddArticle {
        author_id: nathaniel,
        magazine_id: yorker,
        title: "The Custom-House".to_string(),
    })?;

    catalog.rename_magazine_handler.handle(RenameMagazine {
        magazine_id: yorker,
        name: "New Yorker".to_string(),
    })?;

    // 以下操作预期失败，状态保持不变
    for rejected in [
        article(carry, vogue, "Tutu"),
        catalog
            .rename_magazine_handler
            .handle(RenameMagazine {
                magazine_id: vogue,
                name: "New Yorker Plus Extra Long Title".to_string(),
            })
            .map(|_| ()),
        author("").map(|_| ()),
    ] {
        match rejected {
            Err(e) if e.is_validation() => tracing::info!(error = %e, "Rejected as expected"),
            other => other?,
        }
    }

    Ok(())
}

fn build_report(catalog: &Catalog) -> Result<Report, ApplicationError> {
    let names = |authors: Vec<AuthorResponse>| -> Vec<String> {
        authors.into_iter().map(|a| a.name).collect()
    };

    let authors = catalog
        .list_authors_handler
        .handle(ListAuthors)?
        .into_iter()
        .map(|author| -> Result<AuthorReport, ApplicationError> {
            let author_id = author.id;
            Ok(AuthorReport {
                magazines: catalog
                    .author_magazines_handler
                    .handle(GetAuthorMagazines { author_id })?
                    .into_iter()
                    .map(|m| m.name)
                    .collect(),
                topic_areas: catalog
                    .author_topic_areas_handler
                    .handle(GetAuthorTopicAreas { author_id })?,
                author,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let magazines = catalog
        .list_magazines_handler
        .handle(ListMagazines)?
        .into_iter()
        .map(|magazine| -> Result<MagazineReport, ApplicationError> {
            let magazine_id = magazine.id;
            Ok(MagazineReport {
                article_titles: catalog
                    .article_titles_handler
                    .handle(GetMagazineArticleTitles { magazine_id })?,
                contributors: names(
                    catalog
                        .contributors_handler
                        .handle(GetMagazineContributors { magazine_id })?,
                ),
                contributing_authors: names(
                    catalog
                        .contributing_authors_handler
                        .handle(GetContributingAuthors { magazine_id })?,
                ),
                magazine,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let top_publisher = catalog.top_publisher_handler.handle(GetTopPublisher)?;

    Ok(Report {
        authors,
        magazines,
        top_publisher,
    })
}
