use crate::domain::article::{Article, ArticleDetail, ArticleSummary, Category};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub heading: String,
    pub content: String,
    pub image: String,
    pub category: Category,
    pub author_id: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.to_string(),
            heading: article.heading.into_inner(),
            content: article.content.into_inner(),
            image: article.image.into_inner(),
            category: article.category,
            author_id: article.author_id.to_string(),
            featured: article.featured,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: String,
    pub heading: String,
    pub category: Category,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            heading: summary.heading.into_inner(),
            category: summary.category,
            featured: summary.featured,
            created_at: summary.created_at,
        }
    }
}

/// Single-article view with the author's username resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailDto {
    pub id: String,
    pub heading: String,
    pub content: String,
    pub category: Category,
    pub image: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub author: Option<String>,
}

impl From<ArticleDetail> for ArticleDetailDto {
    fn from(detail: ArticleDetail) -> Self {
        let ArticleDetail {
            article,
            author_name,
        } = detail;
        Self {
            id: article.id.to_string(),
            heading: article.heading.into_inner(),
            content: article.content.into_inner(),
            category: article.category,
            image: article.image.into_inner(),
            featured: article.featured,
            created_at: article.created_at,
            author: author_name.map(String::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryListResponse {
    pub articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedArticleResponse {
    pub message: String,
    pub deleted_article: ArticleDto,
}
