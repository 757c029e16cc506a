// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleDetail, ArticleFilter, ArticleHeading, ArticleId,
    ArticleReadRepository, ArticleSummary, ArticleUpdate, ArticleWriteRepository, Category,
    ImageUrl, NewArticle, PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ARTICLE_COLUMNS: &str =
    "id, heading, content, image, category, author_id, featured, created_at, updated_at";
const NEWEST_FIRST: &str = " ORDER BY created_at DESC, seq DESC";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    heading: String,
    content: String,
    image: String,
    category: String,
    author_id: String,
    featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::parse(&row.id)?,
            heading: ArticleHeading::new(row.heading)?,
            content: ArticleContent::new(row.content)?,
            image: ImageUrl::new(row.image)?,
            category: row.category.parse()?,
            author_id: UserId::parse(&row.author_id)?,
            featured: row.featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct DetailRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_name: Option<String>,
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: String,
    heading: String,
    category: String,
    featured: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<SummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::parse(&row.id)?,
            heading: ArticleHeading::new(row.heading)?,
            category: row.category.parse()?,
            featured: row.featured,
            created_at: row.created_at,
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            heading,
            content,
            image,
            category,
            author_id,
            featured,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (id, heading, heading_folded, content, image, category, author_id, featured, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(ArticleId::generate().to_string())
            .bind(heading.as_str())
            .bind(heading.folded())
            .bind(content.as_str())
            .bind(image.as_str())
            .bind(category.as_str())
            .bind(author_id.to_string())
            .bind(featured)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            heading,
            content,
            category,
            featured,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE articles SET
                heading = COALESCE(?, heading),
                heading_folded = COALESCE(?, heading_folded),
                content = COALESCE(?, content),
                category = COALESCE(?, category),
                featured = COALESCE(?, featured),
                updated_at = ?
             WHERE id = ?
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(heading.as_ref().map(ArticleHeading::as_str))
            .bind(heading.as_ref().map(ArticleHeading::folded))
            .bind(content.as_ref().map(ArticleContent::as_str))
            .bind(category.as_ref().map(Category::as_str))
            .bind(featured)
            .bind(updated_at)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<Article> {
        let sql = format!("DELETE FROM articles WHERE id = ? RETURNING {ARTICLE_COLUMNS}");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_detail(&self, id: ArticleId) -> DomainResult<Option<ArticleDetail>> {
        let row = sqlx::query_as::<_, DetailRow>(
            "SELECT a.id, a.heading, a.content, a.image, a.category, a.author_id, a.featured,
                    a.created_at, a.updated_at, u.username AS author_name
             FROM articles a
             LEFT JOIN users u ON u.id = a.author_id
             WHERE a.id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(DetailRow {
            article,
            author_name,
        }) = row
        else {
            return Ok(None);
        };

        Ok(Some(ArticleDetail {
            article: Article::try_from(article)?,
            author_name: author_name.map(Username::new).transpose()?,
        }))
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<ArticleSummary>> {
        let sql = format!(
            "SELECT id, heading, category, featured, created_at FROM articles WHERE author_id = ?{NEWEST_FIRST}"
        );
        let rows = sqlx::query_as::<_, SummaryRow>(&sql)
            .bind(author_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE 1 = 1"));

        if let Some(search) = filter.search.as_deref() {
            builder.push(" AND instr(heading_folded, ");
            builder.push_bind(search.to_lowercase());
            builder.push(") > 0");
        }
        if let Some(category) = filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category.as_str());
        }

        builder.push(NEWEST_FIRST);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn list_by_category(&self, category: Category) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE category = ?{NEWEST_FIRST}");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(category.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn list_featured(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE featured = 1{NEWEST_FIRST} LIMIT ?"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }
}
