use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleFilter, Category, FEATURED_LIMIT, PageRequest},
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub struct ListByCategoryQuery {
    pub category: String,
}

impl ArticleQueryService {
    /// Newest first, filtered by heading substring and/or category, paged by
    /// skip/limit.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let category = match query.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match parse_category(raw) {
                Some(category) => Some(category),
                None => return Ok(Vec::new()),
            },
        };

        let filter = ArticleFilter::new(query.search, category);
        let page = PageRequest::new(query.page, query.limit);

        let records = self.read_repo.list_page(&filter, page).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_category(
        &self,
        query: ListByCategoryQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let Some(category) = parse_category(query.category.trim()) else {
            return Ok(Vec::new());
        };

        let records = self.read_repo.list_by_category(category).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn list_featured(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list_featured(FEATURED_LIMIT).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

// Nothing is ever stored under an unknown category, so it matches no rows.
fn parse_category(raw: &str) -> Option<Category> {
    match raw.parse::<Category>() {
        Ok(category) => Some(category),
        Err(err) => {
            tracing::debug!(category = raw, error = %err, "category filter matches nothing");
            None
        }
    }
}
