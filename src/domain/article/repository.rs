use crate::domain::article::entity::{
    Article, ArticleDetail, ArticleSummary, ArticleUpdate, NewArticle,
};
use crate::domain::article::listing::{ArticleFilter, PageRequest};
use crate::domain::article::value_objects::{ArticleId, Category};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `NotFound` when no article has the given id.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article and hands back what was stored.
    async fn delete(&self, id: ArticleId) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_detail(&self, id: ArticleId) -> DomainResult<Option<ArticleDetail>>;
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<ArticleSummary>>;
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>>;
    async fn list_by_category(&self, category: Category) -> DomainResult<Vec<Article>>;
    async fn list_featured(&self, limit: u32) -> DomainResult<Vec<Article>>;
}
