use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDetailDto,
    error::{ApplicationError, ApplicationResult},
    lookup,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = lookup::article_id(&query.id)?;
        let detail = self
            .read_repo
            .find_detail(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(detail.into())
    }
}
