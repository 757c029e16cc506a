// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{
        ArticleDetailDto, ArticleDto, ArticleListResponse, ArticleSummaryListResponse,
        DeletedArticleResponse,
    },
    queries::articles::{
        GetArticleByIdQuery, ListArticlesByEmailQuery, ListArticlesQuery, ListByCategoryQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, QueryParams, empty_as_none};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Case-insensitive substring of the heading.
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub heading: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ArticlesByEmailRequest {
    pub email: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Newest articles first, one page.", body = ArticleListResponse),
        (status = 400, description = "Malformed query.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = ListArticlesQuery {
        search: params.search,
        category: params.category,
        page: params.page,
        limit: params.limit,
    };

    let articles = state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()?;
    Ok(Json(ArticleListResponse { articles }))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article with its author's username.", body = ArticleDetailDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/newBlog",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created and recorded on its author.", body = ArticleDto),
        (status = 400, description = "Missing image or invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No user with that email.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        email: payload.email,
        title: payload.title,
        content: payload.content,
        image_url: payload.image_url,
        category: payload.category,
        featured: payload.featured,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        heading: payload.heading,
        content: payload.content,
        category: payload.category,
        featured: payload.featured,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article removed.", body = DeletedArticleResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<DeletedArticleResponse>> {
    let deleted = state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(DeletedArticleResponse {
        message: "Article deleted successfully".into(),
        deleted_article: deleted,
    }))
}

#[utoipa::path(
    get,
    path = "/api/posts/category/{category}",
    params(("category" = String, Path, description = "Category name, e.g. Technology")),
    responses(
        (status = 200, description = "Every article in the category, newest first. Unknown categories match nothing.", body = [ArticleDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_by_category(
    Extension(state): Extension<HttpState>,
    Path(category): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_by_category(ListByCategoryQuery { category })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/featured-posts",
    responses(
        (status = 200, description = "Up to ten featured articles, newest first.", body = [ArticleDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_featured(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_featured()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles/user-by-email",
    request_body = ArticlesByEmailRequest,
    responses(
        (status = 200, description = "Summaries of the user's articles, newest first.", body = ArticleSummaryListResponse),
        (status = 400, description = "Email missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No user with that email.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_by_author_email(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticlesByEmailRequest>,
) -> HttpResult<Json<ArticleSummaryListResponse>> {
    let articles = state
        .services
        .article_queries
        .list_by_author_email(ListArticlesByEmailQuery {
            email: payload.email,
        })
        .await
        .into_http()?;
    Ok(Json(ArticleSummaryListResponse { articles }))
}
