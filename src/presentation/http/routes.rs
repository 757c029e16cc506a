// src/presentation/http/routes.rs
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/newBlog", post(articles::create_article))
        .route("/api/articles", get(articles::list_articles))
        .route(
            "/api/articles/user-by-email",
            post(articles::list_by_author_email),
        )
        .route(
            "/api/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/posts/category/{category}",
            get(articles::list_by_category),
        )
        .route("/api/featured-posts", get(articles::list_featured))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and store are reachable.", body = StatusResponse),
        (status = 500, description = "Store unreachable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> HttpResult<Json<StatusResponse>> {
    sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .map_err(|err| HttpError::internal(&err.to_string()))?;

    Ok(Json(StatusResponse {
        status: "ok".into(),
    }))
}
