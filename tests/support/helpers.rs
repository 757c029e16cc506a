// tests/support/helpers.rs
use super::mocks::{PlainPasswordHasher, SteppingClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use scribe_core::application::{
    commands::{articles::CreateArticleCommand, users::RegisterUserCommand},
    dto::{ArticleDto, UserDto},
    ports::{security::PasswordHasher, time::Clock},
    services::{ApplicationServices, ServicePorts},
};
use scribe_core::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteUserRepository,
    },
};
use scribe_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::SqlitePool;
use std::{path::PathBuf, sync::Arc};

/// Fresh migrated in-memory database. A single connection keeps every query
/// on the same database.
pub async fn memory_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    pool
}

/// Migrated on-disk database for tests that need several live connections.
/// The files are removed on drop.
pub struct FileDb {
    pub pool: SqlitePool,
    path: PathBuf,
}

impl FileDb {
    pub async fn new(max_connections: u32) -> Self {
        let path = std::env::temp_dir().join(format!("scribe-test-{}.db", uuid::Uuid::new_v4()));
        let pool = database::init_pool(&format!("sqlite://{}", path.display()), max_connections)
            .await
            .expect("open file sqlite");
        database::run_migrations(&pool)
            .await
            .expect("run migrations");
        Self { pool, path }
    }
}

impl Drop for FileDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

pub fn build_services_with(
    pool: &SqlitePool,
    password_hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(ServicePorts {
        users: Arc::new(SqliteUserRepository::new(pool.clone())),
        article_writes: Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        article_reads: Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        password_hasher,
        clock,
    }))
}

pub fn build_services(pool: &SqlitePool) -> Arc<ApplicationServices> {
    build_services_with(
        pool,
        Arc::new(PlainPasswordHasher),
        Arc::new(SteppingClock::default()),
    )
}

pub struct TestApp {
    pub pool: SqlitePool,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = memory_pool().await;
        let services = build_services(&pool);
        Self { pool, services }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            db_pool: self.pool.clone(),
        };
        build_router(state, &["http://localhost:5173".to_string()])
    }

    pub async fn register(&self, username: &str, email: &str) -> UserDto {
        self.services
            .user_commands
            .register(RegisterUserCommand {
                username: username.into(),
                email: email.into(),
                password: "secret".into(),
            })
            .await
            .expect("register user")
    }

    pub async fn publish(&self, email: &str, heading: &str, category: &str, featured: bool) -> ArticleDto {
        self.services
            .article_commands
            .create_article(article_command(email, heading, category, featured))
            .await
            .expect("create article")
    }
}

pub fn article_command(email: &str, heading: &str, category: &str, featured: bool) -> CreateArticleCommand {
    CreateArticleCommand {
        email: email.into(),
        title: heading.into(),
        content: format!("body of {heading}"),
        image_url: Some("https://img.example/cover.png".into()),
        category: Some(category.into()),
        featured,
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn read_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Asserts the status and the `{error, message}` body shape.
pub async fn assert_error_response(response: Response, status: StatusCode, error: &str) -> Value {
    assert_eq!(response.status(), status);
    let body = read_json(response).await;
    assert_eq!(body["error"], error);
    assert!(body["message"].is_string());
    body
}
