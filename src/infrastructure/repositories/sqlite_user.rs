// src/infrastructure/repositories/sqlite_user.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, User, UserId, UserRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Sqlite, SqliteConnection, SqlitePool};

const USER_COLUMNS: &str =
    "id, username, email, password_hash, article_count, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    password_hash: String,
    article_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self, article_ids: Vec<String>) -> DomainResult<User> {
        let article_count = u32::try_from(self.article_count).map_err(|_| {
            DomainError::Persistence(format!("invalid article count {}", self.article_count))
        })?;
        let article_ids = article_ids
            .iter()
            .map(|raw| ArticleId::parse(raw))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(User {
            id: UserId::parse(&self.id)?,
            username: Username::new(self.username)?,
            email: Email::new(self.email)?,
            password_hash: PasswordHash::new(self.password_hash)?,
            article_count,
            article_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

async fn article_ids_for(conn: &mut SqliteConnection, user_id: &str) -> DomainResult<Vec<String>> {
    sqlx::query_scalar::<Sqlite, String>(
        "SELECT article_id FROM user_articles WHERE user_id = ? ORDER BY position",
    )
    .bind(user_id)
    .fetch_all(conn)
    .await
    .map_err(map_sqlx)
}

impl SqliteUserRepository {
    /// Both reads share one transaction so the count and the id list come
    /// from the same snapshot even while `record_new_article` runs elsewhere.
    async fn find_where(&self, column: &str, value: String) -> DomainResult<Option<User>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ?");
        let Some(row) = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
        else {
            tx.commit().await.map_err(map_sqlx)?;
            return Ok(None);
        };

        let article_ids = article_ids_for(&mut tx, &row.id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        row.into_user(article_ids).map(Some)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            password_hash,
            created_at,
        } = new_user;

        let sql = format!(
            "INSERT INTO users (id, username, email, password_hash, article_count, created_at, updated_at)
             VALUES (?, ?, ?, ?, 0, ?, ?)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(UserId::generate().to_string())
            .bind(username.as_str())
            .bind(email.as_str())
            .bind(password_hash.as_str())
            .bind(created_at)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.into_user(Vec::new())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        self.find_where("email", email.as_str().to_string()).await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.find_where("id", id.to_string()).await
    }

    async fn record_new_article(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        recorded_at: DateTime<Utc>,
    ) -> DomainResult<User> {
        let user_id = user_id.to_string();
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "UPDATE users SET article_count = article_count + 1, updated_at = ?
             WHERE id = ?
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(recorded_at)
            .bind(&user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        sqlx::query(
            "INSERT INTO user_articles (user_id, position, article_id)
             VALUES (?, (SELECT COALESCE(MAX(position), -1) + 1 FROM user_articles WHERE user_id = ?), ?)",
        )
        .bind(&user_id)
        .bind(&user_id)
        .bind(article_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let article_ids = article_ids_for(&mut tx, &user_id).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_user(article_ids)
    }
}
