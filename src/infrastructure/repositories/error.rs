use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const UNIQUE_ARTICLE_HEADING: &str = "articles.heading";
const UNIQUE_USER_EMAIL: &str = "users.email";
const UNIQUE_USER_USERNAME: &str = "users.username";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => unique_violation(db_err.message()),
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}

// SQLite reports the offending column as "UNIQUE constraint failed: table.column".
fn unique_violation(message: &str) -> DomainError {
    let reason = if message.contains(UNIQUE_ARTICLE_HEADING) {
        "heading already exists"
    } else if message.contains(UNIQUE_USER_EMAIL) {
        "email already registered"
    } else if message.contains(UNIQUE_USER_USERNAME) {
        "username already taken"
    } else {
        "unique constraint violated"
    };
    DomainError::Validation(reason.into())
}
