use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Result of checking an email/password pair. Serialised as the bare
/// strings callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LoginOutcome {
    #[serde(rename = "Success")]
    Success,
    #[serde(rename = "Incorrect password")]
    IncorrectPassword,
    #[serde(rename = "User not found")]
    UserNotFound,
}

impl LoginOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "Success",
            LoginOutcome::IncorrectPassword => "Incorrect password",
            LoginOutcome::UserNotFound => "User not found",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
