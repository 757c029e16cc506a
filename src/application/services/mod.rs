// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, users::UserCommandService},
        ports::{security::PasswordHasher, time::Clock},
        queries::{articles::ArticleQueryService, users::UserQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        user::UserRepository,
    },
};

/// Adapters the use cases run against.
#[derive(Clone)]
pub struct ServicePorts {
    pub users: Arc<dyn UserRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
}

/// Every use case the presentation layer can reach.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(ports: ServicePorts) -> Self {
        let ServicePorts {
            users,
            article_writes,
            article_reads,
            password_hasher,
            clock,
        } = ports;

        Self {
            user_commands: Arc::new(UserCommandService::new(
                Arc::clone(&users),
                password_hasher,
                Arc::clone(&clock),
            )),
            article_commands: Arc::new(ArticleCommandService::new(
                article_writes,
                Arc::clone(&article_reads),
                Arc::clone(&users),
                clock,
            )),
            article_queries: Arc::new(ArticleQueryService::new(
                article_reads,
                Arc::clone(&users),
            )),
            user_queries: Arc::new(UserQueryService::new(users)),
        }
    }
}
