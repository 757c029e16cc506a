// src/client/api.rs
//! Reqwest-backed client for the blog API.

use super::error::{ClientError, ClientResult};
use super::session::{Session, SessionManager, SessionStorage};
use crate::application::dto::{
    ArticleDetailDto, ArticleDto, ArticleListResponse, ArticleSummaryDto,
    ArticleSummaryListResponse, DeletedArticleResponse, LoginOutcome, UserDto,
};
use crate::presentation::http::{
    controllers::{
        articles::{ArticlesByEmailRequest, CreateArticleRequest, UpdateArticleRequest},
        auth::{LoginRequest, RegisterRequest},
    },
    error::ErrorResponse,
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Listing filters. `None` fields are left out of the query string.
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ArticleQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct BlogClient {
    client: Client,
    base: Url,
}

impl BlogClient {
    /// # Errors
    ///
    /// Returns an error when `base_url` does not parse or the reqwest client
    /// cannot be constructed.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    /// Appends `segments` to the base path, percent-encoding each one so ids
    /// and category names can never step into another route.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(ClientError::InvalidSegment((*bad).to_string()));
        }
        let mut endpoint = self.base.clone();
        endpoint
            .path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(endpoint)
    }

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<UserDto> {
        let builder = self.client.post(self.url(&["api", "register"])?).json(request);
        send(builder).await
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginOutcome> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let builder = self.client.post(self.url(&["api", "login"])?).json(&request);
        send(builder).await
    }

    pub async fn create_article(&self, request: &CreateArticleRequest) -> ClientResult<ArticleDto> {
        let builder = self.client.post(self.url(&["api", "newBlog"])?).json(request);
        send(builder).await
    }

    pub async fn list_articles(&self, query: &ArticleQuery) -> ClientResult<Vec<ArticleDto>> {
        let builder = self
            .client
            .get(self.url(&["api", "articles"])?)
            .query(&query.pairs());
        let page: ArticleListResponse = send(builder).await?;
        Ok(page.articles)
    }

    pub async fn get_article(&self, id: &str) -> ClientResult<ArticleDetailDto> {
        let builder = self.client.get(self.url(&["api", "articles", id])?);
        send(builder).await
    }

    pub async fn update_article(
        &self,
        id: &str,
        changes: &UpdateArticleRequest,
    ) -> ClientResult<ArticleDto> {
        let builder = self
            .client
            .put(self.url(&["api", "articles", id])?)
            .json(changes);
        send(builder).await
    }

    pub async fn delete_article(&self, id: &str) -> ClientResult<DeletedArticleResponse> {
        let builder = self.client.delete(self.url(&["api", "articles", id])?);
        send(builder).await
    }

    pub async fn list_by_category(&self, category: &str) -> ClientResult<Vec<ArticleDto>> {
        let builder = self
            .client
            .get(self.url(&["api", "posts", "category", category])?);
        send(builder).await
    }

    pub async fn featured(&self) -> ClientResult<Vec<ArticleDto>> {
        let builder = self.client.get(self.url(&["api", "featured-posts"])?);
        send(builder).await
    }

    /// Articles written by the signed-in user.
    pub async fn my_articles(&self, session: &Session) -> ClientResult<Vec<ArticleSummaryDto>> {
        let request = ArticlesByEmailRequest {
            email: Some(session.user.email.clone()),
        };
        let builder = self
            .client
            .post(self.url(&["api", "articles", "user-by-email"])?)
            .bearer_auth(&session.token)
            .json(&request);
        let list: ArticleSummaryListResponse = send(builder).await?;
        Ok(list.articles)
    }

    /// Checks the credentials and, on success, stores a new session.
    ///
    /// # Errors
    ///
    /// `ClientError::Rejected` carries the outcome when the credentials do
    /// not match; no session is stored in that case.
    pub async fn sign_in<'m, S: SessionStorage>(
        &self,
        sessions: &'m mut SessionManager<S>,
        email: &str,
        password: &str,
    ) -> ClientResult<&'m Session> {
        let outcome = self.login(email, password).await?;
        if !outcome.is_success() {
            return Err(ClientError::Rejected(outcome));
        }
        sessions.establish(Session::new(email.trim().to_lowercase(), None))
    }

    /// Registers the account and signs the new user in.
    pub async fn sign_up<'m, S: SessionStorage>(
        &self,
        sessions: &'m mut SessionManager<S>,
        request: &RegisterRequest,
    ) -> ClientResult<&'m Session> {
        let user = self.register(request).await?;
        sessions.establish(Session::new(user.email, Some(user.username)))
    }

    pub fn sign_out<S: SessionStorage>(&self, sessions: &mut SessionManager<S>) -> ClientResult<()> {
        sessions.clear()
    }
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> ClientResult<T> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(&body)
            .map(|err| err.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&body)?)
}
