//! Adapter for the hosted backend: authentication, the REST data interface and object storage.

pub mod auth;
pub mod follow;
pub mod message;
pub mod profile;
pub mod rest;
pub mod storage;

use connect_domain::auth::session::Session;
use connect_domain::error::{CcError, CcResult};
use connect_domain::iter_util::Single;
use rest::Query;

use entrait::*;
use reqwest::header::{HeaderValue, CONTENT_RANGE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use url::Url;

pub struct Backend {
    http: reqwest::Client,
    base_url: Url,
    anon_key: String,
    auth_state: watch::Sender<Option<Session>>,
}

#[entrait]
pub trait GetBackend {
    fn get_backend(&self) -> &Backend;
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid header value")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("count response without a total")]
    MissingCount,
}

impl BackendError {
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

impl From<BackendError> for CcError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Api {
                status, message, ..
            } => CcError::Backend { status, message },
            BackendError::Network(e) => CcError::Network(format!("network error: {e}")),
            other => CcError::Anyhow(other.into()),
        }
    }
}

trait BackendResultExt<T> {
    fn on_code(self, code: &str, map_err: impl FnOnce(BackendError) -> CcError) -> CcResult<T>;
}

impl<T> BackendResultExt<T> for Result<T, BackendError> {
    fn on_code(self, code: &str, map_err: impl FnOnce(BackendError) -> CcError) -> CcResult<T> {
        self.map_err(|error| {
            if error.code() == Some(code) {
                map_err(error)
            } else {
                error.into()
            }
        })
    }
}

impl Backend {
    pub fn new(mut base_url: Url, anon_key: String) -> Result<Self, BackendError> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(&anon_key)?);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let (auth_state, _) = watch::channel(None);

        Ok(Self {
            http,
            base_url,
            anon_key,
            auth_state,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.base_url.join(path)?)
    }

    pub fn session(&self) -> Option<Session> {
        self.auth_state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.auth_state.subscribe()
    }

    /// Make `session` current and notify every subscriber.
    pub(crate) fn set_session(&self, session: Option<Session>) {
        tracing::debug!(signed_in = session.is_some(), "auth state changed");
        self.auth_state.send_replace(session);
    }

    /// A request authorized as the signed-in user, or anonymously.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, BackendError> {
        Ok(self.request_url(method, self.endpoint(path)?))
    }

    pub(crate) fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        let token = self
            .auth_state
            .borrow()
            .as_ref()
            .map(|session| session.access_token.clone())
            .unwrap_or_else(|| self.anon_key.clone());
        tracing::debug!("{} {}", method, url.path());
        self.http.request(method, url).bearer_auth(token)
    }

    pub(crate) fn request_with_token(
        &self,
        method: Method,
        path: &str,
        token: &str,
    ) -> Result<RequestBuilder, BackendError> {
        let url = self.endpoint(path)?;
        tracing::debug!("{} {}", method, url.path());
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        let error = parse_error(status.as_u16(), &body);
        tracing::debug!(status = status.as_u16(), code = ?error.code(), "backend error: {error}");
        Err(error)
    }

    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Vec<T>, BackendError> {
        let request = self.table(Method::GET, table)?.query(query.pairs());
        Ok(self.send(request).await?.json().await?)
    }

    /// At most one row. Fetches up to two so that a duplicate is an error rather than absent.
    pub(crate) async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> CcResult<Option<T>> {
        let rows: Vec<T> = self.select(table, &at_most_one(query)).await?;
        rows.into_iter().single_or_none()
    }

    pub(crate) async fn count(&self, table: &str, query: &Query) -> Result<u64, BackendError> {
        let request = self
            .table(Method::HEAD, table)?
            .query(query.pairs())
            .header("Prefer", "count=exact");
        let response = self.send(request).await?;
        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(content_range_total)
            .ok_or(BackendError::MissingCount)
    }

    pub(crate) async fn insert<B: Serialize + ?Sized>(
        &self,
        table: &str,
        row: &B,
    ) -> Result<(), BackendError> {
        let request = self
            .table(Method::POST, table)?
            .header("Prefer", "return=minimal")
            .json(row);
        self.send(request).await?;
        Ok(())
    }

    pub(crate) async fn update<B: Serialize + ?Sized>(
        &self,
        table: &str,
        query: &Query,
        changes: &B,
    ) -> Result<(), BackendError> {
        let request = self
            .table(Method::PATCH, table)?
            .query(query.pairs())
            .header("Prefer", "return=minimal")
            .json(changes);
        self.send(request).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, table: &str, query: &Query) -> Result<(), BackendError> {
        let request = self.table(Method::DELETE, table)?.query(query.pairs());
        self.send(request).await?;
        Ok(())
    }

    fn table(&self, method: Method, table: &str) -> Result<RequestBuilder, BackendError> {
        self.request(method, &format!("rest/v1/{table}"))
    }
}

fn at_most_one(query: &Query) -> Query {
    query.clone().limit(2)
}

/// Total from a `Content-Range` header such as `0-24/3573` or `*/0`.
fn content_range_total(value: &str) -> Option<u64> {
    value.rsplit_once('/')?.1.parse().ok()
}

/// The auth, data and storage services each shape their error bodies differently.
fn parse_error(status: u16, body: &str) -> BackendError {
    let json: serde_json::Value = serde_json::from_str(body).unwrap_or_default();

    let message = ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(|value| value.as_str()))
        .map(str::to_string)
        .unwrap_or_else(|| match body.trim() {
            "" => format!("request failed with status {status}"),
            text => text.to_string(),
        });

    let code = ["code", "error_code"]
        .iter()
        .find_map(|key| json.get(key))
        .and_then(|value| match value {
            serde_json::Value::String(code) => Some(code.clone()),
            serde_json::Value::Number(code) => Some(code.to_string()),
            _ => None,
        });

    BackendError::Api {
        status,
        code,
        message,
    }
}
