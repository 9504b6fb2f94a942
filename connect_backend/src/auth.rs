use crate::{Backend, BackendError, GetBackend};

use connect_domain::auth::email::InstitutionalEmail;
use connect_domain::auth::gateway::AuthGatewayImpl;
use connect_domain::auth::password::Password;
use connect_domain::auth::session::{AuthUser, Session};
use connect_domain::error::CcResult;
use connect_domain::UserId;

use entrait::*;
use reqwest::{Method, RequestBuilder};
use tokio::sync::watch;

pub struct GoTrueAuth;

#[derive(serde::Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(serde::Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(serde::Serialize)]
struct Recovery<'a> {
    email: &'a str,
}

#[derive(serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    user: UserResponse,
}

#[derive(serde::Deserialize)]
struct UserResponse {
    id: uuid::Uuid,
    #[serde(default)]
    email: Option<String>,
}

impl From<UserResponse> for AuthUser {
    fn from(user: UserResponse) -> Self {
        Self {
            id: UserId(user.id),
            email: user.email.unwrap_or_default(),
        }
    }
}

#[entrait]
impl AuthGatewayImpl for GoTrueAuth {
    pub async fn sign_up_with_password(
        deps: &impl GetBackend,
        email: &InstitutionalEmail,
        password: &Password,
    ) -> CcResult<()> {
        let backend = deps.get_backend();
        let request = backend
            .request(Method::POST, "auth/v1/signup")?
            .json(&Credentials {
                email: email.as_ref(),
                password: password.as_ref(),
            });
        backend.send(request).await?;
        Ok(())
    }

    pub async fn sign_in_with_password(
        deps: &impl GetBackend,
        email: &str,
        password: &str,
    ) -> CcResult<Session> {
        let backend = deps.get_backend();
        let request = backend
            .request(Method::POST, "auth/v1/token")?
            .query(&[("grant_type", "password")])
            .json(&Credentials { email, password });
        grant_session(backend, request).await
    }

    pub async fn sign_out_session(deps: &impl GetBackend) -> CcResult<()> {
        let backend = deps.get_backend();
        let Some(session) = backend.session() else {
            return Ok(());
        };

        let request =
            backend.request_with_token(Method::POST, "auth/v1/logout", &session.access_token)?;
        backend.send(request).await?;

        backend.set_session(None);
        Ok(())
    }

    pub async fn send_recovery_email(
        deps: &impl GetBackend,
        email: &InstitutionalEmail,
    ) -> CcResult<()> {
        let backend = deps.get_backend();
        let request = backend
            .request(Method::POST, "auth/v1/recover")?
            .json(&Recovery {
                email: email.as_ref(),
            });
        backend.send(request).await?;
        Ok(())
    }

    pub async fn restore_session(deps: &impl GetBackend, session: Session) -> CcResult<Session> {
        let backend = deps.get_backend();
        let request =
            backend.request_with_token(Method::GET, "auth/v1/user", &session.access_token)?;
        let user: UserResponse = backend
            .send(request)
            .await?
            .json()
            .await
            .map_err(BackendError::from)?;

        let session = Session {
            user: user.into(),
            ..session
        };
        backend.set_session(Some(session.clone()));
        Ok(session)
    }

    pub async fn refresh_session(deps: &impl GetBackend, refresh_token: &str) -> CcResult<Session> {
        let backend = deps.get_backend();
        let request = backend
            .request(Method::POST, "auth/v1/token")?
            .query(&[("grant_type", "refresh_token")])
            .json(&RefreshGrant { refresh_token });
        grant_session(backend, request).await
    }

    pub fn current_session(deps: &impl GetBackend) -> Option<Session> {
        deps.get_backend().session()
    }

    pub fn subscribe_auth_state(deps: &impl GetBackend) -> watch::Receiver<Option<Session>> {
        deps.get_backend().subscribe()
    }
}

/// Send a token grant and make the resulting session current.
async fn grant_session(backend: &Backend, request: RequestBuilder) -> CcResult<Session> {
    let token: TokenResponse = backend
        .send(request)
        .await?
        .json()
        .await
        .map_err(BackendError::from)?;

    let mut session = Session::from_tokens(token.access_token, token.refresh_token)?;
    session.user = token.user.into();

    backend.set_session(Some(session.clone()));
    Ok(session)
}
