use connect_domain::auth::gateway::AuthGateway;
use connect_domain::auth::session::{AuthUser, Session};
use connect_domain::System;

use tokio::sync::watch;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthStatus {
    Loading,
    SignedOut,
    SignedIn(AuthUser),
}

/// Application-wide view of who is signed in.
///
/// Created in the loading state by [AuthContext::subscribe], settled by [AuthContext::init]
/// and kept current by every sign-in and sign-out the backend announces. Dropping it ends the
/// subscription.
pub struct AuthContext {
    state: watch::Receiver<Option<Session>>,
    loading: bool,
}

impl AuthContext {
    pub fn subscribe(deps: &impl AuthGateway) -> Self {
        Self {
            state: deps.subscribe_auth_state(),
            loading: true,
        }
    }

    /// Restore a session persisted by an earlier run, then leave the loading state.
    ///
    /// Expired sessions are renewed with their refresh token. Rejected sessions leave the
    /// user signed out.
    pub async fn init(&mut self, deps: &(impl AuthGateway + System), stored: Option<Session>) {
        if let Some(session) = stored {
            let restored = if session.is_expired(deps.get_current_time()) {
                tracing::info!("stored session has expired, refreshing");
                deps.refresh_session(&session.refresh_token).await
            } else {
                deps.restore_session(session).await
            };
            if let Err(e) = restored {
                tracing::warn!("could not restore session: {e}");
            }
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state
            .borrow()
            .as_ref()
            .map(|session| session.user.clone())
    }

    pub fn status(&self) -> AuthStatus {
        if self.loading {
            return AuthStatus::Loading;
        }
        match self.user() {
            Some(user) => AuthStatus::SignedIn(user),
            None => AuthStatus::SignedOut,
        }
    }

    /// Wait for the next sign-in or sign-out. Returns `false` once the backend is gone.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }
}
