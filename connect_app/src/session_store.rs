use connect_domain::auth::session::{AuthUser, Session};
use connect_domain::UserId;

use anyhow::Context;
use std::io::ErrorKind;
use std::path::PathBuf;
use time::OffsetDateTime;

/// On-disk form of a session, kept between runs of the client.
#[derive(serde::Serialize, serde::Deserialize)]
struct StoredSession {
    access_token: String,
    refresh_token: String,
    #[serde(with = "time::serde::timestamp")]
    expires_at: OffsetDateTime,
    user_id: UserId,
    email: String,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            expires_at: session.expires_at,
            user_id: session.user.id,
            email: session.user.email.clone(),
        }
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Self {
            access_token: stored.access_token,
            refresh_token: stored.refresh_token,
            expires_at: stored.expires_at,
            user: AuthUser {
                id: stored.user_id,
                email: stored.email,
            },
        }
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The session saved by an earlier run. A missing or unreadable file means none.
    pub fn load(&self) -> Option<Session> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("could not read {}: {e}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str::<StoredSession>(&text) {
            Ok(stored) => Some(stored.into()),
            Err(e) => {
                tracing::warn!("ignoring malformed session file: {e}");
                None
            }
        }
    }

    /// Persist `session`, or forget the stored one when signed out.
    pub fn save(&self, session: Option<&Session>) -> anyhow::Result<()> {
        match session {
            Some(session) => {
                let json = serde_json::to_string(&StoredSession::from(session))?;
                std::fs::write(&self.path, json)
                    .with_context(|| format!("could not write {}", self.path.display()))
            }
            None => match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e).with_context(|| format!("could not remove {}", self.path.display())),
            },
        }
    }
}
