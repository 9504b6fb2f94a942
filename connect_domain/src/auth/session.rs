use crate::error::{CcError, CcResult};
use crate::UserId;

use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
}

/// A signed-in session handed out by the hosted auth service.
#[derive(Clone, Eq, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: OffsetDateTime,
    pub user: AuthUser,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct AccessTokenClaims {
    pub sub: Uuid,
    /// Standard JWT `exp` claim.
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    /// Rebuild a session from stored tokens.
    ///
    /// The claims are read without verifying the signature, the backend does that on every request.
    pub fn from_tokens(access_token: String, refresh_token: String) -> CcResult<Self> {
        let claims = read_claims(&access_token)?;
        let expires_at = OffsetDateTime::from_unix_timestamp(claims.exp)
            .map_err(|_| CcError::Unauthorized)?;

        Ok(Self {
            access_token,
            refresh_token,
            expires_at,
            user: AuthUser {
                id: UserId(claims.sub),
                email: claims.email.unwrap_or_default(),
            },
        })
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }
}

pub fn read_claims(access_token: &str) -> CcResult<AccessTokenClaims> {
    let jwt = jwt::Token::<jwt::Header, AccessTokenClaims, _>::parse_unverified(access_token)
        .map_err(|_| CcError::Unauthorized)?;
    let (_header, claims) = jwt.into();
    Ok(claims)
}
