use std::borrow::Cow;

pub type CcResult<T, E = CcError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum CcError {
    /// Rejected locally, before talking to the backend.
    #[error("{0}")]
    Validation(Cow<'static, str>),

    #[error("You must be logged in")]
    Unauthorized,

    #[error("User not found")]
    ProfileNotFound,

    #[error("You are already following this user")]
    AlreadyFollowing,

    #[error("You cannot follow yourself")]
    CannotFollowSelf,

    #[error("You cannot message yourself")]
    CannotMessageSelf,

    /// The hosted backend answered with an error payload.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    #[error("an unexpected error occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl CcError {
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation(message.into())
    }

    /// Text shown to the user in a toast notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Anyhow(e) => {
                tracing::error!("Generic error: {:?}", e);
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}
