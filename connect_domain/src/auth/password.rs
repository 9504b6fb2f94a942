use crate::error::{CcError, CcResult};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Warning: This should not implement Debug
#[derive(Clone, Eq, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Validate a new password against its confirmation field.
    ///
    /// The mismatch check runs first, matching the order the signup form reports errors in.
    pub fn new_confirmed(password: String, confirmation: &str) -> CcResult<Self> {
        if password != confirmation {
            return Err(CcError::validation("Passwords do not match"));
        }
        // counted in UTF-16 code units, the way the signup form measures input
        if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(CcError::validation(
                "Password must be at least 6 characters",
            ));
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
