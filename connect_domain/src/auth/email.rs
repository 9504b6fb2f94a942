use std::str::FromStr;

use crate::error::CcError;

/// Only addresses of the college domain may register or reset a password.
pub const INSTITUTION_EMAIL_SUFFIX: &str = "@cgu-odisha.ac.in";

pub const WRONG_DOMAIN_MESSAGE: &str = "Only CGU Odisha email addresses are allowed";

#[derive(Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct InstitutionalEmail(String);

impl FromStr for InstitutionalEmail {
    type Err = CcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix(INSTITUTION_EMAIL_SUFFIX) {
            Some(local_part) if !local_part.is_empty() => Ok(Self(s.into())),
            _ => Err(CcError::validation(WRONG_DOMAIN_MESSAGE)),
        }
    }
}

impl AsRef<str> for InstitutionalEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
