pub mod repo;

use crate::error::{CcError, CcResult};
use crate::iter_util::Single;
use crate::timestamp::Timestamptz;
use crate::{System, UserId};
use repo::{ProfileRepo, ProfileUpdate};

use entrait::entrait_export as entrait;

pub const SEARCH_LIMIT: usize = 20;

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamptz,
    pub updated_at: Timestamptz,
}

impl Profile {
    /// Full name when one is set, otherwise the username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }

    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

#[entrait(pub ProfileApi, mock_api=ProfileApiMock)]
pub mod api {
    use super::*;

    pub async fn fetch_profile(deps: &impl ProfileRepo, id: UserId) -> CcResult<Profile> {
        deps.select_profile_by_id(id)
            .await?
            .ok_or(CcError::ProfileNotFound)
    }

    pub async fn fetch_profile_by_username(
        deps: &impl ProfileRepo,
        username: &str,
    ) -> CcResult<Profile> {
        deps.select_profiles_by_username(username)
            .await?
            .into_iter()
            .single_or_none()?
            .ok_or(CcError::ProfileNotFound)
    }

    /// Returns the `updated_at` written alongside the new name.
    pub async fn update_full_name(
        deps: &(impl ProfileRepo + System),
        current_user: UserId,
        full_name: &str,
    ) -> CcResult<Timestamptz> {
        let updated_at = Timestamptz(deps.get_current_time());
        deps.update_profile(
            current_user,
            ProfileUpdate {
                full_name: Some(full_name),
                avatar_url: None,
                updated_at,
            },
        )
        .await?;
        Ok(updated_at)
    }

    pub async fn search_profiles(deps: &impl ProfileRepo, term: &str) -> CcResult<Vec<Profile>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(CcError::validation("Please enter a search term"));
        }
        deps.search_profiles(term, SEARCH_LIMIT).await
    }
}
