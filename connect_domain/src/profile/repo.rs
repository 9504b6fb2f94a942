use super::Profile;
use crate::error::CcResult;
use crate::timestamp::Timestamptz;
use crate::UserId;

use entrait::entrait_export as entrait;

/// Columns of a `profiles` row the owner may change. `None` leaves a column untouched.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ProfileUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<&'a str>,
    pub updated_at: Timestamptz,
}

#[entrait(ProfileRepoImpl, delegate_by = DelegateProfileRepo, mock_api = ProfileRepoMock)]
pub trait ProfileRepo {
    async fn select_profile_by_id(&self, id: UserId) -> CcResult<Option<Profile>>;

    async fn select_profiles_by_username(&self, username: &str) -> CcResult<Vec<Profile>>;

    async fn select_profiles_by_ids(&self, ids: &[UserId]) -> CcResult<Vec<Profile>>;

    /// Case-insensitive substring match on username or full name.
    async fn search_profiles(&self, term: &str, limit: usize) -> CcResult<Vec<Profile>>;

    async fn update_profile(&self, id: UserId, update: ProfileUpdate<'_>) -> CcResult<()>;
}
