pub mod auth;
pub mod avatar;
pub mod error;
pub mod follow;
pub mod iter_util;
pub mod message;
pub mod profile;
pub mod timestamp;

use entrait::entrait_export as entrait;

/// Primary key of a `profiles` row, shared with the auth user id.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UserId(pub uuid::Uuid);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

///
/// Mockable system abstraction
///
#[entrait(mock_api=SystemMock)]
pub trait System {
    fn get_current_time(&self) -> time::OffsetDateTime;
}
