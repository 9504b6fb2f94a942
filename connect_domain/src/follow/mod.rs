pub mod repo;

use crate::error::{CcError, CcResult};
use crate::profile::Profile;
use crate::timestamp::Timestamptz;
use crate::UserId;
use repo::FollowRepo;

use entrait::entrait_export as entrait;

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FollowEdge {
    pub id: uuid::Uuid,
    pub follower_id: UserId,
    pub following_id: UserId,
    pub created_at: Timestamptz,
}

/// Which side of the follow graph to look at, relative to one user.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Connection {
    /// Users following the subject.
    #[default]
    Followers,
    /// Users the subject follows.
    Following,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FollowCounts {
    pub followers: u64,
    pub following: u64,
}

#[entrait(pub FollowApi, mock_api=FollowApiMock)]
pub mod api {
    use super::*;

    pub async fn is_following(
        deps: &impl FollowRepo,
        viewer: UserId,
        target: UserId,
    ) -> CcResult<bool> {
        Ok(deps.select_follow(viewer, target).await?.is_some())
    }

    pub async fn follow(deps: &impl FollowRepo, viewer: UserId, target: UserId) -> CcResult<()> {
        if viewer == target {
            return Err(CcError::CannotFollowSelf);
        }
        deps.insert_follow(viewer, target).await
    }

    pub async fn unfollow(deps: &impl FollowRepo, viewer: UserId, target: UserId) -> CcResult<()> {
        deps.delete_follow(viewer, target).await
    }

    pub async fn follow_counts(deps: &impl FollowRepo, user: UserId) -> CcResult<FollowCounts> {
        Ok(FollowCounts {
            followers: deps.count_connections(user, Connection::Followers).await?,
            following: deps.count_connections(user, Connection::Following).await?,
        })
    }

    pub async fn list_connections(
        deps: &impl FollowRepo,
        user: UserId,
        connection: Connection,
    ) -> CcResult<Vec<Profile>> {
        deps.select_connections(user, connection).await
    }
}
