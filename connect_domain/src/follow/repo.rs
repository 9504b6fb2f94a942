use super::{Connection, FollowEdge};
use crate::error::CcResult;
use crate::profile::Profile;
use crate::UserId;

use entrait::entrait_export as entrait;

#[entrait(FollowRepoImpl, delegate_by = DelegateFollowRepo, mock_api = FollowRepoMock)]
pub trait FollowRepo {
    async fn select_follow(
        &self,
        follower: UserId,
        following: UserId,
    ) -> CcResult<Option<FollowEdge>>;

    async fn insert_follow(&self, follower: UserId, following: UserId) -> CcResult<()>;

    async fn delete_follow(&self, follower: UserId, following: UserId) -> CcResult<()>;

    /// Exact number of edges on one side of `user`.
    async fn count_connections(&self, user: UserId, connection: Connection) -> CcResult<u64>;

    /// Profiles on the other end of `user`'s edges, resolved through the edge's foreign key.
    async fn select_connections(
        &self,
        user: UserId,
        connection: Connection,
    ) -> CcResult<Vec<Profile>>;
}
