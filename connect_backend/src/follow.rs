use crate::rest::{Filter, Query};
use crate::{BackendResultExt, GetBackend};

use connect_domain::error::{CcError, CcResult};
use connect_domain::follow::repo::FollowRepoImpl;
use connect_domain::follow::{Connection, FollowEdge};
use connect_domain::profile::Profile;
use connect_domain::UserId;

use entrait::*;

const FOLLOWS: &str = "follows";

/// Postgres `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

pub struct RestFollowRepo;

#[derive(serde::Serialize)]
struct NewFollow {
    follower_id: UserId,
    following_id: UserId,
}

#[derive(serde::Deserialize)]
struct ConnectionRow {
    profile: Option<Profile>,
}

#[entrait]
impl FollowRepoImpl for RestFollowRepo {
    pub async fn select_follow(
        deps: &impl GetBackend,
        follower: UserId,
        following: UserId,
    ) -> CcResult<Option<FollowEdge>> {
        let query = Query::select("*")
            .filter(Filter::eq("follower_id", follower))
            .filter(Filter::eq("following_id", following));
        deps.get_backend().select_one(FOLLOWS, &query).await
    }

    pub async fn insert_follow(
        deps: &impl GetBackend,
        follower: UserId,
        following: UserId,
    ) -> CcResult<()> {
        deps.get_backend()
            .insert(
                FOLLOWS,
                &NewFollow {
                    follower_id: follower,
                    following_id: following,
                },
            )
            .await
            .on_code(UNIQUE_VIOLATION, |_| CcError::AlreadyFollowing)
    }

    pub async fn delete_follow(
        deps: &impl GetBackend,
        follower: UserId,
        following: UserId,
    ) -> CcResult<()> {
        let query = Query::filtered(Filter::eq("follower_id", follower))
            .filter(Filter::eq("following_id", following));
        deps.get_backend().delete(FOLLOWS, &query).await?;
        Ok(())
    }

    pub async fn count_connections(
        deps: &impl GetBackend,
        user: UserId,
        connection: Connection,
    ) -> CcResult<u64> {
        let query = Query::select("id").filter(Filter::eq(subject_column(connection), user));
        Ok(deps.get_backend().count(FOLLOWS, &query).await?)
    }

    pub async fn select_connections(
        deps: &impl GetBackend,
        user: UserId,
        connection: Connection,
    ) -> CcResult<Vec<Profile>> {
        let query = Query::select(embedded_profile(connection))
            .filter(Filter::eq(subject_column(connection), user));
        let rows: Vec<ConnectionRow> = deps.get_backend().select(FOLLOWS, &query).await?;

        Ok(rows.into_iter().filter_map(|row| row.profile).collect())
    }
}

/// The edge column holding the user whose connections are listed.
fn subject_column(connection: Connection) -> &'static str {
    match connection {
        Connection::Followers => "following_id",
        Connection::Following => "follower_id",
    }
}

/// The other end of the edge, embedded through its foreign key.
fn embedded_profile(connection: Connection) -> &'static str {
    match connection {
        Connection::Followers => "profile:profiles!follows_follower_id_fkey(*)",
        Connection::Following => "profile:profiles!follows_following_id_fkey(*)",
    }
}
