use crate::rest::{Filter, Query};
use crate::GetBackend;

use connect_domain::error::CcResult;
use connect_domain::profile::repo::{ProfileRepoImpl, ProfileUpdate};
use connect_domain::profile::Profile;
use connect_domain::UserId;

use entrait::*;

const PROFILES: &str = "profiles";

pub struct RestProfileRepo;

#[entrait]
impl ProfileRepoImpl for RestProfileRepo {
    pub async fn select_profile_by_id(
        deps: &impl GetBackend,
        id: UserId,
    ) -> CcResult<Option<Profile>> {
        let query = Query::select("*").filter(Filter::eq("id", id));
        deps.get_backend().select_one(PROFILES, &query).await
    }

    pub async fn select_profiles_by_username(
        deps: &impl GetBackend,
        username: &str,
    ) -> CcResult<Vec<Profile>> {
        let query = Query::select("*").filter(Filter::eq("username", username));
        Ok(deps.get_backend().select(PROFILES, &query).await?)
    }

    pub async fn select_profiles_by_ids(
        deps: &impl GetBackend,
        ids: &[UserId],
    ) -> CcResult<Vec<Profile>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let query = Query::select("*").filter(Filter::is_in("id", ids));
        Ok(deps.get_backend().select(PROFILES, &query).await?)
    }

    pub async fn search_profiles(
        deps: &impl GetBackend,
        term: &str,
        limit: usize,
    ) -> CcResult<Vec<Profile>> {
        let query = Query::select("*")
            .filter(search_filter(term))
            .limit(limit);
        Ok(deps.get_backend().select(PROFILES, &query).await?)
    }

    pub async fn update_profile(
        deps: &impl GetBackend,
        id: UserId,
        update: ProfileUpdate<'_>,
    ) -> CcResult<()> {
        let query = Query::filtered(Filter::eq("id", id));
        deps.get_backend()
            .update(PROFILES, &query, &update)
            .await?;
        Ok(())
    }
}

fn search_filter(term: &str) -> Filter {
    Filter::or([
        Filter::contains("username", term),
        Filter::contains("full_name", term),
    ])
}
