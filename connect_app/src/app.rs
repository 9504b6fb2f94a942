use crate::config::Config;

use connect_backend::auth::GoTrueAuth;
use connect_backend::follow::RestFollowRepo;
use connect_backend::message::RestMessageRepo;
use connect_backend::profile::RestProfileRepo;
use connect_backend::storage::SupabaseStorage;
use connect_backend::{Backend, GetBackend};
use connect_domain::auth::gateway::DelegateAuthGateway;
use connect_domain::avatar::storage::DelegateObjectStorage;
use connect_domain::follow::repo::DelegateFollowRepo;
use connect_domain::message::repo::DelegateMessageRepo;
use connect_domain::profile::repo::DelegateProfileRepo;
use connect_domain::System;

use anyhow::Context;
use entrait::Impl;
use time::OffsetDateTime;

/// The application context every view runs against.
pub struct App {
    pub backend: Backend,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Impl<Self>> {
        let backend = Backend::new(
            config.supabase_url.clone(),
            config.supabase_anon_key.clone(),
        )
        .context("could not set up backend client")?;

        Ok(Impl::new(App { backend }))
    }
}

impl GetBackend for App {
    fn get_backend(&self) -> &Backend {
        &self.backend
    }
}

impl System for App {
    fn get_current_time(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

impl DelegateAuthGateway<Self> for App {
    type Target = GoTrueAuth;
}

impl DelegateProfileRepo<Self> for App {
    type Target = RestProfileRepo;
}

impl DelegateFollowRepo<Self> for App {
    type Target = RestFollowRepo;
}

impl DelegateMessageRepo<Self> for App {
    type Target = RestMessageRepo;
}

impl DelegateObjectStorage<Self> for App {
    type Target = SupabaseStorage;
}
