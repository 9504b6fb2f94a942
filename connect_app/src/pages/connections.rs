use crate::toast::Toasts;

use connect_domain::follow::{Connection, FollowApi};
use connect_domain::profile::Profile;
use connect_domain::UserId;

pub struct ConnectionsPage {
    pub user: UserId,
    pub tab: Connection,
    pub profiles: Vec<Profile>,
    pub loading: bool,
}

impl ConnectionsPage {
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            tab: Connection::default(),
            profiles: vec![],
            loading: true,
        }
    }

    pub async fn load(&mut self, deps: &impl FollowApi, toasts: &mut Toasts) {
        self.loading = true;
        match deps.list_connections(self.user, self.tab).await {
            Ok(profiles) => self.profiles = profiles,
            Err(e) => {
                self.profiles.clear();
                toasts.error(&e);
            }
        }
        self.loading = false;
    }

    pub async fn select_tab(&mut self, deps: &impl FollowApi, tab: Connection, toasts: &mut Toasts) {
        self.tab = tab;
        self.load(deps, toasts).await;
    }

    pub async fn unfollow(&mut self, deps: &impl FollowApi, target: UserId, toasts: &mut Toasts) {
        match deps.unfollow(self.user, target).await {
            Ok(()) => {
                if self.tab == Connection::Following {
                    self.profiles.retain(|profile| profile.id != target);
                }
                toasts.success("Unfollowed successfully");
            }
            Err(e) => toasts.error(&e),
        }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.loading || !self.profiles.is_empty() {
            return None;
        }
        Some(match self.tab {
            Connection::Followers => "You don't have any followers yet",
            Connection::Following => "You're not following anyone yet",
        })
    }
}
