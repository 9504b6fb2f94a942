use crate::routes::Route;
use crate::toast::Toasts;

use connect_domain::follow::{FollowApi, FollowCounts};
use connect_domain::profile::{Profile, ProfileApi};
use connect_domain::UserId;

/// Another user's profile, seen by `viewer`.
pub struct UserProfilePage {
    pub viewer: UserId,
    pub profile: Option<Profile>,
    pub is_following: bool,
    pub counts: FollowCounts,
    pub loading: bool,
    pub follow_loading: bool,
}

impl UserProfilePage {
    pub fn new(viewer: UserId) -> Self {
        Self {
            viewer,
            profile: None,
            is_following: false,
            counts: FollowCounts::default(),
            loading: true,
            follow_loading: false,
        }
    }

    pub async fn load(
        &mut self,
        deps: &(impl ProfileApi + FollowApi),
        username: &str,
        toasts: &mut Toasts,
    ) {
        match deps.fetch_profile_by_username(username).await {
            Ok(profile) => {
                if profile.id != self.viewer {
                    self.is_following = match deps.is_following(self.viewer, profile.id).await {
                        Ok(following) => following,
                        Err(e) => {
                            tracing::warn!("could not read follow state: {e}");
                            false
                        }
                    };
                }
                match deps.follow_counts(profile.id).await {
                    Ok(counts) => self.counts = counts,
                    Err(e) => toasts.error(&e),
                }
                self.profile = Some(profile);
            }
            Err(e) => toasts.error(&e),
        }
        self.loading = false;
    }

    /// Follow buttons are hidden on the viewer's own profile.
    pub fn can_follow(&self) -> bool {
        matches!(&self.profile, Some(profile) if profile.id != self.viewer)
    }

    pub async fn toggle_follow(&mut self, deps: &impl FollowApi, toasts: &mut Toasts) {
        let Some(profile) = self.profile.as_ref() else {
            return;
        };
        let target = profile.id;
        let handle = profile.handle();

        self.follow_loading = true;
        if self.is_following {
            match deps.unfollow(self.viewer, target).await {
                Ok(()) => {
                    self.is_following = false;
                    self.counts.followers = self.counts.followers.saturating_sub(1);
                    toasts.success(format!("Unfollowed {handle}"));
                }
                Err(e) => toasts.error(&e),
            }
        } else {
            match deps.follow(self.viewer, target).await {
                Ok(()) => {
                    self.is_following = true;
                    self.counts.followers += 1;
                    toasts.success(format!("Following {handle}"));
                }
                Err(e) => toasts.error(&e),
            }
        }
        self.follow_loading = false;
    }

    pub fn message_route(&self) -> Option<Route> {
        self.profile
            .as_ref()
            .map(|profile| Route::Conversation(profile.username.clone()))
    }
}
