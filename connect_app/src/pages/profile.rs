use crate::toast::Toasts;

use connect_domain::avatar::{AvatarFile, UploadAvatar};
use connect_domain::follow::{FollowApi, FollowCounts};
use connect_domain::profile::{Profile, ProfileApi};
use connect_domain::timestamp::Timestamptz;
use connect_domain::UserId;

/// The signed-in user's own profile, with the edit form and avatar upload.
pub struct ProfilePage {
    pub profile: Option<Profile>,
    /// Bound to the full name input.
    pub full_name: String,
    pub counts: FollowCounts,
    pub loading: bool,
    pub updating: bool,
    pub uploading: bool,
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self {
            profile: None,
            full_name: String::new(),
            counts: FollowCounts::default(),
            loading: true,
            updating: false,
            uploading: false,
        }
    }
}

impl ProfilePage {
    pub async fn load(
        &mut self,
        deps: &(impl ProfileApi + FollowApi),
        user: UserId,
        toasts: &mut Toasts,
    ) {
        match deps.fetch_profile(user).await {
            Ok(profile) => {
                self.full_name = profile.full_name.clone().unwrap_or_default();
                self.profile = Some(profile);
                match deps.follow_counts(user).await {
                    Ok(counts) => self.counts = counts,
                    Err(e) => toasts.error(&e),
                }
            }
            Err(e) => toasts.error(&e),
        }
        self.loading = false;
    }

    pub async fn update(&mut self, deps: &impl ProfileApi, user: UserId, toasts: &mut Toasts) {
        self.updating = true;
        match deps.update_full_name(user, &self.full_name).await {
            Ok(updated_at) => {
                toasts.success("Profile updated successfully");
                if let Some(profile) = &mut self.profile {
                    profile.full_name = Some(self.full_name.clone());
                    profile.updated_at = updated_at;
                }
            }
            Err(e) => toasts.error(&e),
        }
        self.updating = false;
    }

    pub async fn upload_avatar(
        &mut self,
        deps: &impl UploadAvatar,
        user: UserId,
        file: AvatarFile,
        toasts: &mut Toasts,
    ) {
        self.uploading = true;
        match deps.upload_avatar(user, file).await {
            Ok(url) => {
                toasts.success("Profile image updated successfully");
                if let Some(profile) = &mut self.profile {
                    profile.avatar_url = Some(url);
                }
            }
            Err(e) => toasts.error(&e),
        }
        self.uploading = false;
    }

    pub fn last_updated(&self) -> Option<Timestamptz> {
        self.profile.as_ref().map(|profile| profile.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;
    use crate::toast::ToastKind;
    use connect_domain::avatar::UploadAvatarMock;
    use connect_domain::error::CcError;
    use connect_domain::follow::api::FollowApiMock;
    use connect_domain::profile::api::ProfileApiMock;

    use unimock::*;

    async fn loaded_page(deps: &Unimock) -> ProfilePage {
        let mut page = ProfilePage::default();
        page.load(deps, user_id(1), &mut Toasts::default()).await;
        page
    }

    fn load_clauses() -> impl Clause {
        let mut me = profile(1, "me");
        me.full_name = Some("Old Name".to_string());
        (
            ProfileApiMock::fetch_profile
                .next_call(matching!(_))
                .returns(Ok(me)),
            FollowApiMock::follow_counts
                .next_call(matching!(_))
                .returns(Ok(FollowCounts {
                    followers: 3,
                    following: 5,
                })),
        )
    }

    #[tokio::test]
    async fn load_fills_form_and_counts() {
        let deps = Unimock::new(load_clauses());
        let page = loaded_page(&deps).await;

        assert!(!page.loading);
        assert_eq!("Old Name", page.full_name);
        assert_eq!(3, page.counts.followers);
        assert_eq!(5, page.counts.following);
    }

    #[tokio::test]
    async fn missing_profile_degrades_to_empty_page() {
        let deps = Unimock::new(
            ProfileApiMock::fetch_profile
                .next_call(matching!(_))
                .returns(Err(CcError::ProfileNotFound)),
        );
        let mut toasts = Toasts::default();
        let mut page = ProfilePage::default();
        page.load(&deps, user_id(1), &mut toasts).await;

        assert!(!page.loading);
        assert!(page.profile.is_none());
        assert_eq!("User not found", toasts.latest().unwrap().message);
    }

    #[tokio::test]
    async fn update_writes_name_locally() {
        let later = Timestamptz(test_time() + time::Duration::minutes(5));
        let deps = Unimock::new((
            load_clauses(),
            ProfileApiMock::update_full_name
                .next_call(matching!(_, "New Name"))
                .returns(Ok(later)),
        ));
        let mut page = loaded_page(&deps).await;
        let mut toasts = Toasts::default();

        page.full_name = "New Name".to_string();
        page.update(&deps, user_id(1), &mut toasts).await;

        assert_eq!(
            Some("New Name"),
            page.profile.as_ref().unwrap().full_name.as_deref()
        );
        assert_eq!(Some(later), page.last_updated());
        assert_eq!("Profile updated successfully", toasts.latest().unwrap().message);
        assert!(!page.updating);
    }

    #[tokio::test]
    async fn uploaded_avatar_replaces_the_old_one() {
        let deps = Unimock::new((
            load_clauses(),
            UploadAvatarMock
                .next_call(matching!(_, _))
                .returns(Ok("https://cdn.example/new.png".to_string())),
        ));
        let mut page = loaded_page(&deps).await;
        let mut toasts = Toasts::default();

        let file = AvatarFile {
            file_name: "me.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        page.upload_avatar(&deps, user_id(1), file, &mut toasts).await;

        assert_eq!(
            Some("https://cdn.example/new.png"),
            page.profile.as_ref().unwrap().avatar_url.as_deref()
        );
        assert_eq!(ToastKind::Success, toasts.latest().unwrap().kind);
        assert!(!page.uploading);
    }

    #[tokio::test]
    async fn rejected_avatar_is_toasted() {
        let deps = Unimock::new((
            load_clauses(),
            UploadAvatarMock
                .next_call(matching!(_, _))
                .returns(Err(CcError::validation("Image must be less than 2MB"))),
        ));
        let mut page = loaded_page(&deps).await;
        let mut toasts = Toasts::default();

        let file = AvatarFile {
            file_name: "huge.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![],
        };
        page.upload_avatar(&deps, user_id(1), file, &mut toasts).await;

        assert_eq!(None, page.profile.as_ref().unwrap().avatar_url);
        assert_eq!("Image must be less than 2MB", toasts.latest().unwrap().message);
    }
}
