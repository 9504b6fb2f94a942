pub mod storage;

use crate::error::{CcError, CcResult};
use crate::profile::repo::{ProfileRepo, ProfileUpdate};
use crate::timestamp::Timestamptz;
use crate::{System, UserId};
use storage::ObjectStorage;

use entrait::entrait_export as entrait;
use rand::Rng;

pub const AVATAR_BUCKET: &str = "profiles";
pub const AVATAR_FOLDER: &str = "avatars";
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

const NAME_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_NAME_LENGTH: usize = 13;

/// An image picked by the user, not yet uploaded.
#[derive(Clone)]
pub struct AvatarFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    pub fn validate(&self) -> CcResult<()> {
        let is_image = self
            .content_type
            .parse::<mime::Mime>()
            .map(|mime| mime.type_() == mime::IMAGE)
            .unwrap_or(false);
        if !is_image {
            return Err(CcError::validation("Please upload an image file"));
        }
        if self.bytes.len() > MAX_AVATAR_BYTES {
            return Err(CcError::validation("Image must be less than 2MB"));
        }
        Ok(())
    }

    /// Text after the last dot of the original name, or the whole name when there is no dot.
    /// Only ASCII letters and digits survive, lowercased.
    fn extension(&self) -> String {
        let extension: String = self
            .file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if extension.is_empty() {
            "img".to_string()
        } else {
            extension
        }
    }
}

/// `avatars/{user}-{random}.{ext}` inside the avatar bucket.
pub fn storage_path(rng: &mut impl Rng, user: UserId, file: &AvatarFile) -> String {
    let random: String = (0..RANDOM_NAME_LENGTH)
        .map(|_| NAME_ALPHABET[rng.gen_range(0..NAME_ALPHABET.len())] as char)
        .collect();
    format!("{AVATAR_FOLDER}/{user}-{random}.{}", file.extension())
}

/// Upload a new avatar and point the profile at it. Returns the public URL.
#[entrait(pub UploadAvatar, mock_api=UploadAvatarMock)]
async fn upload_avatar(
    deps: &(impl ObjectStorage + ProfileRepo + System),
    current_user: UserId,
    file: AvatarFile,
) -> CcResult<String> {
    file.validate()?;

    let path = storage_path(&mut rand::thread_rng(), current_user, &file);
    let content_type = file.content_type.clone();

    deps.upload_object(AVATAR_BUCKET, &path, &content_type, file.bytes)
        .await?;
    let public_url = deps.public_object_url(AVATAR_BUCKET, &path)?;

    deps.update_profile(
        current_user,
        ProfileUpdate {
            full_name: None,
            avatar_url: Some(&public_url),
            updated_at: Timestamptz(deps.get_current_time()),
        },
    )
    .await?;

    tracing::debug!("avatar of {} stored at {}", current_user, path);
    Ok(public_url)
}
