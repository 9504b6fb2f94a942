use crate::{Backend, BackendError, GetBackend};

use connect_domain::avatar::storage::ObjectStorageImpl;
use connect_domain::error::CcResult;

use entrait::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use url::Url;

pub struct SupabaseStorage;

#[entrait]
impl ObjectStorageImpl for SupabaseStorage {
    pub async fn upload_object(
        deps: &impl GetBackend,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> CcResult<()> {
        let backend = deps.get_backend();
        let url = object_url(backend, &["object"], bucket, path)?;
        let request = backend
            .request_url(Method::POST, url)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes);
        backend.send(request).await?;
        Ok(())
    }

    pub fn public_object_url(deps: &impl GetBackend, bucket: &str, path: &str) -> CcResult<String> {
        let url = object_url(deps.get_backend(), &["object", "public"], bucket, path)?;
        Ok(url.to_string())
    }
}

/// `storage/v1/{prefix..}/{bucket}/{path}` with every segment percent-encoded.
fn object_url(
    backend: &Backend,
    prefix: &[&str],
    bucket: &str,
    path: &str,
) -> Result<Url, BackendError> {
    let mut url = backend.endpoint("storage/v1/")?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(prefix)
        .push(bucket)
        .extend(path.split('/'));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_backend;

    #[test]
    fn public_url_points_into_public_bucket() {
        let url = object_url(
            &test_backend(),
            &["object", "public"],
            "profiles",
            "avatars/u-abc.png",
        )
        .unwrap();
        assert_eq!(
            "https://campus.example.co/storage/v1/object/public/profiles/avatars/u-abc.png",
            url.as_str()
        );
    }

    #[test]
    fn reserved_characters_stay_inside_the_object_name() {
        let url = object_url(&test_backend(), &["object"], "profiles", "avatars/a.p?n#g").unwrap();
        assert_eq!(
            "/storage/v1/object/profiles/avatars/a.p%3Fn%23g",
            url.path()
        );
        assert_eq!(None, url.query());
        assert_eq!(None, url.fragment());
    }
}
