use crate::error::CcResult;

use entrait::entrait_export as entrait;

#[entrait(ObjectStorageImpl, delegate_by = DelegateObjectStorage, mock_api = ObjectStorageMock)]
pub trait ObjectStorage {
    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> CcResult<()>;

    fn public_object_url(&self, bucket: &str, path: &str) -> CcResult<String>;
}
