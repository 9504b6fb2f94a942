use super::{Message, Participants};
use crate::error::CcResult;
use crate::UserId;

use entrait::entrait_export as entrait;

#[entrait(MessageRepoImpl, delegate_by = DelegateMessageRepo, mock_api = MessageRepoMock)]
pub trait MessageRepo {
    /// Sender and receiver of every message `user` took part in, newest first.
    async fn select_participants(&self, user: UserId) -> CcResult<Vec<Participants>>;

    /// Both directions between `user` and `other`, oldest first.
    async fn select_thread(&self, user: UserId, other: UserId) -> CcResult<Vec<Message>>;

    async fn mark_read(&self, ids: &[uuid::Uuid]) -> CcResult<()>;

    async fn insert_message(
        &self,
        sender: UserId,
        receiver: UserId,
        content: &str,
    ) -> CcResult<()>;
}
