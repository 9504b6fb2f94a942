pub mod repo;

use crate::error::{CcError, CcResult};
use crate::profile::repo::ProfileRepo;
use crate::profile::Profile;
use crate::timestamp::Timestamptz;
use crate::UserId;
use repo::MessageRepo;

use entrait::entrait_export as entrait;
use itertools::Itertools;

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: uuid::Uuid,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub created_at: Timestamptz,
    pub read: bool,
}

impl Message {
    pub fn is_sent_by(&self, user: UserId) -> bool {
        self.sender_id == user
    }

    fn is_unread_for(&self, user: UserId) -> bool {
        self.receiver_id == user && !self.read
    }
}

#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Participants {
    pub sender_id: UserId,
    pub receiver_id: UserId,
}

#[entrait(pub MessageApi, mock_api=MessageApiMock)]
pub mod api {
    use super::*;

    /// Everyone `user` has exchanged a message with, most recent conversation first.
    pub async fn list_conversation_partners(
        deps: &(impl MessageRepo + ProfileRepo),
        user: UserId,
    ) -> CcResult<Vec<Profile>> {
        let partner_ids = deps
            .select_participants(user)
            .await?
            .into_iter()
            .flat_map(|p| [p.sender_id, p.receiver_id])
            .filter(|id| *id != user)
            .unique()
            .collect_vec();

        if partner_ids.is_empty() {
            return Ok(vec![]);
        }

        let mut profiles = deps.select_profiles_by_ids(&partner_ids).await?;
        profiles.sort_by_key(|profile| partner_ids.iter().position(|id| *id == profile.id));
        Ok(profiles)
    }

    /// Load a thread and mark what `user` received in it as read.
    ///
    /// Marking is best effort: a failure is logged and the thread is still returned.
    pub async fn load_thread(
        deps: &impl MessageRepo,
        user: UserId,
        other: UserId,
    ) -> CcResult<Vec<Message>> {
        let messages = deps.select_thread(user, other).await?;

        let unread = messages
            .iter()
            .filter(|message| message.is_unread_for(user))
            .map(|message| message.id)
            .collect_vec();

        if !unread.is_empty() {
            if let Err(e) = deps.mark_read(&unread).await {
                tracing::warn!("could not mark {} messages as read: {}", unread.len(), e);
            }
        }

        Ok(messages)
    }

    pub async fn send_message(
        deps: &impl MessageRepo,
        sender: UserId,
        receiver: UserId,
        content: &str,
    ) -> CcResult<()> {
        if sender == receiver {
            return Err(CcError::CannotMessageSelf);
        }
        let content = content.trim();
        if content.is_empty() {
            return Err(CcError::validation("Message cannot be empty"));
        }
        deps.insert_message(sender, receiver, content).await
    }
}
