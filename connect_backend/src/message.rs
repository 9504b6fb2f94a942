use crate::rest::{Filter, Order, Query};
use crate::GetBackend;

use connect_domain::error::CcResult;
use connect_domain::message::repo::MessageRepoImpl;
use connect_domain::message::{Message, Participants};
use connect_domain::UserId;

use entrait::*;

const MESSAGES: &str = "messages";

pub struct RestMessageRepo;

#[derive(serde::Serialize)]
struct NewMessage<'a> {
    sender_id: UserId,
    receiver_id: UserId,
    content: &'a str,
}

#[derive(serde::Serialize)]
struct MarkRead {
    read: bool,
}

#[entrait]
impl MessageRepoImpl for RestMessageRepo {
    pub async fn select_participants(
        deps: &impl GetBackend,
        user: UserId,
    ) -> CcResult<Vec<Participants>> {
        let query = Query::select("sender_id,receiver_id")
            .filter(Filter::or([
                Filter::eq("sender_id", user),
                Filter::eq("receiver_id", user),
            ]))
            .order("created_at", Order::Desc);
        Ok(deps.get_backend().select(MESSAGES, &query).await?)
    }

    pub async fn select_thread(
        deps: &impl GetBackend,
        user: UserId,
        other: UserId,
    ) -> CcResult<Vec<Message>> {
        let query = Query::select("*")
            .filter(thread_filter(user, other))
            .order("created_at", Order::Asc);
        Ok(deps.get_backend().select(MESSAGES, &query).await?)
    }

    pub async fn mark_read(deps: &impl GetBackend, ids: &[uuid::Uuid]) -> CcResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let query = Query::filtered(Filter::is_in("id", ids));
        deps.get_backend()
            .update(MESSAGES, &query, &MarkRead { read: true })
            .await?;
        Ok(())
    }

    pub async fn insert_message(
        deps: &impl GetBackend,
        sender: UserId,
        receiver: UserId,
        content: &str,
    ) -> CcResult<()> {
        deps.get_backend()
            .insert(
                MESSAGES,
                &NewMessage {
                    sender_id: sender,
                    receiver_id: receiver,
                    content,
                },
            )
            .await?;
        Ok(())
    }
}

fn thread_filter(user: UserId, other: UserId) -> Filter {
    Filter::or([
        Filter::and([
            Filter::eq("sender_id", user),
            Filter::eq("receiver_id", other),
        ]),
        Filter::and([
            Filter::eq("sender_id", other),
            Filter::eq("receiver_id", user),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_covers_both_directions() {
        let me = UserId(uuid::Uuid::from_bytes([1; 16]));
        let them = UserId(uuid::Uuid::from_bytes([2; 16]));
        let (key, value) = thread_filter(me, them).query_pair();

        assert_eq!("or", key);
        assert_eq!(
            format!(
                "(and(sender_id.eq.{me},receiver_id.eq.{them}),and(sender_id.eq.{them},receiver_id.eq.{me}))"
            ),
            value
        );
    }

    #[test]
    fn message_rows_deserialize() {
        let message: Message = serde_json::from_str(
            r#"{
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "sender_id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "receiver_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "content": "hi",
                "created_at": "2024-03-01T09:05:12.123456+00:00",
                "read": false
            }"#,
        )
        .unwrap();
        assert_eq!("hi", message.content);
        assert_eq!("09:05", message.created_at.time_of_day());
    }
}
