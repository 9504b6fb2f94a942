use crate::routes::Route;
use crate::toast::Toasts;

use connect_domain::message::{Message, MessageApi};
use connect_domain::profile::{Profile, ProfileApi};
use connect_domain::UserId;

pub const NO_CONVERSATIONS: &str = "No conversations yet";
pub const EMPTY_THREAD: &str = "No messages yet. Say hello!";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Alignment {
    Left,
    Right,
}

/// One rendered message in the open thread.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bubble {
    pub content: String,
    pub time: String,
    pub alignment: Alignment,
}

pub struct MessagesPage {
    pub user: UserId,
    pub conversations: Vec<Profile>,
    pub active: Option<Profile>,
    pub thread: Vec<Message>,
    pub composer: String,
    pub loading: bool,
    pub sending: bool,
}

impl MessagesPage {
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            conversations: vec![],
            active: None,
            thread: vec![],
            composer: String::new(),
            loading: true,
            sending: false,
        }
    }

    pub async fn load_conversations(&mut self, deps: &impl MessageApi, toasts: &mut Toasts) {
        match deps.list_conversation_partners(self.user).await {
            Ok(partners) => self.conversations = partners,
            Err(e) => toasts.error(&e),
        }
        self.loading = false;
    }

    /// Open the thread with `username`. Unknown users send the viewer back to the inbox.
    pub async fn open(
        &mut self,
        deps: &(impl ProfileApi + MessageApi),
        username: &str,
        toasts: &mut Toasts,
    ) -> Option<Route> {
        match deps.fetch_profile_by_username(username).await {
            Ok(profile) => {
                let other = profile.id;
                self.active = Some(profile);
                self.thread.clear();
                self.refresh_thread(deps, other, toasts).await;
                None
            }
            Err(e) => {
                toasts.error(&e);
                self.active = None;
                Some(Route::Messages)
            }
        }
    }

    pub async fn send(&mut self, deps: &impl MessageApi, toasts: &mut Toasts) {
        let Some(active) = self.active.clone() else {
            return;
        };
        if self.composer.trim().is_empty() {
            return;
        }

        self.sending = true;
        match deps.send_message(self.user, active.id, &self.composer).await {
            Ok(()) => {
                self.composer.clear();
                self.refresh_thread(deps, active.id, toasts).await;
                if !self.conversations.iter().any(|p| p.id == active.id) {
                    self.conversations.insert(0, active);
                }
            }
            Err(e) => toasts.error(&e),
        }
        self.sending = false;
    }

    pub fn bubbles(&self) -> Vec<Bubble> {
        self.thread
            .iter()
            .map(|message| Bubble {
                content: message.content.clone(),
                time: message.created_at.time_of_day(),
                alignment: if message.is_sent_by(self.user) {
                    Alignment::Right
                } else {
                    Alignment::Left
                },
            })
            .collect()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.active.is_some() {
            self.thread.is_empty().then_some(EMPTY_THREAD)
        } else {
            (!self.loading && self.conversations.is_empty()).then_some(NO_CONVERSATIONS)
        }
    }

    async fn refresh_thread(&mut self, deps: &impl MessageApi, other: UserId, toasts: &mut Toasts) {
        match deps.load_thread(self.user, other).await {
            Ok(thread) => self.thread = thread,
            Err(e) => toasts.error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;
    use connect_domain::error::CcError;
    use connect_domain::message::api::MessageApiMock;
    use connect_domain::profile::api::ProfileApiMock;
    use connect_domain::timestamp::Timestamptz;

    use unimock::*;

    fn message(n: u8, from: UserId, to: UserId, content: &str) -> Message {
        Message {
            id: uuid::Uuid::from_bytes([n; 16]),
            sender_id: from,
            receiver_id: to,
            content: content.to_string(),
            created_at: Timestamptz(test_time()),
            read: false,
        }
    }

    #[tokio::test]
    async fn saying_hi_to_alice() {
        let me = user_id(1);
        let alice = profile(2, "alice");
        let deps = Unimock::new((
            MessageApiMock::list_conversation_partners
                .next_call(matching!(_))
                .returns(Ok(vec![profile(3, "bob")])),
            ProfileApiMock::fetch_profile_by_username
                .next_call(matching!("alice"))
                .returns(Ok(alice.clone())),
            MessageApiMock::load_thread
                .next_call(matching!(_, _))
                .returns(Ok(vec![])),
            MessageApiMock::send_message
                .next_call(matching!(_, _, "hi"))
                .returns(Ok(())),
            MessageApiMock::load_thread
                .next_call(matching!(_, _))
                .returns(Ok(vec![message(1, me, alice.id, "hi")])),
        ));
        let mut toasts = Toasts::default();
        let mut page = MessagesPage::new(me);

        page.load_conversations(&deps, &mut toasts).await;
        assert_eq!(None, page.open(&deps, "alice", &mut toasts).await);
        assert_eq!(Some(EMPTY_THREAD), page.empty_message());

        page.composer = "hi".to_string();
        page.send(&deps, &mut toasts).await;

        assert_eq!("", page.composer);
        assert_eq!(
            vec![Bubble {
                content: "hi".to_string(),
                time: "09:30".to_string(),
                alignment: Alignment::Right,
            }],
            page.bubbles()
        );
        assert_eq!("alice", page.conversations[0].username);
        assert_eq!(2, page.conversations.len());
        assert!(toasts.is_empty());
    }

    #[tokio::test]
    async fn received_messages_are_left_aligned() {
        let me = user_id(1);
        let bob = profile(3, "bob");
        let deps = Unimock::new((
            ProfileApiMock::fetch_profile_by_username
                .next_call(matching!("bob"))
                .returns(Ok(bob.clone())),
            MessageApiMock::load_thread
                .next_call(matching!(_, _))
                .returns(Ok(vec![
                    message(1, bob.id, me, "hello"),
                    message(2, me, bob.id, "hey"),
                ])),
        ));
        let mut page = MessagesPage::new(me);
        page.open(&deps, "bob", &mut Toasts::default()).await;

        let alignments: Vec<_> = page.bubbles().into_iter().map(|b| b.alignment).collect();
        assert_eq!(vec![Alignment::Left, Alignment::Right], alignments);
    }

    #[tokio::test]
    async fn unknown_username_returns_to_inbox() {
        let deps = Unimock::new(
            ProfileApiMock::fetch_profile_by_username
                .next_call(matching!("ghost"))
                .returns(Err(CcError::ProfileNotFound)),
        );
        let mut toasts = Toasts::default();
        let mut page = MessagesPage::new(user_id(1));

        assert_eq!(
            Some(Route::Messages),
            page.open(&deps, "ghost", &mut toasts).await
        );
        assert_eq!("User not found", toasts.latest().unwrap().message);
    }

    #[tokio::test]
    async fn blank_composer_sends_nothing() {
        let deps = Unimock::new((
            ProfileApiMock::fetch_profile_by_username
                .next_call(matching!("alice"))
                .returns(Ok(profile(2, "alice"))),
            MessageApiMock::load_thread
                .next_call(matching!(_, _))
                .returns(Ok(vec![])),
        ));
        let mut toasts = Toasts::default();
        let mut page = MessagesPage::new(user_id(1));
        page.open(&deps, "alice", &mut toasts).await;

        page.composer = "   ".to_string();
        page.send(&deps, &mut toasts).await;
        assert_eq!("   ", page.composer);
        assert!(toasts.is_empty());
    }

    #[tokio::test]
    async fn empty_inbox() {
        let deps = Unimock::new(
            MessageApiMock::list_conversation_partners
                .next_call(matching!(_))
                .returns(Ok(vec![])),
        );
        let mut page = MessagesPage::new(user_id(1));
        assert_eq!(None, page.empty_message());

        page.load_conversations(&deps, &mut Toasts::default()).await;
        assert_eq!(Some(NO_CONVERSATIONS), page.empty_message());
    }
}
