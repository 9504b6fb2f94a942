use connect_domain::auth::session::{AuthUser, Session};
use connect_domain::profile::Profile;
use connect_domain::timestamp::Timestamptz;
use connect_domain::UserId;

use time::OffsetDateTime;

pub fn test_time() -> OffsetDateTime {
    time::macros::datetime!(2024-03-01 09:30:00 UTC)
}

pub fn user_id(n: u8) -> UserId {
    UserId(uuid::Uuid::from_bytes([n; 16]))
}

pub fn auth_user(n: u8) -> AuthUser {
    AuthUser {
        id: user_id(n),
        email: format!("student{n}@cgu-odisha.ac.in"),
    }
}

pub fn session(n: u8) -> Session {
    Session {
        access_token: format!("access-{n}"),
        refresh_token: format!("refresh-{n}"),
        expires_at: test_time() + time::Duration::hours(1),
        user: auth_user(n),
    }
}

pub fn profile(n: u8, username: &str) -> Profile {
    Profile {
        id: user_id(n),
        username: username.to_string(),
        full_name: None,
        avatar_url: None,
        created_at: Timestamptz(test_time()),
        updated_at: Timestamptz(test_time()),
    }
}
