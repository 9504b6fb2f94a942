use crate::auth_context::AuthStatus;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Route {
    Login,
    Signup,
    ForgotPassword,
    Profile,
    Search,
    UserProfile(String),
    Connections,
    Messages,
    Conversation(String),
}

/// What the renderer should do for a requested path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    Loading,
    Render(Route),
    Redirect(Route),
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        Some(match segments.as_slice() {
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["forgot-password"] => Self::ForgotPassword,
            [] => Self::Profile,
            ["search"] => Self::Search,
            ["user", username] => Self::UserProfile(username.to_string()),
            ["connections"] => Self::Connections,
            ["messages"] => Self::Messages,
            ["messages", username] => Self::Conversation(username.to_string()),
            _ => return None,
        })
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::Profile => "/".to_string(),
            Self::Search => "/search".to_string(),
            Self::UserProfile(username) => format!("/user/{username}"),
            Self::Connections => "/connections".to_string(),
            Self::Messages => "/messages".to_string(),
            Self::Conversation(username) => format!("/messages/{username}"),
        }
    }

    /// Public routes are only for signed-out visitors.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Signup | Self::ForgotPassword)
    }
}

pub fn resolve(path: &str, status: &AuthStatus) -> Resolution {
    if matches!(status, AuthStatus::Loading) {
        return Resolution::Loading;
    }
    let Some(route) = Route::parse(path) else {
        return Resolution::Redirect(Route::Profile);
    };

    let signed_in = matches!(status, AuthStatus::SignedIn(_));
    match (route.is_public(), signed_in) {
        (true, true) => Resolution::Redirect(Route::Profile),
        (false, false) => Resolution::Redirect(Route::Login),
        _ => Resolution::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::auth_user;

    use assert_matches::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in [
            Route::Login,
            Route::Signup,
            Route::ForgotPassword,
            Route::Profile,
            Route::Search,
            Route::UserProfile("alice".to_string()),
            Route::Connections,
            Route::Messages,
            Route::Conversation("alice".to_string()),
        ] {
            assert_eq!(Some(route.clone()), Route::parse(&route.path()));
        }
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(Some(Route::Search), Route::parse("/search/?q=x"));
        assert_eq!(None, Route::parse("/user"));
        assert_eq!(None, Route::parse("/user/alice/extra"));
    }

    #[test]
    fn everything_waits_while_loading() {
        for path in ["/", "/login", "/nowhere"] {
            assert_eq!(Resolution::Loading, resolve(path, &AuthStatus::Loading));
        }
    }

    #[test]
    fn signed_out_visitors_are_sent_to_login() {
        assert_eq!(
            Resolution::Redirect(Route::Login),
            resolve("/messages/alice", &AuthStatus::SignedOut)
        );
        assert_eq!(
            Resolution::Render(Route::Signup),
            resolve("/signup", &AuthStatus::SignedOut)
        );
    }

    #[test]
    fn signed_in_users_skip_public_pages() {
        let status = AuthStatus::SignedIn(auth_user(1));
        assert_eq!(
            Resolution::Redirect(Route::Profile),
            resolve("/forgot-password", &status)
        );
        assert_matches!(
            resolve("/user/bob", &status),
            Resolution::Render(Route::UserProfile(name)) if name == "bob"
        );
    }

    #[test]
    fn unknown_paths_go_home() {
        assert_eq!(
            Resolution::Redirect(Route::Profile),
            resolve("/settings", &AuthStatus::SignedOut)
        );
    }
}
