use crate::routes::Route;
use crate::toast::Toasts;

use connect_domain::auth::session::AuthUser;
use connect_domain::auth::AuthApi;

pub const TITLE: &str = "CGU Connect";
pub const TAGLINE: &str = "Future of college connections";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

/// Shell wrapped around every page that requires a signed-in user.
pub struct Layout {
    pub user: AuthUser,
}

impl Layout {
    pub fn new(user: AuthUser) -> Self {
        Self { user }
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        [
            ("Profile", Route::Profile),
            ("Search", Route::Search),
            ("Connections", Route::Connections),
            ("Messages", Route::Messages),
        ]
        .into_iter()
        .map(|(label, route)| NavItem { label, route })
        .collect()
    }

    /// The nav entry to highlight for `current`.
    pub fn active_item(&self, current: &Route) -> Option<NavItem> {
        let section = match current {
            Route::Conversation(_) => &Route::Messages,
            other => other,
        };
        self.nav_items()
            .into_iter()
            .find(|item| &item.route == section)
    }

    pub async fn sign_out(&self, deps: &impl AuthApi, toasts: &mut Toasts) -> Option<Route> {
        match deps.sign_out().await {
            Ok(()) => Some(Route::Login),
            Err(e) => {
                toasts.error(&e);
                None
            }
        }
    }
}
