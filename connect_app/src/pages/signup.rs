use crate::routes::Route;
use crate::toast::Toasts;

use connect_domain::auth::{AuthApi, SignUpForm};

pub const SIGNED_UP_MESSAGE: &str =
    "Account created! Please check your email to verify your account.";

#[derive(Default)]
pub struct SignupPage {
    pub form: SignUpForm,
    pub loading: bool,
}

impl SignupPage {
    pub async fn submit(&mut self, deps: &impl AuthApi, toasts: &mut Toasts) -> Option<Route> {
        self.loading = true;
        let result = deps.sign_up(self.form.clone()).await;
        self.loading = false;

        match result {
            Ok(()) => {
                toasts.success(SIGNED_UP_MESSAGE);
                Some(Route::Login)
            }
            Err(e) => {
                toasts.error(&e);
                None
            }
        }
    }
}
