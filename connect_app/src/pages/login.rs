use crate::routes::Route;
use crate::toast::Toasts;

use connect_domain::auth::AuthApi;

#[derive(Default)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    pub loading: bool,
}

impl LoginPage {
    pub async fn submit(&mut self, deps: &impl AuthApi, toasts: &mut Toasts) -> Option<Route> {
        self.loading = true;
        let result = deps.sign_in(&self.email, &self.password).await;
        self.loading = false;

        match result {
            Ok(_) => Some(Route::Profile),
            Err(e) => {
                toasts.error(&e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::session;
    use connect_domain::auth::api::AuthApiMock;
    use connect_domain::error::CcError;

    use unimock::*;

    fn page() -> LoginPage {
        LoginPage {
            email: "student1@cgu-odisha.ac.in".to_string(),
            password: "secret1".to_string(),
            loading: false,
        }
    }

    #[tokio::test]
    async fn successful_login_goes_home() {
        let deps = Unimock::new(
            AuthApiMock::sign_in
                .next_call(matching!("student1@cgu-odisha.ac.in", "secret1"))
                .returns(Ok(session(1))),
        );
        let mut toasts = Toasts::default();
        let mut page = page();

        assert_eq!(Some(Route::Profile), page.submit(&deps, &mut toasts).await);
        assert!(!page.loading);
    }

    #[tokio::test]
    async fn backend_message_is_toasted() {
        let deps = Unimock::new(
            AuthApiMock::sign_in
                .next_call(matching!(_, _))
                .returns(Err(CcError::Backend {
                    status: 400,
                    message: "Invalid login credentials".to_string(),
                })),
        );
        let mut toasts = Toasts::default();
        let mut page = page();

        assert_eq!(None, page.submit(&deps, &mut toasts).await);
        assert_eq!("Invalid login credentials", toasts.latest().unwrap().message);
        assert!(!page.loading);
    }
}
