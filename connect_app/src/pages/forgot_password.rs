use crate::toast::Toasts;

use connect_domain::auth::AuthApi;

#[derive(Default)]
pub struct ForgotPasswordPage {
    pub email: String,
    pub loading: bool,
    /// Set once the reset link is on its way; the form is replaced by a confirmation.
    pub submitted: bool,
}

impl ForgotPasswordPage {
    pub async fn submit(&mut self, deps: &impl AuthApi, toasts: &mut Toasts) {
        self.loading = true;
        let result = deps.reset_password(&self.email).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.submitted = true;
                toasts.success("Password reset link sent to your email");
            }
            Err(e) => toasts.error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_domain::auth::email::WRONG_DOMAIN_MESSAGE;
    use connect_domain::auth::api::AuthApiMock;
    use connect_domain::error::CcError;

    use unimock::*;

    #[tokio::test]
    async fn sent_link_switches_to_confirmation() {
        let deps = Unimock::new(
            AuthApiMock::reset_password
                .next_call(matching!("student1@cgu-odisha.ac.in"))
                .returns(Ok(())),
        );
        let mut toasts = Toasts::default();
        let mut page = ForgotPasswordPage {
            email: "student1@cgu-odisha.ac.in".to_string(),
            ..Default::default()
        };

        page.submit(&deps, &mut toasts).await;
        assert!(page.submitted);
        assert_eq!(
            "Password reset link sent to your email",
            toasts.latest().unwrap().message
        );
    }

    #[tokio::test]
    async fn foreign_domain_keeps_the_form() {
        let deps = Unimock::new(
            AuthApiMock::reset_password
                .next_call(matching!(_))
                .returns(Err(CcError::validation(WRONG_DOMAIN_MESSAGE))),
        );
        let mut toasts = Toasts::default();
        let mut page = ForgotPasswordPage {
            email: "someone@gmail.com".to_string(),
            ..Default::default()
        };

        page.submit(&deps, &mut toasts).await;
        assert!(!page.submitted);
        assert_eq!(WRONG_DOMAIN_MESSAGE, toasts.latest().unwrap().message);
    }
}
