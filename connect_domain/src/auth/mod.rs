pub mod email;
pub mod gateway;
pub mod password;
pub mod session;

use email::InstitutionalEmail;
use gateway::AuthGateway;
use password::Password;
use session::Session;

use crate::error::{CcError, CcResult};

use entrait::entrait_export as entrait;

#[derive(Clone, Default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[entrait(pub AuthApi, mock_api=AuthApiMock)]
pub mod api {
    use super::*;

    pub async fn sign_up(deps: &impl AuthGateway, form: SignUpForm) -> CcResult<()> {
        let email: InstitutionalEmail = form.email.parse()?;
        let password = Password::new_confirmed(form.password, &form.confirm_password)?;

        deps.sign_up_with_password(&email, &password)
            .await
            .map_err(reword_sign_up_error)
    }

    pub async fn sign_in(deps: &impl AuthGateway, email: &str, password: &str) -> CcResult<Session> {
        deps.sign_in_with_password(email, password).await
    }

    pub async fn sign_out(deps: &impl AuthGateway) -> CcResult<()> {
        deps.sign_out_session().await
    }

    pub async fn reset_password(deps: &impl AuthGateway, email: &str) -> CcResult<()> {
        let email: InstitutionalEmail = email.parse()?;
        deps.send_recovery_email(&email).await
    }

    fn reword_sign_up_error(error: CcError) -> CcError {
        match error {
            CcError::Backend { status, message } if message.contains("already registered") => {
                CcError::Backend {
                    status,
                    message: "This email is already registered. Please try logging in instead."
                        .to_string(),
                }
            }
            CcError::Backend { message, .. } | CcError::Network(message)
                if message.contains("network") =>
            {
                CcError::Network(
                    "Network error. Please check your connection and try again.".to_string(),
                )
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gateway::AuthGatewayMock;
    use super::*;

    use assert_matches::*;
    use unimock::*;

    fn form(email: &str, password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn sign_up_with_foreign_domain_never_reaches_backend() {
        let deps = Unimock::new(());
        assert_matches!(
            api::sign_up(&deps, form("me@gmail.com", "secret1", "secret1")).await,
            Err(CcError::Validation(msg)) if msg == email::WRONG_DOMAIN_MESSAGE
        );
    }

    #[tokio::test]
    async fn sign_up_with_short_or_mismatched_password_never_reaches_backend() {
        let deps = Unimock::new(());
        assert_matches!(
            api::sign_up(&deps, form("me@cgu-odisha.ac.in", "12345", "12345")).await,
            Err(CcError::Validation(_))
        );
        assert_matches!(
            api::sign_up(&deps, form("me@cgu-odisha.ac.in", "secret1", "secret2")).await,
            Err(CcError::Validation(_))
        );
    }

    #[tokio::test]
    async fn valid_sign_up_is_forwarded() {
        let deps = Unimock::new(
            AuthGatewayMock::sign_up_with_password
                .next_call(matching!(_, _))
                .returns(Ok(())),
        );
        api::sign_up(&deps, form("me@cgu-odisha.ac.in", "secret1", "secret1"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn already_registered_is_reworded() {
        let deps = Unimock::new(
            AuthGatewayMock::sign_up_with_password
                .next_call(matching!(_, _))
                .returns(Err(CcError::Backend {
                    status: 422,
                    message: "User already registered".to_string(),
                })),
        );
        let error = api::sign_up(&deps, form("me@cgu-odisha.ac.in", "secret1", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(
            "This email is already registered. Please try logging in instead.",
            error.user_message()
        );
    }

    #[tokio::test]
    async fn network_failures_are_reworded() {
        let deps = Unimock::new(
            AuthGatewayMock::sign_up_with_password
                .next_call(matching!(_, _))
                .returns(Err(CcError::Network(
                    "error sending request: network unreachable".to_string(),
                ))),
        );
        let error = api::sign_up(&deps, form("me@cgu-odisha.ac.in", "secret1", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(
            "Network error. Please check your connection and try again.",
            error.user_message()
        );
    }

    #[tokio::test]
    async fn reset_password_checks_domain_first() {
        let deps = Unimock::new(());
        assert_matches!(
            api::reset_password(&deps, "me@yahoo.com").await,
            Err(CcError::Validation(_))
        );

        let deps = Unimock::new(
            AuthGatewayMock::send_recovery_email
                .next_call(matching!(_))
                .returns(Ok(())),
        );
        api::reset_password(&deps, "me@cgu-odisha.ac.in").await.unwrap();
    }
}
