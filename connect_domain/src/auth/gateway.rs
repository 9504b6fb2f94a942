use super::email::InstitutionalEmail;
use super::password::Password;
use super::session::Session;
use crate::error::CcResult;

use entrait::entrait_export as entrait;
use tokio::sync::watch;

/// The hosted authentication service.
///
/// Implementations own the current session and announce every change of it
/// through the watch channel returned by [AuthGateway::subscribe_auth_state].
#[entrait(AuthGatewayImpl, delegate_by = DelegateAuthGateway, mock_api = AuthGatewayMock)]
pub trait AuthGateway {
    async fn sign_up_with_password(
        &self,
        email: &InstitutionalEmail,
        password: &Password,
    ) -> CcResult<()>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> CcResult<Session>;

    async fn sign_out_session(&self) -> CcResult<()>;

    async fn send_recovery_email(&self, email: &InstitutionalEmail) -> CcResult<()>;

    /// Check a stored session with the backend and make it current.
    async fn restore_session(&self, session: Session) -> CcResult<Session>;

    /// Trade a refresh token for a new session and make it current.
    async fn refresh_session(&self, refresh_token: &str) -> CcResult<Session>;

    fn current_session(&self) -> Option<Session>;

    fn subscribe_auth_state(&self) -> watch::Receiver<Option<Session>>;
}
