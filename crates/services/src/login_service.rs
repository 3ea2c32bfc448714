use std::sync::Arc;

use tracing::info;
use wellcheck_core::model::{Credentials, UserSession};

use crate::api::{ApiClient, Endpoint, Transport};
use crate::error::LoginError;

/// Authenticates users against the backend login endpoint.
#[derive(Clone)]
pub struct LoginService {
    api: Arc<ApiClient>,
}

impl LoginService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Exchanges credentials for an authenticated session.
    ///
    /// Login goes through the direct transport: auth calls skip the standard
    /// header set the intercepted pipeline attaches.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Api` when the backend rejects the request and
    /// `LoginError::MalformedResponse` when the body cannot be parsed.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserSession, LoginError> {
        let envelope = self
            .api
            .post(Endpoint::Login, credentials, Transport::Direct)
            .await?;

        let session: UserSession = envelope.json().map_err(LoginError::MalformedResponse)?;
        info!(user_id = %session.user_id, "login succeeded");
        Ok(session)
    }
}
