use std::sync::Arc;

use async_trait::async_trait;
use auth::SessionContext;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::Handle;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of UserServicePort with the store injected at
/// construction.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<UserId, UserError> {
        let result = self
            .repository
            .create(&credentials.handle, &credentials.secret)
            .await;

        match &result {
            Ok(id) => {
                tracing::info!(user_id = %id, handle = %credentials.handle, "User registered")
            }
            Err(UserError::DuplicateHandle(handle)) => {
                tracing::debug!(handle = %handle, "Registration rejected: handle taken")
            }
            Err(e) => tracing::error!(error = %e, "Registration failed"),
        }

        result
    }

    async fn login(
        &self,
        credentials: Credentials,
        session: &dyn SessionContext,
    ) -> Result<Handle, UserError> {
        let user = self
            .repository
            .find_by_credentials(&credentials.handle, &credentials.secret)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Credential lookup failed"))?
            .ok_or_else(|| {
                tracing::debug!(handle = %credentials.handle, "Login rejected");
                UserError::InvalidCredentials
            })?;

        session
            .authenticate(user.handle.as_str())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to store session"))?;

        tracing::info!(user_id = %user.id, handle = %user.handle, "User logged in");

        Ok(user.handle)
    }
}
