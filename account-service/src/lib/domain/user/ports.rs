use async_trait::async_trait;
use auth::SessionContext;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::Handle;
use crate::domain::user::models::Secret;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for account domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Does not touch the caller's session; the caller logs in separately.
    ///
    /// # Arguments
    /// * `credentials` - Validated handle and secret
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `DuplicateHandle` - Handle is already taken
    /// * `StoreFault` - Store operation failed
    async fn register(&self, credentials: Credentials) -> Result<UserId, UserError>;

    /// Verify credentials and authenticate the caller's session.
    ///
    /// # Arguments
    /// * `credentials` - Validated handle and secret
    /// * `session` - Session of the request being served
    ///
    /// # Returns
    /// Handle the session is now authenticated as
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown handle or wrong secret (not distinguished)
    /// * `StoreFault` - Store or session operation failed
    async fn login(
        &self,
        credentials: Credentials,
        session: &dyn SessionContext,
    ) -> Result<Handle, UserError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user record.
    ///
    /// The uniqueness check and the insert are a single atomic step.
    ///
    /// # Arguments
    /// * `handle` - Handle to register
    /// * `secret` - Secret stored verbatim
    ///
    /// # Returns
    /// Store-assigned identifier
    ///
    /// # Errors
    /// * `DuplicateHandle` - Handle already exists (case-sensitive)
    /// * `StoreFault` - Store operation failed
    async fn create(&self, handle: &Handle, secret: &Secret) -> Result<UserId, UserError>;

    /// Retrieve the user matching both handle and secret.
    ///
    /// # Arguments
    /// * `handle` - Handle to match exactly
    /// * `secret` - Secret to match exactly
    ///
    /// # Returns
    /// Optional user entity (None for unknown handle or wrong secret alike)
    ///
    /// # Errors
    /// * `StoreFault` - Store operation failed
    async fn find_by_credentials(
        &self,
        handle: &Handle,
        secret: &Secret,
    ) -> Result<Option<User>, UserError>;
}
