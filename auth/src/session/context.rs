use async_trait::async_trait;
use tower_sessions::Session;

use super::errors::SessionError;

/// Key under which the authenticated handle is stored in session data.
pub(crate) const SESSION_HANDLE_KEY: &str = "handle";

/// Request-scoped view of the caller's server-held session.
///
/// A session is either anonymous (no handle) or authenticated as exactly one
/// handle. Expiry is the concern of whatever store backs the session.
#[async_trait]
pub trait SessionContext: Send + Sync {
    /// Read the handle this session is authenticated as.
    ///
    /// # Returns
    /// `Some(handle)` for an authenticated session, `None` for an anonymous one
    ///
    /// # Errors
    /// * `ReadFailed` - Session store could not be read
    async fn authenticated_handle(&self) -> Result<Option<String>, SessionError>;

    /// Mark this session as authenticated for `handle`.
    ///
    /// # Arguments
    /// * `handle` - Identity that passed credential verification
    ///
    /// # Errors
    /// * `WriteFailed` - Session store could not be written
    async fn authenticate(&self, handle: &str) -> Result<(), SessionError>;
}

#[async_trait]
impl SessionContext for Session {
    async fn authenticated_handle(&self) -> Result<Option<String>, SessionError> {
        self.get::<String>(SESSION_HANDLE_KEY)
            .await
            .map_err(|e| SessionError::ReadFailed(e.to_string()))
    }

    async fn authenticate(&self, handle: &str) -> Result<(), SessionError> {
        self.insert(SESSION_HANDLE_KEY, handle)
            .await
            .map_err(|e| SessionError::WriteFailed(e.to_string()))
    }
}
