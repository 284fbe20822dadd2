use crate::session::SessionContext;
use crate::session::SessionError;

/// Outcome of a guard check on a route open to anonymous callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Anonymous session, render the route
    Anonymous,

    /// Request must be redirected to the given path
    Redirect(&'static str),
}

/// Outcome of a guard check on a protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtectedAccess {
    /// Authenticated session bound to this handle
    Authenticated(String),

    /// Request must be redirected to the given path
    Redirect(&'static str),
}

/// Routing-level access policy over session state.
///
/// Only reads the session; the single legitimate write (login) belongs to
/// the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionGuard {
    login_path: &'static str,
    protected_path: &'static str,
}

impl SessionGuard {
    /// Create a guard with explicit redirect targets.
    ///
    /// # Arguments
    /// * `login_path` - Where anonymous callers of protected views are sent
    /// * `protected_path` - Where authenticated callers of the forms are sent
    pub const fn new(login_path: &'static str, protected_path: &'static str) -> Self {
        Self {
            login_path,
            protected_path,
        }
    }

    /// Policy for the register and login forms.
    ///
    /// # Returns
    /// * `Access::Anonymous` - Render the form
    /// * `Access::Redirect(protected_path)` - Session is already authenticated
    ///
    /// # Errors
    /// * `ReadFailed` - Session store could not be read
    pub async fn anonymous_only(
        &self,
        session: &dyn SessionContext,
    ) -> Result<Access, SessionError> {
        match session.authenticated_handle().await? {
            Some(handle) => {
                tracing::debug!(handle = %handle, "Authenticated session sent to protected view");
                Ok(Access::Redirect(self.protected_path))
            }
            None => Ok(Access::Anonymous),
        }
    }

    /// Policy for the protected view.
    ///
    /// # Returns
    /// * `ProtectedAccess::Authenticated(handle)` - Render with the bound identity
    /// * `ProtectedAccess::Redirect(login_path)` - Session is anonymous
    ///
    /// # Errors
    /// * `ReadFailed` - Session store could not be read
    pub async fn authenticated_only(
        &self,
        session: &dyn SessionContext,
    ) -> Result<ProtectedAccess, SessionError> {
        match session.authenticated_handle().await? {
            Some(handle) => Ok(ProtectedAccess::Authenticated(handle)),
            None => {
                tracing::debug!("Anonymous session sent to login view");
                Ok(ProtectedAccess::Redirect(self.login_path))
            }
        }
    }
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new("/login", "/dashboard")
    }
}
