//! Session-backed access control library
//!
//! Provides the request-scoped pieces shared by the account service:
//! - A session context abstraction over server-held session state
//! - An adapter for `tower_sessions::Session`
//! - A store-less session for tests and offline use
//! - The session guard deciding who may see which view
//!
//! The service owns credential checks; this crate only records and reads
//! which handle, if any, a session is authenticated as.
//!
//! # Examples
//!
//! ## Gating a protected view
//! ```
//! use auth::{DetachedSession, ProtectedAccess, SessionContext, SessionGuard};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let guard = SessionGuard::default();
//! let session = DetachedSession::anonymous();
//!
//! // Anonymous sessions are sent to the login view
//! let access = guard.authenticated_only(&session).await.unwrap();
//! assert_eq!(access, ProtectedAccess::Redirect("/login"));
//!
//! // After a successful login the dashboard is reachable
//! session.authenticate("alice").await.unwrap();
//! let access = guard.authenticated_only(&session).await.unwrap();
//! assert_eq!(access, ProtectedAccess::Authenticated("alice".to_string()));
//! # }
//! ```
//!
//! ## Keeping authenticated sessions off the forms
//! ```
//! use auth::{Access, DetachedSession, SessionGuard};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let guard = SessionGuard::default();
//! let session = DetachedSession::authenticated("alice");
//!
//! let access = guard.anonymous_only(&session).await.unwrap();
//! assert_eq!(access, Access::Redirect("/dashboard"));
//! # }
//! ```

pub mod guard;
pub mod session;

// Re-export commonly used items
pub use guard::Access;
pub use guard::ProtectedAccess;
pub use guard::SessionGuard;
pub use session::DetachedSession;
pub use session::SessionContext;
pub use session::SessionError;
