use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::context::SessionContext;
use super::errors::SessionError;

/// Session held directly by its owner instead of a session store.
///
/// Never expires. Counts writes so callers can check that a flow left the
/// session untouched.
#[derive(Debug, Default)]
pub struct DetachedSession {
    handle: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl DetachedSession {
    /// Create a session that is not authenticated.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create a session already authenticated as `handle`.
    pub fn authenticated(handle: impl Into<String>) -> Self {
        Self {
            handle: Mutex::new(Some(handle.into())),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of successful `authenticate` calls on this session.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionContext for DetachedSession {
    async fn authenticated_handle(&self) -> Result<Option<String>, SessionError> {
        Ok(self.handle.lock().await.clone())
    }

    async fn authenticate(&self, handle: &str) -> Result<(), SessionError> {
        *self.handle.lock().await = Some(handle.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
