pub mod context;
pub mod detached;
pub mod errors;

pub use context::SessionContext;
pub use detached::DetachedSession;
pub use errors::SessionError;
