pub mod handlers;
pub mod router;
pub mod sanitize;
pub mod views;
