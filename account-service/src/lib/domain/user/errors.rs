use thiserror::Error;

/// Validation failure for a single submitted field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{} must not be empty", field),
        }
    }
}

/// Every field-level failure found in one submission
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Top-level error for all account operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    // Input errors
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    // Domain-level errors
    #[error("Username already exists: {0}")]
    DuplicateHandle(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Store fault: {0}")]
    StoreFault(String),
}

impl From<auth::SessionError> for UserError {
    fn from(err: auth::SessionError) -> Self {
        UserError::StoreFault(err.to_string())
    }
}
