use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Deserialize;

use super::sanitize::sanitize;
use super::views::FormView;
use super::views::ViewError;
use super::views::Views;
use crate::domain::user::models::Credentials;
use crate::user::errors::UserError;

pub mod dashboard;
pub mod login;
pub mod register;

/// Rendered HTML page with an explicit status code
#[derive(Debug, Clone)]
pub struct HtmlPage(StatusCode, Html<String>);

impl HtmlPage {
    pub fn new(status: StatusCode, body: String) -> Self {
        HtmlPage(status, Html(body))
    }

    pub fn ok(body: String) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

impl IntoResponse for HtmlPage {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failure that cannot be shown on a form.
///
/// Details are logged; the client only ever sees a generic 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    InternalServerError(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

impl From<ViewError> for PageError {
    fn from(err: ViewError) -> Self {
        PageError::InternalServerError(err.to_string())
    }
}

impl From<auth::SessionError> for PageError {
    fn from(err: auth::SessionError) -> Self {
        PageError::InternalServerError(err.to_string())
    }
}

/// Form page a rejected submission is rendered back onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPage {
    Register,
    Login,
}

impl FormPage {
    pub fn render(self, views: &Views, form: &FormView) -> Result<String, ViewError> {
        match self {
            FormPage::Register => views.register(form),
            FormPage::Login => views.login(form),
        }
    }

    /// Re-render the form for a recoverable error, or fail the request.
    pub fn reject(self, views: &Views, err: UserError) -> Result<Response, PageError> {
        let (status, form) = match err {
            UserError::Validation(ref errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, FormView::from(errors))
            }
            UserError::DuplicateHandle(_) => (
                StatusCode::CONFLICT,
                FormView::with_error("Username already exists"),
            ),
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                FormView::with_error("Invalid username or password"),
            ),
            UserError::StoreFault(detail) => {
                return Err(PageError::InternalServerError(detail));
            }
        };

        let body = self.render(views, &form)?;
        Ok(HtmlPage::new(status, body).into_response())
    }
}

/// Urlencoded body shared by the register and login forms
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl CredentialsForm {
    /// Sanitize both fields and validate them into credentials.
    pub fn try_into_credentials(self) -> Result<Credentials, UserError> {
        Ok(Credentials::parse(
            sanitize(&self.username),
            sanitize(&self.password),
        )?)
    }
}
