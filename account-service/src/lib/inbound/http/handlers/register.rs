use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum::Form;
use tower_sessions::Session;

use super::CredentialsForm;
use super::FormPage;
use super::HtmlPage;
use super::PageError;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::inbound::http::router::LOGIN_PATH;
use crate::inbound::http::views::FormView;

pub async fn register_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, PageError> {
    if let auth::Access::Redirect(path) = state.guard.anonymous_only(&session).await? {
        return Ok(Redirect::to(path).into_response());
    }

    let body = state.views.register(&FormView::empty())?;
    Ok(HtmlPage::ok(body).into_response())
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, PageError> {
    let credentials = match form.try_into_credentials() {
        Ok(credentials) => credentials,
        Err(e) => return FormPage::Register.reject(&state.views, e),
    };

    match state.user_service.register(credentials).await {
        Ok(_) => Ok(Redirect::to(LOGIN_PATH).into_response()),
        Err(e) => FormPage::Register.reject(&state.views, e),
    }
}
