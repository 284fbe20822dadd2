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
use crate::inbound::http::router::DASHBOARD_PATH;
use crate::inbound::http::views::FormView;

pub async fn login_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, PageError> {
    if let auth::Access::Redirect(path) = state.guard.anonymous_only(&session).await? {
        return Ok(Redirect::to(path).into_response());
    }

    let body = state.views.login(&FormView::empty())?;
    Ok(HtmlPage::ok(body).into_response())
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, PageError> {
    let credentials = match form.try_into_credentials() {
        Ok(credentials) => credentials,
        Err(e) => return FormPage::Login.reject(&state.views, e),
    };

    match state.user_service.login(credentials, &session).await {
        Ok(_) => Ok(Redirect::to(DASHBOARD_PATH).into_response()),
        Err(e) => FormPage::Login.reject(&state.views, e),
    }
}
