use auth::ProtectedAccess;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use tower_sessions::Session;

use super::HtmlPage;
use super::PageError;
use crate::inbound::http::router::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, PageError> {
    match state.guard.authenticated_only(&session).await? {
        ProtectedAccess::Authenticated(handle) => {
            let body = state.views.dashboard(&handle)?;
            Ok(HtmlPage::ok(body).into_response())
        }
        ProtectedAccess::Redirect(path) => Ok(Redirect::to(path).into_response()),
    }
}
