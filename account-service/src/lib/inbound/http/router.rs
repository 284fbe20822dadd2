use std::sync::Arc;
use std::time::Duration;

use auth::SessionGuard;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::Expiry;
use tower_sessions::MemoryStore;
use tower_sessions::SessionManagerLayer;
use tracing::Span;

use super::handlers::dashboard::dashboard;
use super::handlers::login::login;
use super::handlers::login::login_form;
use super::handlers::register::register;
use super::handlers::register::register_form;
use super::views::Views;
use crate::config::SessionConfig;
use crate::domain::user::ports::UserServicePort;

pub const REGISTER_PATH: &str = "/register";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub views: Arc<Views>,
    pub guard: SessionGuard,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    views: Arc<Views>,
    session_config: &SessionConfig,
) -> Router {
    let state = AppState {
        user_service,
        views,
        guard: SessionGuard::new(LOGIN_PATH, DASHBOARD_PATH),
    };

    // Sessions are server-side; the cookie only carries the id
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(session_config.cookie_name.clone())
        .with_secure(session_config.secure_cookie)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(i64::from(
            session_config.idle_timeout_seconds,
        ))));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route(REGISTER_PATH, get(register_form).post(register))
        .route(LOGIN_PATH, get(login_form).post(login))
        .route(DASHBOARD_PATH, get(dashboard))
        .layer(ServiceBuilder::new().layer(trace_layer).layer(session_layer))
        .with_state(state)
}
