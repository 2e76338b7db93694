//! HTTP Handlers

use axum::extract::{Form, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::application::{CheckAccessUseCase, SubmitPasswordUseCase};
use crate::domain::repository::SessionStore;
use crate::domain::value_object::SessionId;
use crate::error::GateError;
use crate::presentation::dto::LoginRequest;
use crate::presentation::pages;

/// Shared state for gate handlers
#[derive(Clone)]
pub struct GateAppState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<GateConfig>,
}

// ============================================================================
// View Page
// ============================================================================

/// GET /
///
/// One sequential pass: ensure a session id, evaluate the auth invariant,
/// then render exactly one of the configuration-error page, the viewer,
/// or the login form.
pub async fn view_page<S>(
    State(state): State<GateAppState<S>>,
    headers: HeaderMap,
) -> Response
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let (session_id, session_cookie) = ensure_session(&headers, &state.config);

    let presented_digest =
        platform::cookie::extract_cookie(&headers, &state.config.auth_cookie_name);

    let use_case = CheckAccessUseCase::new(state.store.clone(), state.config.clone());

    let authenticated = match use_case
        .execute(presented_digest.as_deref(), &session_id)
        .await
    {
        Ok(authenticated) => authenticated,
        Err(err) => return error_response(&state.config, err, session_cookie),
    };

    let title = &state.config.page_title;

    let body = if authenticated {
        match state.config.target_url.as_deref() {
            Some(target_url) => pages::viewer_page(title, target_url),
            None => {
                return error_response(&state.config, GateError::MissingTargetUrl, session_cookie);
            }
        }
    } else {
        pages::login_page(title, None)
    };

    html_response(StatusCode::OK, session_cookie.into_iter().collect(), body)
}

// ============================================================================
// Login Submit
// ============================================================================

/// POST /login
///
/// On success: Set-Cookie for the auth token (expiry = now + 1 day) and a
/// success page that reloads `/`. On a wrong password: the form again with
/// an inline error and no cookie write.
pub async fn submit_login<S>(
    State(state): State<GateAppState<S>>,
    headers: HeaderMap,
    Form(req): Form<LoginRequest>,
) -> Response
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let (session_id, session_cookie) = ensure_session(&headers, &state.config);

    let use_case = SubmitPasswordUseCase::new(state.store.clone(), state.config.clone());

    match use_case.execute(&req.password, &session_id).await {
        Ok(unlock) => {
            let auth_cookie = state
                .config
                .auth_cookie()
                .build_set_cookie_expiring(&unlock.cookie_value, unlock.expires_at);

            let mut cookies = vec![auth_cookie];
            cookies.extend(session_cookie);

            html_response(
                StatusCode::OK,
                cookies,
                pages::success_page(&state.config.page_title),
            )
        }
        Err(GateError::IncorrectPassword) => html_response(
            StatusCode::UNAUTHORIZED,
            session_cookie.into_iter().collect(),
            pages::login_page(&state.config.page_title, Some("Incorrect password.")),
        ),
        Err(err) => error_response(&state.config, err, session_cookie),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolve the session id from the session cookie, minting a new id (and
/// the Set-Cookie required to install it) when absent or unparseable.
fn ensure_session(headers: &HeaderMap, config: &GateConfig) -> (SessionId, Option<String>) {
    let existing = platform::cookie::extract_cookie(headers, &config.session_cookie_name)
        .and_then(|value| SessionId::parse(&value));

    match existing {
        Some(session_id) => (session_id, None),
        None => {
            let session_id = SessionId::new();
            let cookie = config
                .session_cookie()
                .build_set_cookie(&session_id.to_string());
            (session_id, Some(cookie))
        }
    }
}

/// Render a `GateError`: configuration errors become the HTML error page
/// that halts rendering; anything else falls through to the JSON error
/// surface.
fn error_response(config: &GateConfig, err: GateError, session_cookie: Option<String>) -> Response {
    match err {
        GateError::MissingPassword => {
            tracing::error!("Viewer password is not configured");
            html_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                session_cookie.into_iter().collect(),
                pages::config_error_page(&config.page_title, "VIEWER_PASSWORD"),
            )
        }
        GateError::MissingTargetUrl => {
            tracing::error!("Authenticated visit with no target URL configured");
            html_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                session_cookie.into_iter().collect(),
                pages::config_error_page(&config.page_title, "TARGET_SHEET_URL"),
            )
        }
        other => other.into_response(),
    }
}

/// Build an HTML response carrying any number of Set-Cookie headers
fn html_response(status: StatusCode, set_cookies: Vec<String>, body: String) -> Response {
    let mut headers = HeaderMap::new();
    for cookie in set_cookies {
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            headers.append(header::SET_COOKIE, value);
        }
    }
    (status, headers, Html(body)).into_response()
}
