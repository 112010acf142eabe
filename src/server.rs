//! HTTP glue: routes form submissions and language changes to the domain code.

use crate::config::Config;
use crate::i18n::{translate, Language, LanguageRegistry, MessageKey};
use crate::registration::{FormValidator, RegistrationForm};
use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Cookie holding the visitor's language code.
pub const LANG_COOKIE: &str = "lang";

/// Shared state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub validator: FormValidator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            validator: FormValidator::new(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/lang", get(set_language))
        .route("/corporate/register", post(register))
        .route("/corporate/login", post(login))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Deserialize)]
struct LanguageQuery {
    lang: Option<String>,
    redirect: Option<String>,
}

async fn set_language(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let language = match query.lang.as_deref().map(Language::from_code) {
        Some(Ok(language)) => language,
        Some(Err(e)) => {
            warn!("Rejected language change: {}", e);
            return (StatusCode::BAD_REQUEST, language_menu()).into_response();
        }
        None => return (StatusCode::BAD_REQUEST, language_menu()).into_response(),
    };

    let mut cookie = format!("{}={}; Path=/; SameSite=Lax", LANG_COOKIE, language.code());
    if state.config.secure_cookies {
        cookie.push_str("; Secure");
    }

    let target = redirect_target(query.redirect.as_deref());
    info!("Language set to {} (redirecting to {})", language.code(), target);

    ([(header::SET_COOKIE, cookie)], Redirect::to(target)).into_response()
}

/// One `code - native name (English name)` line per selectable language.
fn language_menu() -> String {
    LanguageRegistry::get()
        .list_enabled()
        .iter()
        .map(|lang| {
            if lang.name == lang.native_name {
                format!("{} - {}", lang.code, lang.native_name)
            } else {
                format!("{} - {} ({})", lang.code, lang.native_name, lang.name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Where to send the visitor after a language change.
///
/// Only local absolute paths are honoured; anything else, and the language
/// endpoint itself, goes to `/`.
fn redirect_target(redirect: Option<&str>) -> &str {
    match redirect {
        Some(path) if path != "/lang" && is_local_path(path) => path,
        _ => "/",
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && path.bytes().all(|b| b.is_ascii_graphic())
}

/// Read a cookie from the request headers.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}

async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> (StatusCode, &'static str) {
    let language = Language::resolve(cookie_value(&headers, LANG_COOKIE));

    // An unreadable body counts as an empty form and fails the required-field check
    let form = match body {
        Ok(Form(pairs)) => RegistrationForm::from_pairs(pairs),
        Err(rejection) => {
            debug!("Unreadable registration body: {}", rejection);
            RegistrationForm::default()
        }
    };

    match state.validator.validate_in(language, &form) {
        Ok(_registration) => {
            info!("Registration form accepted ({})", language.code());
            (
                StatusCode::OK,
                translate(language, MessageKey::RegistrationAccepted),
            )
        }
        Err(failure) => {
            warn!("Registration form rejected: {}", failure.key);
            (StatusCode::BAD_REQUEST, failure.message)
        }
    }
}

async fn login(headers: HeaderMap) -> (StatusCode, &'static str) {
    let language = Language::resolve(cookie_value(&headers, LANG_COOKIE));
    (StatusCode::OK, translate(language, MessageKey::LoginPending))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
