use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::HttpExportHost;
use crate::models::ResumeProfile;
use crate::render::ScreenContext;
use crate::state::AppState;
use crate::theme::{MotionPreference, Theme};

#[derive(Debug, Default, Deserialize)]
pub struct ResumeQuery {
    pub theme: Option<String>,
    pub motion: Option<String>,
    pub print: Option<String>,
}

fn parse_flag(name: &str, raw: Option<&str>) -> Result<bool, AppError> {
    match raw.map(str::trim) {
        None | Some("") | Some("0") | Some("false") => Ok(false),
        Some("1") | Some("true") => Ok(true),
        Some(other) => Err(AppError::Validation(format!(
            "'{name}' must be 1 or 0, got '{other}'"
        ))),
    }
}

/// GET /resume
pub async fn handle_resume_page(
    State(state): State<AppState>,
    Query(query): Query<ResumeQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let ctx = ScreenContext {
        theme: Theme::resolve(query.theme.as_deref(), &headers),
        motion: MotionPreference::resolve(query.motion.as_deref(), &headers),
        auto_print: parse_flag("print", query.print.as_deref())?,
        share_url: state.config.share_url.clone(),
    };
    let html = state.screen.render(&state.profile, &ctx)?;

    // Persist an explicit theme choice.
    let explicit = query.theme.as_deref().and_then(Theme::parse);
    Ok(match explicit {
        Some(theme) => ([(header::SET_COOKIE, theme.cookie())], Html(html)).into_response(),
        None => Html(html).into_response(),
    })
}

/// GET /resume/download
pub async fn handle_download(State(state): State<AppState>) -> Response {
    let host = HttpExportHost::new(&state.blobs);
    let outcome = state.exporter.export(&state.profile, &host).await;
    host.respond(outcome)
}

/// GET /api/v1/resume
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ResumeProfile> {
    Json(state.profile.as_ref().clone())
}

/// Fallback for unknown paths.
pub async fn handle_not_found() -> AppError {
    AppError::NotFound("No such page".to_string())
}
