pub mod health;
pub mod resume;

use axum::{response::Redirect, routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(|| async { Redirect::to("/resume") }))
        // Screen view and export
        .route("/resume", get(resume::handle_resume_page))
        .route("/resume/download", get(resume::handle_download))
        // Data API
        .route("/api/v1/resume", get(resume::handle_get_profile))
        .fallback(resume::handle_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::seed::default_profile;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(Config::default(), default_profile().unwrap()).unwrap()
    }

    async fn get_path(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get_path(build_router(state()), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "site");
    }

    #[tokio::test]
    async fn test_root_redirects_to_resume() {
        let response = get_path(build_router(state()), "/").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/resume");
    }

    #[tokio::test]
    async fn test_resume_page_lists_all_projects() {
        let response = get_path(build_router(state()), "/resume").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("SweetHearty"));
        assert!(html.contains("data-theme=\"dark\""));
    }

    #[tokio::test]
    async fn test_theme_query_sets_cookie() {
        let response = get_path(build_router(state()), "/resume?theme=light").await;
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
        assert!(cookie.starts_with("theme=light"));
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("data-theme=\"light\""));
    }

    #[tokio::test]
    async fn test_theme_cookie_is_honoured() {
        let request = Request::builder()
            .uri("/resume")
            .header(header::COOKIE, "theme=light")
            .body(Body::empty())
            .unwrap();
        let response = build_router(state()).oneshot(request).await.unwrap();
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("data-theme=\"light\""));
    }

    #[tokio::test]
    async fn test_bad_print_flag_is_rejected() {
        let response = get_path(build_router(state()), "/resume?print=maybe").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_download_returns_pdf_attachment() {
        let state = state();
        let blobs = state.blobs.clone();
        let response = get_path(build_router(state), "/resume/download").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Dinesh_Dawonauth_Resume.pdf\""
        );
        let bytes = body_bytes(response).await;
        assert!(bytes.starts_with(b"%PDF"));
        assert!(blobs.is_empty());
    }

    #[tokio::test]
    async fn test_download_while_generating_conflicts() {
        let state = state();
        let _busy = state.exporter.try_begin().unwrap();
        let response = get_path(build_router(state.clone()), "/resume/download").await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["error"]["code"], "EXPORT_IN_PROGRESS");
    }

    #[tokio::test]
    async fn test_profile_json() {
        let response = get_path(build_router(state()), "/api/v1/resume").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["name"], "Dinesh Dawonauth");
        assert_eq!(json["projects"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let response = get_path(build_router(state()), "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
