use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::export::{BlobRegistry, ExportTrigger, LazyPdfSerializer};
use crate::models::{seed, ResumeProfile};
use crate::render::ScreenRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup, read-only afterwards.
    pub profile: Arc<ResumeProfile>,
    pub screen: Arc<ScreenRenderer>,
    /// Process-wide, so only one export generates at a time.
    pub exporter: Arc<ExportTrigger>,
    /// Live object URLs of in-flight HTTP exports.
    pub blobs: Arc<BlobRegistry>,
}

impl AppState {
    pub fn new(config: Config, profile: ResumeProfile) -> Result<Self> {
        let screen = ScreenRenderer::new().context("Failed to compile the resume template")?;
        let exporter = ExportTrigger::new(Arc::new(LazyPdfSerializer), config.export_timeout);
        Ok(AppState {
            config,
            profile: Arc::new(profile),
            screen: Arc::new(screen),
            exporter: Arc::new(exporter),
            blobs: Arc::new(BlobRegistry::new()),
        })
    }
}

/// Loads the profile named by `RESUME_PATH`, or the built-in one.
pub fn load_profile(config: &Config) -> Result<ResumeProfile> {
    match &config.resume_path {
        Some(path) => {
            let profile = ResumeProfile::from_json_file(path)
                .with_context(|| format!("Failed to load resume profile from {}", path.display()))?;
            info!("Loaded resume profile from {}", path.display());
            Ok(profile)
        }
        None => seed::default_profile().context("Built-in resume profile is invalid"),
    }
}
