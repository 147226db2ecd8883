//! HTTP delivery of an export.
//!
//! Object URLs are keys into the process-wide `BlobRegistry`. A request gets
//! its own `HttpExportHost`, which records what the trigger asked for and is
//! then turned into the response: the PDF as an attachment, a redirect to the
//! print-mode page on fallback, or `409 Conflict` when the request was
//! ignored.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use axum::{
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{ExportError, ExportHost, ExportOutcome, ObjectUrl};
use crate::render::PdfBlob;

/// Where the browser is sent when the export falls back to printing.
pub const PRINT_FALLBACK_PATH: &str = "/resume?print=1";

const OBJECT_URL_PREFIX: &str = "blob:site/";

/// Generated blobs that currently have a live object URL.
#[derive(Debug, Default)]
pub struct BlobRegistry {
    blobs: Mutex<HashMap<Uuid, Bytes>>,
}

impl BlobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, bytes: Bytes) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().insert(id, bytes);
        id
    }

    fn get(&self, id: &Uuid) -> Option<Bytes> {
        self.lock().get(id).cloned()
    }

    fn remove(&self, id: &Uuid) -> bool {
        self.lock().remove(id).is_some()
    }

    /// Number of object URLs not yet revoked.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Bytes>> {
        self.blobs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parse_object_url(url: &ObjectUrl) -> Option<Uuid> {
    url.as_str()
        .strip_prefix(OBJECT_URL_PREFIX)
        .and_then(|id| Uuid::parse_str(id).ok())
}

struct Delivery {
    file_name: String,
    bytes: Bytes,
}

pub struct HttpExportHost<'a> {
    registry: &'a BlobRegistry,
    delivery: Mutex<Option<Delivery>>,
    print_requested: AtomicBool,
}

impl<'a> HttpExportHost<'a> {
    pub fn new(registry: &'a BlobRegistry) -> Self {
        Self {
            registry,
            delivery: Mutex::new(None),
            print_requested: AtomicBool::new(false),
        }
    }

    /// Maps the trigger's outcome onto the HTTP response.
    pub fn respond(self, outcome: ExportOutcome) -> Response {
        let delivery = self
            .delivery
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        match (outcome, delivery) {
            (ExportOutcome::Downloaded { .. }, Some(delivery)) => (
                [
                    (header::CONTENT_TYPE, PdfBlob::MIME.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", delivery.file_name),
                    ),
                ],
                delivery.bytes,
            )
                .into_response(),
            (ExportOutcome::Ignored, _) => AppError::ExportInProgress.into_response(),
            _ => {
                debug!(
                    print_requested = self.print_requested.load(Ordering::SeqCst),
                    "Redirecting to print-mode page"
                );
                Redirect::to(PRINT_FALLBACK_PATH).into_response()
            }
        }
    }
}

impl ExportHost for HttpExportHost<'_> {
    fn create_object_url(&self, blob: PdfBlob) -> ObjectUrl {
        let id = self.registry.insert(blob.into_bytes());
        ObjectUrl::new(format!("{OBJECT_URL_PREFIX}{id}"))
    }

    fn revoke_object_url(&self, url: &ObjectUrl) {
        if let Some(id) = parse_object_url(url) {
            self.registry.remove(&id);
        }
        debug!(outstanding = self.registry.len(), "Object URL revoked");
    }

    fn download(&self, url: &ObjectUrl, file_name: &str) -> Result<(), ExportError> {
        let bytes = parse_object_url(url)
            .and_then(|id| self.registry.get(&id))
            .ok_or_else(|| ExportError::Download(format!("unknown object URL {}", url.as_str())))?;
        *self.delivery.lock().unwrap_or_else(PoisonError::into_inner) = Some(Delivery {
            file_name: file_name.to_string(),
            bytes,
        });
        Ok(())
    }

    fn print(&self) {
        self.print_requested.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::a4_page_config;
    use crate::models::seed::default_profile;
    use crate::render::{pdf::PdfEngine, print};
    use axum::http::StatusCode;

    fn blob() -> PdfBlob {
        PdfEngine::load(a4_page_config())
            .unwrap()
            .serialize(&print::render(&default_profile().unwrap()))
            .unwrap()
    }

    #[test]
    fn test_object_url_lifecycle() {
        let registry = BlobRegistry::new();
        let host = HttpExportHost::new(&registry);
        let url = host.create_object_url(blob());
        assert!(url.as_str().starts_with(OBJECT_URL_PREFIX));
        assert_eq!(registry.len(), 1);

        host.download(&url, "a.pdf").unwrap();
        host.revoke_object_url(&url);
        assert!(registry.is_empty());

        let response = host.respond(ExportOutcome::Downloaded {
            file_name: "a.pdf",
            size_bytes: 0,
        });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"a.pdf\""
        );
    }

    #[test]
    fn test_download_of_revoked_url_fails() {
        let registry = BlobRegistry::new();
        let host = HttpExportHost::new(&registry);
        let err = host
            .download(&ObjectUrl::new("blob:site/not-a-uuid"), "a.pdf")
            .unwrap_err();
        assert!(matches!(err, ExportError::Download(_)));
    }

    #[test]
    fn test_fallback_redirects_to_print_page() {
        let registry = BlobRegistry::new();
        let host = HttpExportHost::new(&registry);
        host.print();
        let response = host.respond(ExportOutcome::PrintFallback {
            reason: "boom".to_string(),
        });
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], PRINT_FALLBACK_PATH);
    }

    #[test]
    fn test_ignored_is_conflict() {
        let registry = BlobRegistry::new();
        let response = HttpExportHost::new(&registry).respond(ExportOutcome::Ignored);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
