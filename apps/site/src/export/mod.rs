//! Export Trigger: turns the print document into a downloadable PDF.
//!
//! # States
//! `Idle → Generating → Idle`. Only the `Generating` guard returned by
//! `try_begin` moves the state out of `Idle`, and only its `Drop` moves it
//! back, so a request arriving mid-export sees `Generating` and is ignored.
//!
//! # Flow
//! 1. Render the print document and serialize it with the PDF engine
//!    (bounded by the configured timeout).
//! 2. Register the bytes with the host as a transient object URL and trigger
//!    a download under `EXPORT_FILE_NAME`.
//! 3. Revoke the object URL. `ObjectUrlGuard` does this on drop, so it
//!    happens whether the download succeeded or not.
//!
//! Any failure along the way invokes `ExportHost::print` exactly once and
//! nothing else; there are no retries.
//!
//! Serialization runs on its own task. When it outlives the timeout the
//! fallback is delivered at once, but the trigger holds `Generating` until
//! the task finishes, so two serializations never overlap.

pub mod file;
pub mod http;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::resume::ResumeProfile;
use crate::render::{self, print, PdfBlob, PrintDocument, RenderError};

pub use file::FileExportHost;
pub use http::{BlobRegistry, HttpExportHost};

/// Fixed download name of the exported résumé.
pub const EXPORT_FILE_NAME: &str = "Dinesh_Dawonauth_Resume.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("PDF generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Serialization task failed: {0}")]
    Join(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Seams
// ────────────────────────────────────────────────────────────────────────────

/// Turns a print document into PDF bytes.
#[async_trait]
pub trait PdfSerializer: Send + Sync {
    async fn serialize(&self, doc: PrintDocument) -> Result<PdfBlob, ExportError>;
}

/// Production serializer: loads the engine on first use, then runs the
/// CPU-bound serialization on the blocking pool.
pub struct LazyPdfSerializer;

#[async_trait]
impl PdfSerializer for LazyPdfSerializer {
    async fn serialize(&self, doc: PrintDocument) -> Result<PdfBlob, ExportError> {
        let engine = render::engine().await?;
        let blob = tokio::task::spawn_blocking(move || engine.serialize(&doc))
            .await
            .map_err(|e| ExportError::Join(e.to_string()))??;
        Ok(blob)
    }
}

/// Transient handle to a generated blob, valid until revoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Where an export is delivered.
pub trait ExportHost: Send + Sync {
    fn create_object_url(&self, blob: PdfBlob) -> ObjectUrl;
    fn revoke_object_url(&self, url: &ObjectUrl);
    fn download(&self, url: &ObjectUrl, file_name: &str) -> Result<(), ExportError>;
    /// The host's native print. Used only as the failure fallback.
    fn print(&self);
}

/// Revokes its object URL when dropped.
struct ObjectUrlGuard<'a> {
    host: &'a dyn ExportHost,
    url: ObjectUrl,
}

impl<'a> ObjectUrlGuard<'a> {
    fn create(host: &'a dyn ExportHost, blob: PdfBlob) -> Self {
        let url = host.create_object_url(blob);
        Self { host, url }
    }
}

impl Drop for ObjectUrlGuard<'_> {
    fn drop(&mut self) {
        self.host.revoke_object_url(&self.url);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trigger
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExportState {
    Idle,
    Generating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExportOutcome {
    Downloaded {
        file_name: &'static str,
        size_bytes: usize,
    },
    PrintFallback {
        reason: String,
    },
    /// Another export was already generating.
    Ignored,
}

/// Proof that this caller owns the `Generating` state.
pub struct Generating {
    state: Arc<Mutex<ExportState>>,
}

impl Drop for Generating {
    fn drop(&mut self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = ExportState::Idle;
    }
}

pub struct ExportTrigger {
    state: Arc<Mutex<ExportState>>,
    serializer: Arc<dyn PdfSerializer>,
    timeout: Duration,
}

impl ExportTrigger {
    pub fn new(serializer: Arc<dyn PdfSerializer>, timeout: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ExportState::Idle)),
            serializer,
            timeout,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ExportState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves `Idle → Generating`, or returns `None` if already generating.
    pub fn try_begin(&self) -> Option<Generating> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            ExportState::Generating => None,
            ExportState::Idle => {
                *state = ExportState::Generating;
                Some(Generating {
                    state: Arc::clone(&self.state),
                })
            }
        }
    }

    pub async fn export(&self, profile: &ResumeProfile, host: &dyn ExportHost) -> ExportOutcome {
        let Some(generating) = self.try_begin() else {
            info!("Export already in progress; request ignored");
            return ExportOutcome::Ignored;
        };
        let mut generating = Some(generating);

        match self.generate_and_deliver(profile, host, &mut generating).await {
            Ok(size_bytes) => {
                info!(size_bytes, "Resume exported as {EXPORT_FILE_NAME}");
                ExportOutcome::Downloaded {
                    file_name: EXPORT_FILE_NAME,
                    size_bytes,
                }
            }
            Err(e) => {
                warn!(error = %e, "PDF export failed; falling back to print");
                host.print();
                ExportOutcome::PrintFallback {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn generate_and_deliver(
        &self,
        profile: &ResumeProfile,
        host: &dyn ExportHost,
        generating: &mut Option<Generating>,
    ) -> Result<usize, ExportError> {
        let doc = print::render(profile);
        let serializer = Arc::clone(&self.serializer);
        let mut task = tokio::spawn(async move { serializer.serialize(doc).await });

        let blob = match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(joined) => joined.map_err(|e| ExportError::Join(e.to_string()))??,
            Err(_) => {
                // Blocking serialization cannot be cancelled; the trigger stays
                // Generating until it settles.
                if let Some(guard) = generating.take() {
                    tokio::spawn(async move {
                        let _ = task.await;
                        debug!("Timed-out serialization settled");
                        drop(guard);
                    });
                }
                return Err(ExportError::Timeout(self.timeout));
            }
        };

        let size = blob.len();
        debug!(size, "PDF serialized");

        let url = ObjectUrlGuard::create(host, blob);
        host.download(&url.url, EXPORT_FILE_NAME)?;
        Ok(size)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::default_profile;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Created(ObjectUrl),
        Downloaded(String),
        Revoked(ObjectUrl),
        Printed,
    }

    #[derive(Default)]
    struct RecordingHost {
        events: Mutex<Vec<Event>>,
        staged: Mutex<HashMap<ObjectUrl, PdfBlob>>,
        delivered: Mutex<Vec<Vec<u8>>>,
        next_id: AtomicUsize,
        fail_download: bool,
    }

    impl RecordingHost {
        fn failing_download() -> Self {
            Self {
                fail_download: true,
                ..Default::default()
            }
        }

        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
            self.events().iter().filter(|e| pred(e)).count()
        }
    }

    impl ExportHost for RecordingHost {
        fn create_object_url(&self, blob: PdfBlob) -> ObjectUrl {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let url = ObjectUrl::new(format!("blob:test/{id}"));
            self.staged.lock().unwrap().insert(url.clone(), blob);
            self.events.lock().unwrap().push(Event::Created(url.clone()));
            url
        }

        fn revoke_object_url(&self, url: &ObjectUrl) {
            self.staged.lock().unwrap().remove(url);
            self.events.lock().unwrap().push(Event::Revoked(url.clone()));
        }

        fn download(&self, url: &ObjectUrl, file_name: &str) -> Result<(), ExportError> {
            if self.fail_download {
                return Err(ExportError::Download("disk full".to_string()));
            }
            let bytes = self.staged.lock().unwrap()[url].as_bytes().to_vec();
            self.delivered.lock().unwrap().push(bytes);
            self.events
                .lock()
                .unwrap()
                .push(Event::Downloaded(file_name.to_string()));
            Ok(())
        }

        fn print(&self) {
            self.events.lock().unwrap().push(Event::Printed);
        }
    }

    struct FailingSerializer;

    #[async_trait]
    impl PdfSerializer for FailingSerializer {
        async fn serialize(&self, _doc: PrintDocument) -> Result<PdfBlob, ExportError> {
            Err(RenderError::EngineLoad("font tables unavailable".to_string()).into())
        }
    }

    /// Takes a minute, then fails.
    struct SlowSerializer {
        finished: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PdfSerializer for SlowSerializer {
        async fn serialize(&self, _doc: PrintDocument) -> Result<PdfBlob, ExportError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            self.finished.fetch_add(1, Ordering::SeqCst);
            Err(RenderError::Write("too slow".to_string()).into())
        }
    }

    /// Signals `started`, then waits for `gate` before serializing for real.
    struct GatedSerializer {
        started: Arc<Notify>,
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl PdfSerializer for GatedSerializer {
        async fn serialize(&self, doc: PrintDocument) -> Result<PdfBlob, ExportError> {
            self.started.notify_one();
            self.gate.notified().await;
            LazyPdfSerializer.serialize(doc).await
        }
    }

    fn trigger(serializer: impl PdfSerializer + 'static) -> ExportTrigger {
        ExportTrigger::new(Arc::new(serializer), Duration::from_secs(30))
    }

    #[tokio::test]
    async fn test_successful_export_downloads_and_revokes() {
        let host = RecordingHost::default();
        let trigger = trigger(LazyPdfSerializer);

        let outcome = trigger.export(&default_profile().unwrap(), &host).await;

        let ExportOutcome::Downloaded { file_name, size_bytes } = outcome else {
            panic!("expected a download, got {outcome:?}");
        };
        assert_eq!(file_name, "Dinesh_Dawonauth_Resume.pdf");
        assert!(size_bytes > 0);

        let url = ObjectUrl::new("blob:test/0");
        assert_eq!(
            host.events(),
            vec![
                Event::Created(url.clone()),
                Event::Downloaded(EXPORT_FILE_NAME.to_string()),
                Event::Revoked(url),
            ]
        );
        assert!(host.staged.lock().unwrap().is_empty());
        assert_eq!(trigger.state(), ExportState::Idle);
    }

    #[tokio::test]
    async fn test_serialization_failure_prints_once() {
        let host = RecordingHost::default();
        let trigger = trigger(FailingSerializer);

        let outcome = trigger.export(&default_profile().unwrap(), &host).await;

        assert!(matches!(outcome, ExportOutcome::PrintFallback { .. }));
        assert_eq!(host.events(), vec![Event::Printed]);
        assert_eq!(trigger.state(), ExportState::Idle);
    }

    #[tokio::test]
    async fn test_download_failure_still_revokes_then_prints() {
        let host = RecordingHost::failing_download();
        let trigger = trigger(LazyPdfSerializer);

        let outcome = trigger.export(&default_profile().unwrap(), &host).await;

        let ExportOutcome::PrintFallback { reason } = outcome else {
            panic!("expected print fallback");
        };
        assert!(reason.contains("disk full"));
        let url = ObjectUrl::new("blob:test/0");
        assert_eq!(
            host.events(),
            vec![Event::Created(url.clone()), Event::Revoked(url), Event::Printed]
        );
        assert_eq!(trigger.state(), ExportState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back_to_print_and_holds_until_settled() {
        let host = RecordingHost::default();
        let finished = Arc::new(AtomicUsize::new(0));
        let trigger = trigger(SlowSerializer {
            finished: finished.clone(),
        });
        let profile = default_profile().unwrap();

        let outcome = trigger.export(&profile, &host).await;

        let ExportOutcome::PrintFallback { reason } = outcome else {
            panic!("expected print fallback");
        };
        assert!(reason.contains("timed out"));
        assert_eq!(host.count(|e| *e == Event::Printed), 1);

        // The abandoned serialization is still running.
        assert_eq!(finished.load(Ordering::SeqCst), 0);
        assert_eq!(trigger.state(), ExportState::Generating);
        assert_eq!(trigger.export(&profile, &host).await, ExportOutcome::Ignored);

        tokio::time::sleep(Duration::from_secs(31)).await;
        tokio::task::yield_now().await;
        assert_eq!(finished.load(Ordering::SeqCst), 1);
        assert_eq!(trigger.state(), ExportState::Idle);
        assert_eq!(host.count(|e| *e == Event::Printed), 1);
    }

    #[tokio::test]
    async fn test_request_while_generating_is_ignored() {
        let started = Arc::new(Notify::new());
        let gate = Arc::new(Notify::new());
        let trigger = Arc::new(trigger(GatedSerializer {
            started: started.clone(),
            gate: gate.clone(),
        }));
        let host = Arc::new(RecordingHost::default());
        let profile = default_profile().unwrap();

        let first = tokio::spawn({
            let trigger = trigger.clone();
            let host = host.clone();
            let profile = profile.clone();
            async move { trigger.export(&profile, host.as_ref()).await }
        });

        started.notified().await;
        assert_eq!(trigger.state(), ExportState::Generating);

        let second = trigger.export(&profile, host.as_ref()).await;
        assert_eq!(second, ExportOutcome::Ignored);

        gate.notify_one();
        let first = first.await.unwrap();
        assert!(matches!(first, ExportOutcome::Downloaded { .. }));
        assert_eq!(host.count(|e| matches!(e, Event::Downloaded(_))), 1);
        assert_eq!(host.count(|e| *e == Event::Printed), 0);
        assert_eq!(trigger.state(), ExportState::Idle);
    }

    #[tokio::test]
    async fn test_sequential_exports_are_identical() {
        let host = RecordingHost::default();
        let trigger = trigger(LazyPdfSerializer);
        let profile = default_profile().unwrap();

        let a = trigger.export(&profile, &host).await;
        let b = trigger.export(&profile, &host).await;

        assert_eq!(a, b);
        let delivered = host.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0], delivered[1]);
    }

    #[test]
    fn test_generating_guard_is_exclusive() {
        let trigger = trigger(FailingSerializer);
        let guard = trigger.try_begin().unwrap();
        assert!(trigger.try_begin().is_none());
        assert_eq!(trigger.state(), ExportState::Generating);
        drop(guard);
        assert_eq!(trigger.state(), ExportState::Idle);
        assert!(trigger.try_begin().is_some());
    }
}
