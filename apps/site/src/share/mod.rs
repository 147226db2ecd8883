//! Share Action: copies the résumé link and acknowledges it for two seconds.
//!
//! The platform clipboard is tried first; if it fails, the selection-copy
//! fallback runs. Either way the acknowledgement flips to `Copied` and a
//! timer flips it back to `Idle` after `COPIED_DURATION`. Copying again while
//! acknowledged restarts the window.
//!
//! When both paths fail the acknowledgement still shows `Copied`; the
//! returned `CopyOutcome::Unconfirmed` is logged so the failure is visible to
//! operators.

pub mod system;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub use system::{CommandClipboard, TerminalSelection};

/// How long the "copied" acknowledgement stays up.
pub const COPIED_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard available")]
    Unavailable,

    #[error("Clipboard command `{command}` failed: {message}")]
    Command { command: String, message: String },

    #[error("Clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Primary copy path.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Fallback copy path: put the text where the user can select and copy it.
pub trait SelectionCopy: Send + Sync {
    fn select_and_copy(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Acknowledgement {
    Idle,
    Copied,
}

/// Which path put the text on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    Selection,
    /// Both paths failed.
    Unconfirmed,
}

pub struct ShareAction {
    url: String,
    clipboard: Arc<dyn Clipboard>,
    selection: Arc<dyn SelectionCopy>,
    ack: Arc<watch::Sender<Acknowledgement>>,
    /// Bumped on every acknowledgement; a revert timer only fires for its own.
    epoch: Arc<AtomicU64>,
    revert: Mutex<Option<JoinHandle<()>>>,
}

impl ShareAction {
    pub fn new(
        url: impl Into<String>,
        clipboard: Arc<dyn Clipboard>,
        selection: Arc<dyn SelectionCopy>,
    ) -> Self {
        let (ack, _) = watch::channel(Acknowledgement::Idle);
        Self {
            url: url.into(),
            clipboard,
            selection,
            ack: Arc::new(ack),
            epoch: Arc::new(AtomicU64::new(0)),
            revert: Mutex::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    #[cfg(test)]
    pub fn acknowledgement(&self) -> Acknowledgement {
        *self.ack.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Acknowledgement> {
        self.ack.subscribe()
    }

    /// Copies the URL and raises the acknowledgement. Must run inside a
    /// tokio runtime; the revert timer is a spawned task.
    pub async fn copy(&self) -> CopyOutcome {
        let outcome = match self.clipboard.write_text(&self.url).await {
            Ok(()) => CopyOutcome::Clipboard,
            Err(e) => {
                debug!(error = %e, "Clipboard write failed; falling back to selection copy");
                match self.selection.select_and_copy(&self.url) {
                    Ok(()) => CopyOutcome::Selection,
                    Err(e) => {
                        warn!(error = %e, "Selection copy failed; copy is unconfirmed");
                        CopyOutcome::Unconfirmed
                    }
                }
            }
        };

        self.acknowledge();
        info!(?outcome, url = %self.url, "Share link copied");
        outcome
    }

    fn acknowledge(&self) {
        let mut revert = self.revert.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = revert.take() {
            previous.abort();
        }

        // Epoch and value change together under the channel's lock, so a
        // stale timer that is already running cannot clear a newer window.
        let mut epoch = 0;
        self.ack.send_modify(|ack| {
            epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
            *ack = Acknowledgement::Copied;
        });

        let ack = Arc::clone(&self.ack);
        let current = Arc::clone(&self.epoch);
        *revert = Some(tokio::spawn(async move {
            tokio::time::sleep(COPIED_DURATION).await;
            ack.send_if_modified(|ack| {
                if current.load(Ordering::SeqCst) != epoch {
                    return false;
                }
                *ack = Acknowledgement::Idle;
                true
            });
        }));
    }
}

impl Drop for ShareAction {
    fn drop(&mut self) {
        let pending = self
            .revert
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = pending {
            task.abort();
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
