//! Filesystem delivery of an export, used by the `export` CLI command.
//!
//! A download writes the PDF into the output directory. The print fallback
//! writes the print-mode HTML page next to where the PDF would have gone, so
//! the user can open it and print from the browser.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{error, info};

use crate::export::{ExportError, ExportHost, ObjectUrl, EXPORT_FILE_NAME};
use crate::render::PdfBlob;

pub struct FileExportHost {
    out_dir: PathBuf,
    print_page: String,
    staged: Mutex<HashMap<ObjectUrl, PdfBlob>>,
    next_id: Mutex<u64>,
}

impl FileExportHost {
    /// `print_page` is the pre-rendered print-mode HTML written on fallback.
    pub fn new(out_dir: impl Into<PathBuf>, print_page: String) -> Self {
        Self {
            out_dir: out_dir.into(),
            print_page,
            staged: Mutex::new(HashMap::new()),
            next_id: Mutex::new(0),
        }
    }

    pub fn pdf_path(&self) -> PathBuf {
        self.out_dir.join(EXPORT_FILE_NAME)
    }

    pub fn print_page_path(&self) -> PathBuf {
        self.pdf_path().with_extension("html")
    }

    fn staged(&self) -> std::sync::MutexGuard<'_, HashMap<ObjectUrl, PdfBlob>> {
        self.staged.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn write(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
}

impl ExportHost for FileExportHost {
    fn create_object_url(&self, blob: PdfBlob) -> ObjectUrl {
        let mut next = self.next_id.lock().unwrap_or_else(PoisonError::into_inner);
        let url = ObjectUrl::new(format!("blob:file/{next}"));
        *next += 1;
        self.staged().insert(url.clone(), blob);
        url
    }

    fn revoke_object_url(&self, url: &ObjectUrl) {
        self.staged().remove(url);
    }

    fn download(&self, url: &ObjectUrl, file_name: &str) -> Result<(), ExportError> {
        let staged = self.staged();
        let blob = staged
            .get(url)
            .ok_or_else(|| ExportError::Download(format!("unknown object URL {}", url.as_str())))?;
        let path = self.out_dir.join(file_name);
        write(&path, blob.as_bytes())
            .map_err(|e| ExportError::Download(format!("{}: {e}", path.display())))?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    fn print(&self) {
        let path = self.print_page_path();
        match write(&path, self.print_page.as_bytes()) {
            Ok(()) => info!(
                "PDF export unavailable; open {} to print instead",
                path.display()
            ),
            Err(e) => error!("Failed to write print page {}: {e}", path.display()),
        }
    }
}
