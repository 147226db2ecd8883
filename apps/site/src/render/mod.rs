// Résumé renderers. `screen` produces the themeable HTML page, `print` the
// fixed A4 document description, and `pdf` turns that description into bytes.

pub mod pdf;
pub mod print;
pub mod screen;
pub mod style;

use thiserror::Error;

pub use pdf::{engine, PdfBlob};
pub use print::PrintDocument;
pub use screen::{ScreenContext, ScreenRenderer};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF engine failed to load: {0}")]
    EngineLoad(String),

    #[error("PDF encoding error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF write error: {0}")]
    Write(String),

    #[error("Template error: {0}")]
    Template(String),
}
