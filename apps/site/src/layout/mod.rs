// Layout primitives for the PDF export: standard-font metrics, word wrap and
// page-fill analysis. Pure and CPU-bound; callers run them inside
// tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod page_fill;
pub mod wrap;

pub use font_metrics::Font;
