//! Greedy word wrap over the static font metrics.
//!
//! Text is split on whitespace and packed word by word; a word that does not
//! fit starts a new line. A single word wider than the line is placed on its
//! own line unbroken (résumé text has no such words, and splitting URLs would
//! be worse than a slight overrun).

use crate::layout::font_metrics::FontMetricTable;

/// One wrapped line plus the fraction of `max_width` it fills.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub fill: f32,
}

/// Wraps `text` to `max_width` points at `size`. An empty string returns no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size: f32,
    max_width: f32,
) -> Vec<WrappedLine> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![];
    }

    let space_w = metrics.measure(" ", size, 0.0);
    let mut lines: Vec<WrappedLine> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in &words {
        let word_w = metrics.measure(word, size, 0.0);

        if !current.is_empty() && current_width + space_w + word_w > max_width {
            lines.push(WrappedLine {
                text: std::mem::take(&mut current),
                fill: current_width / max_width,
            });
            current_width = 0.0;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }
    lines.push(WrappedLine {
        text: current,
        fill: current_width / max_width,
    });

    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
