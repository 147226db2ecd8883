//! Static font-metric tables for the PDF standard fonts used by the export.
//!
//! Widths are the Adobe AFM advance widths in thousandths of an em, so a string
//! at `size` points measures `sum(widths) * size / 1000`. The export only uses
//! the four non-embedded standard fonts below, which every PDF reader ships.
//! ASCII 0x20..=0x7E is looked up by table index `(char as usize) - 32`; the
//! handful of WinAnsi punctuation glyphs the résumé uses have explicit entries,
//! anything else falls back to `average_width`.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font enum
// ────────────────────────────────────────────────────────────────────────────

/// The standard PDF fonts the export renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    Courier,
}

impl Font {
    pub const ALL: [Font; 4] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::HelveticaOblique,
        Font::Courier,
    ];

    /// PostScript name written into the font dictionary's `BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
            Font::Courier => "Courier",
        }
    }

    /// Resource name used in content streams (`/F1 10 Tf`).
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
            Font::Courier => "F4",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry for the exported document, in points (1/72").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    pub padding_top_pt: f32,
    pub padding_bottom_pt: f32,
    pub padding_horizontal_pt: f32,
}

impl PageConfig {
    /// Usable text width between the horizontal paddings.
    pub fn content_width(&self) -> f32 {
        self.width_pt - 2.0 * self.padding_horizontal_pt
    }

    /// Lowest y (measured from the top) that content may reach.
    pub fn content_bottom(&self) -> f32 {
        self.height_pt - self.padding_bottom_pt
    }

    pub fn content_height(&self) -> f32 {
        self.content_bottom() - self.padding_top_pt
    }
}

/// A4 (210 × 297 mm) with 30pt vertical and 35pt horizontal padding.
pub fn a4_page_config() -> PageConfig {
    PageConfig {
        width_pt: 595.28,
        height_pt: 841.89,
        padding_top_pt: 30.0,
        padding_bottom_pt: 30.0,
        padding_horizontal_pt: 35.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static advance-width table for one standard font.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in 1/1000 em.
pub struct FontMetricTable {
    widths: [u16; 95],
    /// Width of `•`, `›`, `–` and friends, in the same order as `EXTRA_GLYPHS`.
    extras: [u16; 6],
    /// Fallback width for characters outside the table.
    pub average_width: u16,
}

/// Non-ASCII glyphs with known widths: bullet, single right guillemet,
/// en dash, em dash, right single quote, left single quote.
const EXTRA_GLYPHS: [char; 6] = ['•', '›', '–', '—', '’', '‘'];

impl FontMetricTable {
    fn glyph_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        EXTRA_GLYPHS
            .iter()
            .position(|&g| g == c)
            .map(|i| self.extras[i])
            .unwrap_or(self.average_width)
    }

    /// Measures the rendered width of a string in points at `size`.
    ///
    /// `letter_spacing` is added after every character, mirroring the PDF
    /// `Tc` operator.
    pub fn measure(&self, s: &str, size: f32, letter_spacing: f32) -> f32 {
        let (units, count) = s
            .chars()
            .fold((0u32, 0usize), |(u, n), c| (u + self.glyph_width(c) as u32, n + 1));
        units as f32 * size / 1000.0 + letter_spacing * count as f32
    }

    /// True if every table entry is a plausible advance width.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.widths
            .iter()
            .chain(self.extras.iter())
            .all(|&w| (100..=1100).contains(&w))
            && self.average_width > 0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0    1    2    3    4    5    6    7    8    9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0    1    2    3    4    5    6    7    8    9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    333, 333, 584, 584, 584, 611, 975,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 584, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // {    |    }    ~
    389, 280, 389, 584,
];

/// Helvetica, for body text.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    widths: HELVETICA_WIDTHS,
    extras: [350, 333, 556, 1000, 222, 222],
    average_width: 520,
};

/// Helvetica-Bold, for names and labels.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    widths: HELVETICA_BOLD_WIDTHS,
    extras: [350, 333, 556, 1000, 278, 278],
    average_width: 560,
};

/// Helvetica-Oblique: same advance widths as upright Helvetica.
static HELVETICA_OBLIQUE_TABLE: FontMetricTable = FontMetricTable {
    widths: HELVETICA_WIDTHS,
    extras: [350, 333, 556, 1000, 222, 222],
    average_width: 520,
};

/// Courier: monospaced, every glyph 600.
static COURIER_TABLE: FontMetricTable = FontMetricTable {
    widths: [600; 95],
    extras: [600; 6],
    average_width: 600,
};

/// Returns the static metric table for a font.
pub fn get_metrics(font: Font) -> &'static FontMetricTable {
    match font {
        Font::Helvetica => &HELVETICA_TABLE,
        Font::HelveticaBold => &HELVETICA_BOLD_TABLE,
        Font::HelveticaOblique => &HELVETICA_OBLIQUE_TABLE,
        Font::Courier => &COURIER_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_returns_zero() {
        assert_eq!(get_metrics(Font::Helvetica).measure("", 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_measure_ascii_characters() {
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056 → 20.56pt at 10pt
        let width = get_metrics(Font::Helvetica).measure("Rust", 10.0, 0.0);
        assert!((width - 20.56).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let text = "Featured Projects";
        let regular = get_metrics(Font::Helvetica).measure(text, 11.0, 0.0);
        let bold = get_metrics(Font::HelveticaBold).measure(text, 11.0, 0.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_courier_is_monospaced() {
        let metrics = get_metrics(Font::Courier);
        assert_eq!(
            metrics.measure("iiii", 8.0, 0.0),
            metrics.measure("WWWW", 8.0, 0.0)
        );
    }

    #[test]
    fn test_letter_spacing_added_per_char() {
        let metrics = get_metrics(Font::HelveticaBold);
        let plain = metrics.measure("SKILLS", 9.0, 0.0);
        let spaced = metrics.measure("SKILLS", 9.0, 2.0);
        assert!((spaced - plain - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_known_punctuation_glyphs() {
        let metrics = get_metrics(Font::Helvetica);
        assert!((metrics.measure("•", 1000.0, 0.0) - 350.0).abs() < 1e-3);
        assert!((metrics.measure("›", 1000.0, 0.0) - 333.0).abs() < 1e-3);
        // unknown non-ASCII falls back to the average width
        assert!((metrics.measure("é", 1000.0, 0.0) - 520.0).abs() < 1e-3);
    }

    #[test]
    fn test_all_tables_well_formed() {
        for font in Font::ALL {
            let metrics = get_metrics(font);
            assert!(metrics.is_well_formed(), "{font:?} table malformed");
        }
    }

    #[test]
    fn test_resource_names_unique() {
        let mut names: Vec<&str> = Font::ALL.iter().map(|f| f.resource_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Font::ALL.len());
    }

    #[test]
    fn test_a4_page_config_sanity() {
        let config = a4_page_config();
        assert!((config.content_width() - 525.28).abs() < 1e-3);
        assert!((config.content_bottom() - 811.89).abs() < 1e-3);
        assert!(config.content_height() > 750.0);
    }
}
