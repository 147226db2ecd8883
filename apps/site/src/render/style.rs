//! Typographic tokens for the exported PDF.
//!
//! Every block kind draws with exactly one of these styles. Section headers
//! all use `SECTION_HEADER` and every bulleted list uses `BULLET_MARKER` +
//! `BULLET_TEXT`, so the document stays visually uniform no matter which
//! section a list belongs to.

use crate::layout::Font;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components scaled to the 0.0–1.0 range PDF colour operators expect.
    pub fn unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

pub mod palette {
    use super::Rgb;

    pub const BLACK: Rgb = Rgb(0x0a, 0x0a, 0x0a);
    pub const GRAY: Rgb = Rgb(0x3f, 0x3f, 0x46);
    pub const MEDIUM_GRAY: Rgb = Rgb(0x52, 0x52, 0x5b);
    pub const LIGHT_GRAY: Rgb = Rgb(0xa1, 0xa1, 0xaa);
    pub const LIGHTER_GRAY: Rgb = Rgb(0xe4, 0xe4, 0xe7);
    pub const ACCENT: Rgb = Rgb(0x06, 0xb6, 0xd4);
    pub const ACCENT_MUTED: Rgb = Rgb(0x0e, 0x74, 0x90);
    pub const SHADE: Rgb = Rgb(0xf8, 0xfa, 0xfc);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Rgb,
    pub letter_spacing: f32,
    /// Line advance as a multiple of `size`.
    pub line_height: f32,
}

impl TextStyle {
    const fn new(font: Font, size: f32, color: Rgb) -> Self {
        Self {
            font,
            size,
            color,
            letter_spacing: 0.0,
            line_height: 1.2,
        }
    }

    const fn spaced(self, letter_spacing: f32) -> Self {
        Self {
            letter_spacing,
            ..self
        }
    }

    const fn leading(self, line_height: f32) -> Self {
        Self {
            line_height,
            ..self
        }
    }

    pub fn line_advance(&self) -> f32 {
        self.size * self.line_height
    }
}

use palette::*;

pub const NAME: TextStyle = TextStyle::new(Font::HelveticaBold, 24.0, BLACK).spaced(0.5);
pub const ROLE: TextStyle = TextStyle::new(Font::Helvetica, 11.0, MEDIUM_GRAY);
pub const CONTACT_TEXT: TextStyle = TextStyle::new(Font::Helvetica, 8.5, GRAY);
pub const CONTACT_LINK: TextStyle = TextStyle::new(Font::Helvetica, 8.5, ACCENT_MUTED);
pub const CONTACT_SEPARATOR: TextStyle = TextStyle::new(Font::Helvetica, 8.5, LIGHT_GRAY);

pub const SUMMARY: TextStyle = TextStyle::new(Font::Helvetica, 9.5, GRAY).leading(1.5);

pub const SECTION_HEADER: TextStyle = TextStyle::new(Font::HelveticaBold, 9.0, ACCENT).spaced(2.0);

pub const SKILL_LABEL: TextStyle = TextStyle::new(Font::HelveticaBold, 9.0, BLACK);
pub const SKILL_VALUE: TextStyle = TextStyle::new(Font::Helvetica, 9.0, GRAY);

pub const ITEM_TITLE: TextStyle = TextStyle::new(Font::HelveticaBold, 11.0, BLACK);
pub const TECH_BADGE: TextStyle = TextStyle::new(Font::Courier, 7.5, MEDIUM_GRAY);
pub const DESCRIPTION: TextStyle = TextStyle::new(Font::HelveticaOblique, 9.0, MEDIUM_GRAY);

pub const BULLET_MARKER: TextStyle = TextStyle::new(Font::Helvetica, 9.0, ACCENT);
pub const BULLET_TEXT: TextStyle = TextStyle::new(Font::Helvetica, 9.0, GRAY).leading(1.35);

pub const ROLE_SEPARATOR: TextStyle = TextStyle::new(Font::Helvetica, 9.0, LIGHT_GRAY);
pub const ITEM_ROLE: TextStyle = TextStyle::new(Font::Helvetica, 9.5, MEDIUM_GRAY);
pub const DATE: TextStyle = TextStyle::new(Font::Courier, 8.0, MEDIUM_GRAY);

pub const EDU_DEGREE: TextStyle = TextStyle::new(Font::Helvetica, 9.5, GRAY);
pub const EDU_GPA: TextStyle = TextStyle::new(Font::HelveticaBold, 8.5, ACCENT);

// Spacing, in points.
pub const HEADER_PADDING_BOTTOM: f32 = 10.0;
pub const HEADER_BORDER_WIDTH: f32 = 2.0;
pub const HEADER_MARGIN_BOTTOM: f32 = 12.0;
pub const CONTACT_SEPARATOR_MARGIN: f32 = 5.0;
pub const CONTACT_ROW_GAP: f32 = 2.0;
pub const SUMMARY_MARGIN_BOTTOM: f32 = 14.0;
pub const SECTION_MARGIN_BOTTOM: f32 = 12.0;
pub const SECTION_HEADER_PADDING_BOTTOM: f32 = 3.0;
pub const SECTION_HEADER_BORDER_WIDTH: f32 = 1.0;
pub const SECTION_HEADER_MARGIN_BOTTOM: f32 = 6.0;
pub const SHADED_PADDING: f32 = 8.0;
pub const SKILL_LABEL_WIDTH: f32 = 75.0;
pub const SKILL_ROW_GAP: f32 = 3.0;
pub const ITEM_MARGIN_BOTTOM: f32 = 10.0;
pub const ITEM_HEADER_GAP: f32 = 2.0;
pub const BADGE_PADDING_X: f32 = 5.0;
pub const BADGE_PADDING_Y: f32 = 2.0;
pub const BULLET_INDENT: f32 = 2.0;
pub const BULLET_MARKER_WIDTH: f32 = 12.0;
pub const BULLET_GAP: f32 = 1.0;
pub const ROLE_SEPARATOR_MARGIN: f32 = 6.0;
pub const EDU_LINE_GAP: f32 = 1.0;
