//! PDF engine: serializes a `PrintDocument` into PDF bytes with lopdf.
//!
//! # Lazy engine
//! The engine is created on first use through `engine()` and cached for the
//! life of the process, so a server that never exports never pays for it.
//!
//! # Drawing model
//! Blocks are laid out top-down with a cursor measured from the top edge of
//! the page; `Composer` converts to PDF's bottom-up coordinates when it emits
//! operators. Text uses the non-embedded standard Type1 fonts with
//! WinAnsiEncoding, measured with the static AFM tables in `layout`.
//! Output contains no timestamps or random IDs, so identical documents
//! serialize to identical bytes.

use bytes::Bytes;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::layout::font_metrics::{a4_page_config, get_metrics, Font, PageConfig};
use crate::layout::page_fill::{analyze_page_fill, PageFillAnalysis, PageFillVerdict};
use crate::layout::wrap::{wrap_text, WrappedLine};
use crate::render::print::{
    BulletList, EducationBlock, ExperienceEntry, Inline, PrintBlock, PrintDocument, ProjectEntry,
    Section, SectionBody, SkillRow, BULLET_MARKER, CONTACT_SEPARATOR,
};
use crate::render::style::{self, palette, Rgb, TextStyle};
use crate::render::RenderError;

/// Serialized PDF bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfBlob(Bytes);

impl PdfBlob {
    pub const MIME: &'static str = "application/pdf";

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lazy engine
// ────────────────────────────────────────────────────────────────────────────

static ENGINE: OnceCell<PdfEngine> = OnceCell::const_new();

/// Returns the process-wide engine, initialising it on first call.
pub async fn engine() -> Result<&'static PdfEngine, RenderError> {
    ENGINE
        .get_or_try_init(|| async { PdfEngine::load(a4_page_config()) })
        .await
}

#[derive(Debug, Clone)]
pub struct PdfEngine {
    page: PageConfig,
}

impl PdfEngine {
    /// Builds an engine for the given page, checking the font tables it needs.
    pub fn load(page: PageConfig) -> Result<Self, RenderError> {
        for font in Font::ALL {
            if !get_metrics(font).is_well_formed() {
                return Err(RenderError::EngineLoad(format!(
                    "metric table for {} is malformed",
                    font.base_font()
                )));
            }
        }
        if page.content_width() <= 0.0 || page.content_height() <= 0.0 {
            return Err(RenderError::EngineLoad(
                "page paddings leave no content area".to_string(),
            ));
        }
        info!(
            "PDF engine loaded ({}x{}pt page)",
            page.width_pt, page.height_pt
        );
        Ok(Self { page })
    }

    /// Lays out and encodes the document. CPU-bound; run via `spawn_blocking`.
    pub fn serialize(&self, doc: &PrintDocument) -> Result<PdfBlob, RenderError> {
        let (pages, fill) = self.compose(doc);

        match &fill.verdict {
            PageFillVerdict::Overflow { extra_pages } => warn!(
                extra_pages,
                "Resume overflowed onto additional pages"
            ),
            verdict => debug!(
                ?verdict,
                fill = fill.last_page_fill,
                whitespace = fill.whitespace_fraction,
                "Resume page fill"
            ),
        }

        let bytes = self.encode(doc, pages)?;
        Ok(PdfBlob(Bytes::from(bytes)))
    }

    /// Lays the document out and reports the page-fill analysis.
    #[cfg(test)]
    pub fn layout(&self, doc: &PrintDocument) -> PageFillAnalysis {
        self.compose(doc).1
    }

    fn compose(&self, doc: &PrintDocument) -> (Vec<PageCanvas>, PageFillAnalysis) {
        let mut composer = Composer::new(&self.page);
        for block in &doc.blocks {
            match block {
                PrintBlock::Header {
                    name,
                    role,
                    contact_rows,
                } => draw_header(&mut composer, name, role, contact_rows),
                PrintBlock::Summary(text) => draw_summary(&mut composer, text),
                PrintBlock::Section(section) => draw_section(&mut composer, section),
            }
        }
        let (pages, last_y) = composer.finish();
        let fill = analyze_page_fill(pages.len(), last_y, &self.page);
        (pages, fill)
    }

    fn encode(&self, doc: &PrintDocument, pages: Vec<PageCanvas>) -> Result<Vec<u8>, RenderError> {
        let mut pdf = Document::with_version("1.5");
        let pages_id = pdf.new_object_id();

        let mut fonts = Dictionary::new();
        for font in Font::ALL {
            let font_id = pdf.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = pdf.add_object(dictionary! { "Font" => fonts });

        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            self.page.width_pt.into(),
            self.page.height_pt.into(),
        ];

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for canvas in pages {
            let content = Content {
                operations: canvas.ops,
            };
            let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode()?));

            let annots: Vec<Object> = canvas
                .links
                .iter()
                .map(|link| Object::Reference(add_link_annotation(&mut pdf, link)))
                .collect();

            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            };
            if !annots.is_empty() {
                page.set("Annots", annots);
            }
            kids.push(pdf.add_object(page).into());
        }

        let page_count = kids.len() as i64;
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = pdf.add_object(dictionary! {
            "Title" => Object::String(to_win_ansi(&doc.title), StringFormat::Literal),
            "Author" => Object::String(to_win_ansi(&doc.author), StringFormat::Literal),
            "Producer" => Object::string_literal(concat!("site ", env!("CARGO_PKG_VERSION"))),
        });
        pdf.trailer.set("Root", catalog_id);
        pdf.trailer.set("Info", info_id);

        let mut out = Vec::new();
        pdf.save_to(&mut out)
            .map_err(|e| RenderError::Write(e.to_string()))?;
        Ok(out)
    }
}

fn add_link_annotation(pdf: &mut Document, link: &LinkArea) -> ObjectId {
    pdf.add_object(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => link.rect.iter().map(|&v| Object::from(v)).collect::<Vec<_>>(),
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::string_literal(link.href.as_str()),
        },
    })
}

/// Maps a Unicode string onto WinAnsiEncoding bytes. Characters outside the
/// code page become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‹' => 0x8b,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            '›' => 0x9b,
            _ => b'?',
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Composer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct PageCanvas {
    ops: Vec<Operation>,
    links: Vec<LinkArea>,
}

#[derive(Debug)]
struct LinkArea {
    /// `[x1, y1, x2, y2]` in PDF coordinates.
    rect: [f32; 4],
    href: String,
}

struct Composer<'a> {
    page: &'a PageConfig,
    done: Vec<PageCanvas>,
    current: PageCanvas,
    /// Cursor, in points from the top edge.
    y: f32,
}

impl<'a> Composer<'a> {
    fn new(page: &'a PageConfig) -> Self {
        Self {
            page,
            done: Vec::new(),
            current: PageCanvas::default(),
            y: page.padding_top_pt,
        }
    }

    fn left(&self) -> f32 {
        self.page.padding_horizontal_pt
    }

    fn right(&self) -> f32 {
        self.page.width_pt - self.page.padding_horizontal_pt
    }

    fn width(&self) -> f32 {
        self.page.content_width()
    }

    /// Starts a new page unless `height` still fits below the cursor. A block
    /// taller than a whole page is drawn from the top of a fresh page anyway.
    fn ensure_space(&mut self, height: f32) {
        let at_top = self.y <= self.page.padding_top_pt;
        if !at_top && self.y + height > self.page.content_bottom() {
            self.done.push(std::mem::take(&mut self.current));
            self.y = self.page.padding_top_pt;
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    fn pdf_y(&self, top: f32) -> f32 {
        self.page.height_pt - top
    }

    fn measure(style: &TextStyle, s: &str) -> f32 {
        get_metrics(style.font).measure(s, style.size, style.letter_spacing)
    }

    /// Draws one line of text whose line box starts at `top`.
    fn text(&mut self, x: f32, top: f32, style: &TextStyle, s: &str) {
        self.text_at_baseline(x, top + style.size * 0.8, style, s);
    }

    fn text_at_baseline(&mut self, x: f32, baseline: f32, style: &TextStyle, s: &str) {
        if s.is_empty() {
            return;
        }
        let (r, g, b) = style.color.unit();
        let y = self.pdf_y(baseline);
        let ops = &mut self.current.ops;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(style.font.resource_name().as_bytes().to_vec()),
                style.size.into(),
            ],
        ));
        ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        if style.letter_spacing != 0.0 {
            ops.push(Operation::new("Tc", vec![style.letter_spacing.into()]));
        }
        ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(s), StringFormat::Literal)],
        ));
        if style.letter_spacing != 0.0 {
            ops.push(Operation::new("Tc", vec![0.into()]));
        }
        ops.push(Operation::new("ET", vec![]));
    }

    /// Draws `label` and registers a URI annotation over it. Returns its width.
    fn link(&mut self, x: f32, top: f32, style: &TextStyle, label: &str, href: &str) -> f32 {
        let width = Self::measure(style, label);
        self.text(x, top, style, label);
        let rect = [
            x,
            self.pdf_y(top + style.line_advance()),
            x + width,
            self.pdf_y(top),
        ];
        self.current.links.push(LinkArea {
            rect,
            href: href.to_string(),
        });
        width
    }

    fn fill_rect(&mut self, x: f32, top: f32, width: f32, height: f32, color: Rgb) {
        let (r, g, b) = color.unit();
        let y = self.pdf_y(top + height);
        let ops = &mut self.current.ops;
        ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        ));
        ops.push(Operation::new("f", vec![]));
    }

    fn hline(&mut self, x1: f32, x2: f32, at: f32, line_width: f32, color: Rgb) {
        let (r, g, b) = color.unit();
        let y = self.pdf_y(at);
        let ops = &mut self.current.ops;
        ops.push(Operation::new("w", vec![line_width.into()]));
        ops.push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new("m", vec![x1.into(), y.into()]));
        ops.push(Operation::new("l", vec![x2.into(), y.into()]));
        ops.push(Operation::new("S", vec![]));
    }

    fn finish(mut self) -> (Vec<PageCanvas>, f32) {
        self.done.push(self.current);
        (self.done, self.y)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Block drawing
// ────────────────────────────────────────────────────────────────────────────

fn draw_header(c: &mut Composer, name: &str, role: &str, contact_rows: &[Vec<Inline>]) {
    let left_height = style::NAME.line_advance() + 1.0 + style::ROLE.line_advance();
    let row_height = style::CONTACT_TEXT.line_advance() + style::CONTACT_ROW_GAP;
    let right_height = row_height * contact_rows.len() as f32;
    let height = left_height.max(right_height) + style::HEADER_PADDING_BOTTOM;
    c.ensure_space(height + style::HEADER_BORDER_WIDTH);

    let (left, top) = (c.left(), c.y);
    c.text(left, top, &style::NAME, name);
    c.text(left, top + style::NAME.line_advance() + 1.0, &style::ROLE, role);

    for (i, row) in contact_rows.iter().enumerate() {
        draw_contact_row(c, top + row_height * i as f32, row);
    }

    let border_at = top + height + style::HEADER_BORDER_WIDTH / 2.0;
    let right = c.right();
    c.hline(
        left,
        right,
        border_at,
        style::HEADER_BORDER_WIDTH,
        palette::BLACK,
    );
    c.y = top + height + style::HEADER_BORDER_WIDTH + style::HEADER_MARGIN_BOTTOM;
}

/// Right-aligned row of contact items separated by `CONTACT_SEPARATOR`.
fn draw_contact_row(c: &mut Composer, top: f32, items: &[Inline]) {
    let sep_width = Composer::measure(&style::CONTACT_SEPARATOR, CONTACT_SEPARATOR)
        + 2.0 * style::CONTACT_SEPARATOR_MARGIN;
    let style_for = |item: &Inline| match item {
        Inline::Text(_) => style::CONTACT_TEXT,
        Inline::Link { .. } => style::CONTACT_LINK,
    };
    let total: f32 = items
        .iter()
        .map(|item| Composer::measure(&style_for(item), item.label()))
        .sum::<f32>()
        + sep_width * items.len().saturating_sub(1) as f32;

    let mut x = c.right() - total;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            c.text(
                x + style::CONTACT_SEPARATOR_MARGIN,
                top,
                &style::CONTACT_SEPARATOR,
                CONTACT_SEPARATOR,
            );
            x += sep_width;
        }
        let item_style = style_for(item);
        x += match item {
            Inline::Text(text) => {
                c.text(x, top, &item_style, text);
                Composer::measure(&item_style, text)
            }
            Inline::Link { label, href } => c.link(x, top, &item_style, label, href),
        };
    }
}

/// Wraps `text` for `style`, noting any unbreakable word that overruns.
fn wrap(text: &str, style: &TextStyle, width: f32) -> Vec<WrappedLine> {
    let lines = wrap_text(text, get_metrics(style.font), style.size, width);
    if let Some(line) = lines.iter().find(|l| l.fill > 1.0) {
        debug!(line = %line.text, fill = line.fill, "Text overruns its column");
    }
    lines
}

fn draw_summary(c: &mut Composer, text: &str) {
    let lines = wrap(text, &style::SUMMARY, c.width());
    let advance = style::SUMMARY.line_advance();
    for line in &lines {
        c.ensure_space(advance);
        let (x, y) = (c.left(), c.y);
        c.text(x, y, &style::SUMMARY, &line.text);
        c.advance(advance);
    }
    c.advance(style::SUMMARY_MARGIN_BOTTOM);
}

fn draw_section(c: &mut Composer, section: &Section) {
    // keep the header with at least the start of its body
    let header_height = style::SECTION_HEADER.line_advance()
        + style::SECTION_HEADER_PADDING_BOTTOM
        + style::SECTION_HEADER_BORDER_WIDTH
        + style::SECTION_HEADER_MARGIN_BOTTOM;
    c.ensure_space(header_height + style::ITEM_TITLE.line_advance() * 2.0);

    let (left, right, top) = (c.left(), c.right(), c.y);
    c.text(left, top, &style::SECTION_HEADER, &section.heading());
    let border_at = top
        + style::SECTION_HEADER.line_advance()
        + style::SECTION_HEADER_PADDING_BOTTOM
        + style::SECTION_HEADER_BORDER_WIDTH / 2.0;
    c.hline(
        left,
        right,
        border_at,
        style::SECTION_HEADER_BORDER_WIDTH,
        palette::LIGHTER_GRAY,
    );
    c.advance(header_height);

    match &section.body {
        SectionBody::Skills(rows) => draw_skills(c, rows),
        SectionBody::Projects(projects) => {
            for project in projects {
                draw_project(c, project);
            }
        }
        SectionBody::Experience(entries) => {
            for entry in entries {
                draw_experience(c, entry);
            }
        }
        SectionBody::Education(edu) => draw_education(c, edu),
    }
    c.advance(style::SECTION_MARGIN_BOTTOM);
}

fn draw_skills(c: &mut Composer, rows: &[SkillRow]) {
    let pad = style::SHADED_PADDING;
    let value_width = c.width() - 2.0 * pad - style::SKILL_LABEL_WIDTH;
    let label_width = style::SKILL_LABEL_WIDTH - 4.0;
    let advance = style::SKILL_VALUE.line_advance();

    let wrapped: Vec<(Vec<String>, Vec<String>)> = rows
        .iter()
        .map(|row| {
            let label = wrap(&row.label, &style::SKILL_LABEL, label_width);
            let value = wrap(&row.value, &style::SKILL_VALUE, value_width);
            (
                label.into_iter().map(|l| l.text).collect(),
                value.into_iter().map(|l| l.text).collect(),
            )
        })
        .collect();

    let row_heights: Vec<f32> = wrapped
        .iter()
        .map(|(label, value)| advance * label.len().max(value.len()).max(1) as f32)
        .collect();
    let gaps = style::SKILL_ROW_GAP * rows.len().saturating_sub(1) as f32;
    let height = row_heights.iter().sum::<f32>() + gaps + 2.0 * pad;

    c.ensure_space(height);
    let (left, top, width) = (c.left(), c.y, c.width());
    c.fill_rect(left, top, width, height, palette::SHADE);

    let mut y = top + pad;
    for ((label, value), row_height) in wrapped.iter().zip(&row_heights) {
        for (i, line) in label.iter().enumerate() {
            c.text(left + pad, y + advance * i as f32, &style::SKILL_LABEL, line);
        }
        for (i, line) in value.iter().enumerate() {
            c.text(
                left + pad + style::SKILL_LABEL_WIDTH,
                y + advance * i as f32,
                &style::SKILL_VALUE,
                line,
            );
        }
        y += row_height + style::SKILL_ROW_GAP;
    }
    c.y = top + height;
}

fn draw_project(c: &mut Composer, project: &ProjectEntry) {
    let title_h = style::ITEM_TITLE.line_advance();
    let description = wrap(&project.description, &style::DESCRIPTION, c.width());
    let desc_advance = style::DESCRIPTION.line_advance();
    c.ensure_space(title_h + style::ITEM_HEADER_GAP + desc_advance * description.len() as f32);

    let (left, right, top) = (c.left(), c.right(), c.y);
    c.text(left, top, &style::ITEM_TITLE, &project.title);

    let badge_text_w = Composer::measure(&style::TECH_BADGE, &project.badge);
    let badge_w = badge_text_w + 2.0 * style::BADGE_PADDING_X;
    let badge_h = style::TECH_BADGE.line_advance() + 2.0 * style::BADGE_PADDING_Y;
    let badge_x = right - badge_w;
    let badge_top = top + (title_h - badge_h) / 2.0;
    c.fill_rect(badge_x, badge_top, badge_w, badge_h, palette::LIGHTER_GRAY);
    c.text(
        badge_x + style::BADGE_PADDING_X,
        badge_top + style::BADGE_PADDING_Y,
        &style::TECH_BADGE,
        &project.badge,
    );
    c.advance(title_h.max(badge_h) + style::ITEM_HEADER_GAP);

    for line in &description {
        let y = c.y;
        c.text(left, y, &style::DESCRIPTION, &line.text);
        c.advance(desc_advance);
    }
    c.advance(style::ITEM_HEADER_GAP);

    draw_bullets(c, &project.bullets);
    c.advance(style::ITEM_MARGIN_BOTTOM);
}

fn draw_experience(c: &mut Composer, entry: &ExperienceEntry) {
    let title_h = style::ITEM_TITLE.line_advance();
    c.ensure_space(title_h + style::ITEM_HEADER_GAP + style::BULLET_TEXT.line_advance());

    let (left, right, top) = (c.left(), c.right(), c.y);
    let baseline = top + style::ITEM_TITLE.size * 0.8;

    c.text_at_baseline(left, baseline, &style::ITEM_TITLE, &entry.company);
    let mut x = left + Composer::measure(&style::ITEM_TITLE, &entry.company);
    x += style::ROLE_SEPARATOR_MARGIN;
    c.text_at_baseline(x, baseline, &style::ROLE_SEPARATOR, "|");
    x += Composer::measure(&style::ROLE_SEPARATOR, "|") + style::ROLE_SEPARATOR_MARGIN;
    c.text_at_baseline(x, baseline, &style::ITEM_ROLE, &entry.role);

    let period_w = Composer::measure(&style::DATE, &entry.period);
    c.text_at_baseline(right - period_w, baseline, &style::DATE, &entry.period);

    c.advance(title_h + style::ITEM_HEADER_GAP);
    draw_bullets(c, &entry.bullets);
    c.advance(style::ITEM_MARGIN_BOTTOM);
}

/// Every bulleted list in the document goes through here.
fn draw_bullets(c: &mut Composer, bullets: &BulletList) {
    let text_x = c.left() + style::BULLET_INDENT + style::BULLET_MARKER_WIDTH;
    let text_width = c.width() - style::BULLET_INDENT - style::BULLET_MARKER_WIDTH;
    let advance = style::BULLET_TEXT.line_advance();

    for bullet in &bullets.0 {
        let lines = wrap(bullet, &style::BULLET_TEXT, text_width);
        c.ensure_space(advance * lines.len() as f32);
        let (marker_x, top) = (c.left() + style::BULLET_INDENT, c.y);
        c.text(marker_x, top, &style::BULLET_MARKER, BULLET_MARKER);
        for (i, line) in lines.iter().enumerate() {
            c.text(text_x, top + advance * i as f32, &style::BULLET_TEXT, &line.text);
        }
        c.advance(advance * lines.len() as f32 + style::BULLET_GAP);
    }
}

fn draw_education(c: &mut Composer, edu: &EducationBlock) {
    let pad = style::SHADED_PADDING;
    let left_h = style::ITEM_TITLE.line_advance() + style::EDU_LINE_GAP + style::EDU_DEGREE.line_advance();
    let right_h = style::DATE.line_advance() + style::EDU_LINE_GAP + style::EDU_GPA.line_advance();
    let height = left_h.max(right_h) + 2.0 * pad;
    c.ensure_space(height);

    let (left, right, top, width) = (c.left(), c.right(), c.y, c.width());
    c.fill_rect(left, top, width, height, palette::SHADE);

    let y = top + pad;
    c.text(left + pad, y, &style::ITEM_TITLE, &edu.institution);
    c.text(
        left + pad,
        y + style::ITEM_TITLE.line_advance() + style::EDU_LINE_GAP,
        &style::EDU_DEGREE,
        &edu.degree,
    );

    let inner_right = right - pad;
    let date_w = Composer::measure(&style::DATE, &edu.date);
    c.text(inner_right - date_w, y, &style::DATE, &edu.date);
    let gpa_w = Composer::measure(&style::EDU_GPA, &edu.gpa_label);
    c.text(
        inner_right - gpa_w,
        y + style::DATE.line_advance() + style::EDU_LINE_GAP,
        &style::EDU_GPA,
        &edu.gpa_label,
    );
    c.y = top + height;
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
