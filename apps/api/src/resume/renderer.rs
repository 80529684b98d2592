//! Document renderer: serializes a `DocumentModel` into final PDF bytes.
//!
//! The visual style sheet is fixed (A4, ~30pt margins, blue accent, one
//! font size per text role). Rendering is all-or-nothing — any engine
//! failure surfaces as a `RenderError` and no partial output escapes.
//! The printpdf work is CPU-bound, so it runs inside
//! `tokio::task::spawn_blocking` and the caller awaits completion.
//!
//! The engine is capability-gated: deployments without rendering support
//! disable it at startup, and `render` fails immediately with a clearly
//! labeled `UnsupportedEnvironment` error instead of silently falling back.

use bytes::Bytes;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use thiserror::Error;

use crate::biography;
use crate::resume::document::{ContentItem, DocumentModel};
use crate::resume::metrics::{get_metrics, Face};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document rendering is not available in this environment")]
    UnsupportedEnvironment,

    #[error("rendering engine failure: {0}")]
    Engine(String),
}

/// Final binary output plus nothing else — the suggested filename is built
/// at delivery time, not here.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Style sheet
// ────────────────────────────────────────────────────────────────────────────

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
/// ~30pt page padding, matching the reference style sheet.
const MARGIN_MM: f32 = 11.0;
const PT_PER_MM: f32 = 2.834_646;
const LINE_HEIGHT: f32 = 1.4;

/// Accent blue (#3b82f6).
const ACCENT: (f32, f32, f32) = (0.231, 0.510, 0.965);
/// Heading grey (#374151).
const GREY_DARK: (f32, f32, f32) = (0.216, 0.255, 0.318);
/// Muted grey (#6b7280).
const GREY_MID: (f32, f32, f32) = (0.420, 0.447, 0.502);
/// Body grey (#4b5563).
const GREY_BODY: (f32, f32, f32) = (0.294, 0.333, 0.388);
/// Divider grey (#e5e7eb).
const GREY_RULE: (f32, f32, f32) = (0.898, 0.906, 0.922);

/// Visual roles for text runs. Each role fixes a size, face, and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextRole {
    Name,
    Headline,
    Contact,
    SectionHeading,
    ItemTitle,
    ItemSubtitle,
    Body,
    Chip,
}

impl TextRole {
    fn size_pt(self) -> f32 {
        match self {
            TextRole::Name => 24.0,
            TextRole::Headline => 16.0,
            TextRole::SectionHeading => 14.0,
            TextRole::ItemTitle => 12.0,
            TextRole::Contact | TextRole::ItemSubtitle | TextRole::Body => 10.0,
            TextRole::Chip => 9.0,
        }
    }

    fn face(self) -> Face {
        match self {
            TextRole::Name | TextRole::SectionHeading | TextRole::ItemTitle => Face::HelveticaBold,
            _ => Face::Helvetica,
        }
    }

    fn color(self) -> Color {
        let (r, g, b): (f32, f32, f32) = match self {
            TextRole::Name => ACCENT,
            TextRole::Headline | TextRole::Contact | TextRole::ItemSubtitle => GREY_MID,
            TextRole::SectionHeading | TextRole::ItemTitle | TextRole::Chip => GREY_DARK,
            TextRole::Body => GREY_BODY,
        };
        Color::Rgb(Rgb::new(r, g, b, None))
    }

    /// Usable line width in em units at this role's font size.
    fn max_width_em(self) -> f32 {
        (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) * PT_PER_MM / self.size_pt()
    }

    fn line_height_mm(self) -> f32 {
        self.size_pt() * LINE_HEIGHT / PT_PER_MM
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

/// The document rendering engine. Constructed once at startup; `enabled`
/// reflects whether this deployment supports PDF generation at all.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    enabled: bool,
}

impl PdfRenderer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Renders the model into final PDF bytes.
    ///
    /// Asynchronous: the pagination work runs on the blocking pool and the
    /// caller awaits completion. Not cancellable mid-flight, no timeout.
    pub async fn render(&self, model: DocumentModel) -> Result<RenderedDocument, RenderError> {
        if !self.enabled {
            return Err(RenderError::UnsupportedEnvironment);
        }

        let bytes = tokio::task::spawn_blocking(move || render_document(&model))
            .await
            .map_err(|e| RenderError::Engine(e.to_string()))??;

        Ok(RenderedDocument {
            bytes: Bytes::from(bytes),
        })
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn for_role(&self, role: TextRole) -> &IndirectFontRef {
        match role.face() {
            Face::Helvetica => &self.regular,
            Face::HelveticaBold => &self.bold,
        }
    }
}

/// Tracks the write position on the current page and breaks to a fresh page
/// when a line would cross the bottom margin.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f32,
}

impl<'a> PageCursor<'a> {
    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y_mm - needed_mm < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn write_line(&mut self, text: &str, role: TextRole, fonts: &Fonts) {
        let line_mm = role.line_height_mm();
        self.ensure_room(line_mm);
        self.y_mm -= line_mm;
        self.layer.set_fill_color(role.color());
        self.layer.use_text(
            text,
            role.size_pt(),
            Mm(MARGIN_MM),
            Mm(self.y_mm),
            fonts.for_role(role),
        );
    }

    fn write_wrapped(&mut self, text: &str, role: TextRole, fonts: &Fonts) {
        let metrics = get_metrics(role.face());
        for line in metrics.wrap(text, role.max_width_em()) {
            self.write_line(&line, role, fonts);
        }
    }

    /// Draws a full-width horizontal rule just below the current position.
    fn rule(&mut self, color: (f32, f32, f32), thickness_pt: f32) {
        self.ensure_room(2.0);
        self.y_mm -= 1.5;
        let (r, g, b) = color;
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(r, g, b, None)));
        self.layer.set_outline_thickness(thickness_pt);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(self.y_mm)), false),
                (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(self.y_mm)), false),
            ],
            is_closed: false,
        });
    }

    fn gap(&mut self, mm: f32) {
        self.y_mm -= mm;
    }
}

fn render_document(model: &DocumentModel) -> Result<Vec<u8>, RenderError> {
    let title = format!("{} - Resume", biography::PROFILE.name);
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Engine(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Engine(e.to_string()))?,
    };

    let mut cursor = PageCursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    // Header block is always present, selected sections follow.
    cursor.write_line(biography::PROFILE.name, TextRole::Name, &fonts);
    cursor.write_line(biography::PROFILE.headline, TextRole::Headline, &fonts);
    cursor.write_line(biography::PROFILE.contact, TextRole::Contact, &fonts);
    cursor.rule(ACCENT, 1.5);
    cursor.gap(4.0);

    for block in &model.blocks {
        cursor.gap(3.0);
        cursor.write_wrapped(block.title, TextRole::SectionHeading, &fonts);
        cursor.rule(GREY_RULE, 0.75);
        cursor.gap(1.5);

        for item in &block.items {
            match item {
                ContentItem::ItemTitle(text) => {
                    cursor.gap(1.5);
                    cursor.write_wrapped(text, TextRole::ItemTitle, &fonts);
                }
                ContentItem::ItemSubtitle(text) => {
                    cursor.write_wrapped(text, TextRole::ItemSubtitle, &fonts);
                }
                ContentItem::Description(text) => {
                    cursor.write_wrapped(&format!("- {text}"), TextRole::Body, &fonts);
                }
                ContentItem::SkillChips(chips) => {
                    cursor.write_wrapped(&chips.join("   "), TextRole::Chip, &fonts);
                }
            }
        }
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Engine(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::document::{self, SectionBlock};
    use crate::resume::section::{SectionKey, SelectionState};

    #[tokio::test]
    async fn test_disabled_renderer_fails_with_unsupported_environment() {
        let renderer = PdfRenderer::new(false);
        let model = document::build(&SelectionState::default());
        let err = renderer.render(model).await.unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedEnvironment));
    }

    #[tokio::test]
    async fn test_empty_model_renders_header_only_pdf() {
        let renderer = PdfRenderer::new(true);
        let rendered = renderer.render(DocumentModel::default()).await.unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_full_selection_contains_all_five_categories() {
        let renderer = PdfRenderer::new(true);
        let model = document::build(&SelectionState::default());
        let rendered = renderer.render(model).await.unwrap();

        let text = pdf_extract::extract_text_from_mem(&rendered.bytes)
            .expect("rendered PDF should be extractable");

        // One spot-check per biography category.
        assert!(text.contains("Amrita Vishwa Vidyapeetham"), "education missing");
        assert!(text.contains("Connected Value Health Solutions"), "experience missing");
        assert!(text.contains("MedGPT"), "projects missing");
        assert!(text.contains("10.1109/AIDE57418.2024.10531394"), "publication DOI missing");
        assert!(text.contains("LangChain"), "skills missing");
    }

    #[tokio::test]
    async fn test_unselected_sections_do_not_leak_into_output() {
        let renderer = PdfRenderer::new(true);
        let model = document::build(&SelectionState::from_keys(&[SectionKey::Education]));
        let rendered = renderer.render(model).await.unwrap();

        let text = pdf_extract::extract_text_from_mem(&rendered.bytes).unwrap();
        assert!(text.contains("Amrita Vishwa Vidyapeetham"));
        assert!(!text.contains("MedGPT"));
        assert!(!text.contains("10.1109/AIDE57418.2024.10531394"));
    }

    #[tokio::test]
    async fn test_overlong_model_paginates_without_error() {
        let renderer = PdfRenderer::new(true);
        let items = (0..200)
            .map(|i| {
                ContentItem::Description(format!(
                    "Synthetic achievement line number {i} used to force a page break"
                ))
            })
            .collect();
        let model = DocumentModel {
            blocks: vec![SectionBlock {
                key: SectionKey::Experience,
                title: SectionKey::Experience.label(),
                items,
            }],
        };
        let rendered = renderer.render(model).await.unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
        let text = pdf_extract::extract_text_from_mem(&rendered.bytes).unwrap();
        assert!(text.contains("line number 199"));
    }
}
