//! Report rendering — writes an `AnalysisResult` as a single-page A4 PDF.
//!
//! The document is assembled directly with `lopdf`: one page, the two standard
//! Helvetica faces (not embedded, WinAnsi encoding), one `BT … ET` block per
//! printed line. Coordinates are whole points.

pub mod font_metrics;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use thiserror::Error;

use crate::analysis::{join_or_none, AnalysisResult};
use crate::report::font_metrics::StandardFont;

pub const REPORT_TITLE: &str = "IntelliScan Resume Analysis Report";
pub const REPORT_MIME: &str = "application/pdf";

// A4 portrait, 10mm margins.
const PAGE_WIDTH_PT: i64 = 595;
const PAGE_HEIGHT_PT: i64 = 842;
const MARGIN_PT: i64 = 28;
/// Height of one printed line (10mm).
const LINE_HEIGHT_PT: i64 = 28;
/// Gap before each list block (5mm).
const SECTION_GAP_PT: i64 = 14;
const TITLE_SIZE_PT: i64 = 16;
const BODY_SIZE_PT: i64 = 12;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to encode page content: {0}")]
    Encode(String),

    #[error("Failed to write PDF: {0}")]
    Write(String),
}

/// Download name offered for a report: `<original-filename>_analysis.pdf`.
pub fn report_file_name(original_file_name: &str) -> String {
    format!("{original_file_name}_analysis.pdf")
}

/// Renders the analysis report and returns the PDF bytes.
pub fn generate_report(job_role: &str, analysis: &AnalysisResult) -> Result<Vec<u8>, ReportError> {
    let mut page = PageWriter::new();

    page.centered_line(REPORT_TITLE, StandardFont::HelveticaBold, TITLE_SIZE_PT);
    page.line(&format!("Job Role: {job_role}"));
    page.line(&format!(
        "Skill Match Score: {:.2}%",
        analysis.skill_match_score
    ));
    page.line(&format!("Job Match Score: {:.2}%", analysis.job_match_score));

    page.list_block("Matched Skills:", &join_or_none(&analysis.matched_skills));
    page.list_block("Missing Skills:", &join_or_none(&analysis.missing_skills));
    page.list_block(
        "Missing Resume Sections:",
        &join_or_none(&analysis.missing_sections),
    );

    if page.clipped_lines > 0 {
        tracing::warn!(
            "Report for {job_role:?} overflowed the page; {} lines clipped",
            page.clipped_lines
        );
    }

    build_document(page.operations)
}

/// Accumulates content-stream operations top-down, tracking the cursor.
struct PageWriter {
    operations: Vec<Operation>,
    /// Distance of the next line's top edge from the top of the page.
    cursor_pt: i64,
    clipped_lines: usize,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
            cursor_pt: MARGIN_PT,
            clipped_lines: 0,
        }
    }

    fn text_width_pt() -> i64 {
        PAGE_WIDTH_PT - 2 * MARGIN_PT
    }

    fn line(&mut self, text: &str) {
        self.place(text, StandardFont::Helvetica, BODY_SIZE_PT, MARGIN_PT);
    }

    fn centered_line(&mut self, text: &str, font: StandardFont, size: i64) {
        let width = font.metrics().measure_str(text, size as f32).round() as i64;
        let x = MARGIN_PT + ((Self::text_width_pt() - width) / 2).max(0);
        self.place(text, font, size, x);
    }

    /// A label line followed by `body` wrapped to the text width.
    fn list_block(&mut self, label: &str, body: &str) {
        self.cursor_pt += SECTION_GAP_PT;
        self.line(label);

        let wrapped = StandardFont::Helvetica.metrics().wrap(
            body,
            BODY_SIZE_PT as f32,
            Self::text_width_pt() as f32,
        );
        for text in wrapped {
            self.line(&text);
        }
    }

    /// Emits one line with its baseline vertically centred in a line cell.
    fn place(&mut self, text: &str, font: StandardFont, size: i64, x: i64) {
        if self.cursor_pt + LINE_HEIGHT_PT > PAGE_HEIGHT_PT - MARGIN_PT {
            self.clipped_lines += 1;
            return;
        }

        let baseline_from_top = self.cursor_pt + LINE_HEIGHT_PT / 2 + size * 3 / 10;
        let y = PAGE_HEIGHT_PT - baseline_from_top;

        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(font.resource_name().as_bytes().to_vec()),
                    Object::Integer(size),
                ],
            ),
            Operation::new("Td", vec![Object::Integer(x), Object::Integer(y)]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);

        self.cursor_pt += LINE_HEIGHT_PT;
    }
}

/// Latin-1 text maps byte-for-byte onto WinAnsi; anything else prints as `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ 0x20..=0x7E | code @ 0xA0..=0xFF => code as u8,
            _ => b'?',
        })
        .collect()
}

fn font_dictionary(font: StandardFont) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn build_document(operations: Vec<Operation>) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(StandardFont::Helvetica));
    let bold_id = doc.add_object(font_dictionary(StandardFont::HelveticaBold));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            StandardFont::Helvetica.resource_name() => regular_id,
            StandardFont::HelveticaBold.resource_name() => bold_id,
        },
    });

    let content = Content { operations }
        .encode()
        .map_err(|e| ReportError::Encode(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => Object::Integer(1),
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH_PT),
            Object::Integer(PAGE_HEIGHT_PT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(REPORT_TITLE),
        "Producer" => Object::string_literal(concat!("intelliscan ", env!("CARGO_PKG_VERSION"))),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ReportError::Write(e.to_string()))?;
    Ok(bytes)
}
