//! PDF text extraction.
//!
//! Pages are read one at a time with `lopdf` so that blank pages can be dropped.
//! When no page yields text (unusual font encodings that lopdf cannot map),
//! the whole document is handed to `pdf-extract`, which handles CID fonts and
//! ToUnicode CMaps.

use lopdf::Document;

use super::ExtractError;

/// Extracts text page by page, joining non-empty pages with `\n`.
pub fn extract_pdf_text(content: &[u8]) -> Result<String, ExtractError> {
    extract_with_fallback(content, |bytes| {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())
    })
}

fn extract_with_fallback<F>(content: &[u8], fallback: F) -> Result<String, ExtractError>
where
    F: FnOnce(&[u8]) -> Result<String, String>,
{
    let doc = Document::load_mem(content)
        .map_err(|e| ExtractError::Pdf(format!("Failed to load PDF: {e}")))?;

    let pages: Vec<String> = doc
        .get_pages()
        .into_keys()
        .filter_map(|page_number| match doc.extract_text(&[page_number]) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!("No text on PDF page {page_number}: {e}");
                None
            }
        })
        .filter(|text| !text.trim().is_empty())
        .collect();

    if !pages.is_empty() {
        return Ok(pages.join("\n"));
    }

    tracing::debug!("Per-page extraction found no text; retrying with pdf-extract");
    match fallback(content) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!("pdf-extract fallback failed: {e}");
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, ObjectId, Stream, StringFormat};

    use super::*;
    use crate::analysis::AnalysisResult;
    use crate::report::generate_report;

    /// One page per entry; `None` leaves the page without any text operators.
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id: ObjectId = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in pages {
            let operations = match text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(text.as_bytes().to_vec(), StringFormat::Literal)],
                    ),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations }.encode().unwrap();
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => Object::Integer(count),
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn non_blank_lines(text: &str) -> Vec<&str> {
        text.lines().filter(|l| !l.trim().is_empty()).collect()
    }

    #[test]
    fn test_extracts_text_from_generated_report() {
        let analysis = AnalysisResult {
            matched_skills: BTreeSet::from(["Python".to_string()]),
            missing_skills: BTreeSet::new(),
            skill_match_score: 100.0,
            job_match_score: 50.0,
            missing_sections: vec![],
        };
        let bytes = generate_report("Data Scientist", &analysis).unwrap();

        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("Data Scientist"), "got: {text}");
        assert!(text.contains("Python"), "got: {text}");
    }

    #[test]
    fn test_pages_joined_in_order_and_blank_pages_skipped() {
        let bytes = build_pdf(&[Some("Experience at Acme"), None, Some("Skills Python SQL")]);

        let text = extract_with_fallback(&bytes, |_| panic!("fallback must not run")).unwrap();
        assert_eq!(
            non_blank_lines(&text),
            vec!["Experience at Acme", "Skills Python SQL"]
        );
        // The blank middle page adds no extra separator.
        assert!(!text.contains("\n\n\n"), "got: {text:?}");
    }

    #[test]
    fn test_fallback_used_when_no_page_has_text() {
        let bytes = build_pdf(&[None, None]);

        let text = extract_with_fallback(&bytes, |_| Ok("Recovered Python".to_string())).unwrap();
        assert_eq!(text, "Recovered Python");
    }

    #[test]
    fn test_failed_fallback_yields_empty_text() {
        let bytes = build_pdf(&[None]);

        let text = extract_with_fallback(&bytes, |_| Err("unsupported font".to_string())).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_blank_document_has_no_text() {
        let bytes = build_pdf(&[None, None]);
        assert!(extract_pdf_text(&bytes).unwrap().trim().is_empty());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(extract_pdf_text(b"%PDF-garbage").is_err());
    }
}
