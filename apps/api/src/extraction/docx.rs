//! DOCX text extraction using docx-rs.
//!
//! Only top-level body paragraphs are read, in document order. Empty paragraphs
//! are kept so that the joined text preserves the document's line structure.

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::ExtractError;

/// Reads every top-level paragraph and joins them with `\n`.
pub fn extract_docx_text(content: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(content)
        .map_err(|e| ExtractError::Docx(format!("Failed to parse DOCX: {e}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(p: &Paragraph) -> String {
    let mut text = String::new();

    for child in &p.children {
        match child {
            ParagraphChild::Run(r) => push_run_text(&mut text, &r.children),
            // Hyperlink children are ParagraphChild again; only their runs carry text.
            ParagraphChild::Hyperlink(h) => {
                for inner in &h.children {
                    if let ParagraphChild::Run(r) = inner {
                        push_run_text(&mut text, &r.children);
                    }
                }
            }
            _ => {}
        }
    }

    text
}

fn push_run_text(text: &mut String, children: &[RunChild]) {
    for run_child in children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use docx_rs::{Docx, Hyperlink, HyperlinkType, Run};

    use super::*;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut doc = Docx::new();
        for text in paragraphs {
            doc = doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = Cursor::new(Vec::new());
        doc.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_joined_in_order() {
        let bytes = build_docx(&["Jane Doe", "Education", "BSc Computer Science"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nEducation\nBSc Computer Science");
    }

    #[test]
    fn test_runs_within_paragraph_are_concatenated() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Python"))
            .add_run(Run::new().add_tab().add_text("SQL"));
        let mut cursor = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(paragraph)
            .build()
            .pack(&mut cursor)
            .unwrap();

        let text = extract_docx_text(&cursor.into_inner()).unwrap();
        assert_eq!(text, "Python\tSQL");
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Portfolio:"))
            .add_hyperlink(
                Hyperlink::new("https://github.com/jane", HyperlinkType::External)
                    .add_run(Run::new().add_text("github.com/jane")),
            );
        let mut cursor = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(paragraph)
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Projects")))
            .build()
            .pack(&mut cursor)
            .unwrap();

        let text = extract_docx_text(&cursor.into_inner()).unwrap();
        assert_eq!(text, "Portfolio:github.com/jane\nProjects");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(extract_docx_text(&[]), Err(ExtractError::Docx(_))));
    }
}
