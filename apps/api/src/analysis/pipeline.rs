//! Per-upload pipeline: extract → match → score → check format → render.
//!
//! Uploads are processed one after another in the order received. A file that
//! yields no text (unsupported format, empty document, parse failure) is
//! skipped and only logged.

use bytes::Bytes;
use serde::Serialize;

use crate::analysis::tagger::SkillTagger;
use crate::analysis::{analyze_resume, AnalysisResult};
use crate::extraction::extract_text;
use crate::report::{generate_report, report_file_name, ReportError};

/// One uploaded file as received from the form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content: Bytes,
}

/// Analysis plus rendered report for one upload.
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    pub file_name: String,
    pub report_file_name: String,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    #[serde(skip)]
    pub report_pdf: Vec<u8>,
}

/// Runs the full pipeline over every upload, in order.
///
/// Only report rendering can fail the whole batch; extraction problems skip
/// the offending file.
pub fn analyze_uploads(
    uploads: &[Upload],
    job_description: &str,
    job_role: &str,
    tagger: &dyn SkillTagger,
) -> Result<Vec<FileAnalysis>, ReportError> {
    let mut results = Vec::with_capacity(uploads.len());

    for upload in uploads {
        let Some(resume_text) = resume_text(upload) else {
            continue;
        };

        let analysis = analyze_resume(&resume_text, job_description, job_role, tagger);
        tracing::info!(
            "Analysed {}: skill match {:.2}%, job match {:.2}%, {} missing sections",
            upload.file_name,
            analysis.skill_match_score,
            analysis.job_match_score,
            analysis.missing_sections.len()
        );

        let report_pdf = generate_report(job_role, &analysis)?;

        results.push(FileAnalysis {
            file_name: upload.file_name.clone(),
            report_file_name: report_file_name(&upload.file_name),
            analysis,
            report_pdf,
        });
    }

    Ok(results)
}

/// Non-empty extracted text, or `None` when the file must be skipped.
fn resume_text(upload: &Upload) -> Option<String> {
    match extract_text(&upload.file_name, &upload.content) {
        Ok(Some(text)) if !text.trim().is_empty() => Some(text),
        Ok(Some(_)) => {
            tracing::warn!("Skipping {}: no extractable text", upload.file_name);
            None
        }
        Ok(None) => {
            tracing::warn!("Skipping {}: unsupported file type", upload.file_name);
            None
        }
        Err(e) => {
            tracing::warn!("Skipping {}: {e}", upload.file_name);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use docx_rs::{Docx, Paragraph, Run};

    use super::*;
    use crate::analysis::tagger::LexicalTagger;

    fn docx_upload(file_name: &str, lines: &[&str]) -> Upload {
        let mut doc = Docx::new();
        for line in lines {
            doc = doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
        }
        let mut cursor = Cursor::new(Vec::new());
        doc.build().pack(&mut cursor).unwrap();
        Upload {
            file_name: file_name.to_string(),
            content: Bytes::from(cursor.into_inner()),
        }
    }

    fn text_upload(file_name: &str, text: &str) -> Upload {
        Upload {
            file_name: file_name.to_string(),
            content: Bytes::from(text.to_string()),
        }
    }

    #[test]
    fn test_txt_upload_is_skipped_without_error() {
        let uploads = vec![text_upload("resume.txt", "Python SQL Docker")];
        let results =
            analyze_uploads(&uploads, "python", "Software Engineer", &LexicalTagger).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_malformed_document_is_skipped() {
        let uploads = vec![text_upload("broken.docx", "not a zip")];
        let results =
            analyze_uploads(&uploads, "python", "Software Engineer", &LexicalTagger).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_docx_upload_is_analysed_with_report() {
        let uploads = vec![docx_upload(
            "jane.docx",
            &["Skills", "Python, Docker, Git", "Projects on github"],
        )];
        let results =
            analyze_uploads(&uploads, "python docker", "Software Engineer", &LexicalTagger)
                .unwrap();

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.file_name, "jane.docx");
        assert_eq!(result.report_file_name, "jane.docx_analysis.pdf");
        assert_eq!(result.analysis.matched_skills.len(), 3);
        assert!(result.report_pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_uploads_keep_order_and_skip_unreadable_ones() {
        let uploads = vec![
            docx_upload("b.docx", &["Python"]),
            text_upload("notes.txt", "Python"),
            docx_upload("a.docx", &["SQL"]),
        ];
        let results =
            analyze_uploads(&uploads, "", "Data Scientist", &LexicalTagger).unwrap();

        let names: Vec<_> = results.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.docx", "a.docx"]);
        assert!(results.iter().all(|r| r.analysis.job_match_score == 0.0));
    }

    #[test]
    fn test_empty_docx_is_skipped() {
        let uploads = vec![docx_upload("blank.docx", &["", "   "])];
        let results = analyze_uploads(&uploads, "python", "Marketing", &LexicalTagger).unwrap();
        assert!(results.is_empty());
    }
}
