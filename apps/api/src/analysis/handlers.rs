//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::catalog::{catalog, is_known_role, RoleSkills};
use crate::analysis::pipeline::{analyze_uploads, FileAnalysis, Upload};
use crate::analysis::tagger::SkillTagger;
use crate::analysis::AnalysisResult;
use crate::errors::AppError;
use crate::report::{generate_report, report_file_name, REPORT_MIME};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields collected from a multipart analysis submission.
#[derive(Debug, Default)]
pub struct AnalysisForm {
    pub uploads: Vec<Upload>,
    pub job_description: String,
    pub job_role: Option<String>,
}

impl AnalysisForm {
    /// Reads every part of the form. File parts are kept in the order sent.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = AnalysisForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);

            match (name.as_str(), file_name) {
                ("files" | "file", Some(file_name)) => {
                    let content = field.bytes().await?;
                    // Browsers send an empty part when no file was picked.
                    if file_name.is_empty() && content.is_empty() {
                        continue;
                    }
                    form.uploads.push(Upload { file_name, content });
                }
                ("job_description", _) => form.job_description = field.text().await?,
                ("job_role", _) => form.job_role = Some(field.text().await?),
                (other, _) => tracing::debug!("Ignoring form field {other:?}"),
            }
        }

        Ok(form)
    }

    /// The selected role, which must be a catalog key.
    pub fn require_role(&self) -> Result<String, AppError> {
        let role = self
            .job_role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| AppError::Validation("job_role is required".to_string()))?;

        if !is_known_role(role) {
            return Err(AppError::Validation(format!("Unknown job_role '{role}'")));
        }
        Ok(role.to_string())
    }
}

/// Runs the per-upload pipeline off the async runtime.
pub async fn run_analysis(
    uploads: Vec<Upload>,
    job_description: String,
    job_role: String,
    tagger: Arc<dyn SkillTagger>,
) -> Result<Vec<FileAnalysis>, AppError> {
    let results = tokio::task::spawn_blocking(move || {
        analyze_uploads(&uploads, &job_description, &job_role, tagger.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::Error::new(e)))??;

    Ok(results)
}

#[derive(Debug, Serialize)]
pub struct FileAnalysisResponse {
    #[serde(flatten)]
    pub file: FileAnalysis,
    pub report_mime: &'static str,
    pub report_pdf_base64: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub request_id: Uuid,
    pub job_role: String,
    pub tagger: String,
    pub generated_at: DateTime<Utc>,
    /// One entry per upload that yielded text, in upload order.
    pub analyses: Vec<FileAnalysisResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub file_name: String,
    pub job_role: String,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<Vec<RoleSkills>> {
    Json(catalog())
}

/// POST /api/v1/analyze
///
/// Multipart: `files` (repeated), `job_description`, `job_role`.
/// Uploads without extractable text are left out of `analyses`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = AnalysisForm::from_multipart(multipart).await?;
    let job_role = form.require_role()?;
    let request_id = Uuid::new_v4();

    tracing::info!(
        "Analysis {request_id}: {} upload(s) for role {job_role:?}",
        form.uploads.len()
    );

    let results = run_analysis(
        form.uploads,
        form.job_description,
        job_role.clone(),
        state.tagger.clone(),
    )
    .await?;

    let analyses = results
        .into_iter()
        .map(|file| FileAnalysisResponse {
            report_mime: REPORT_MIME,
            report_pdf_base64: STANDARD.encode(&file.report_pdf),
            file,
        })
        .collect();

    Ok(Json(AnalyzeResponse {
        request_id,
        job_role,
        tagger: state.tagger.name().to_string(),
        generated_at: Utc::now(),
        analyses,
    }))
}

/// POST /api/v1/report
///
/// Renders a previously computed analysis as a PDF download.
pub async fn handle_report(Json(request): Json<ReportRequest>) -> Result<Response, AppError> {
    if request.file_name.trim().is_empty() {
        return Err(AppError::Validation("file_name cannot be empty".to_string()));
    }
    if !is_known_role(&request.job_role) {
        return Err(AppError::Validation(format!(
            "Unknown job_role '{}'",
            request.job_role
        )));
    }
    for (field, score) in [
        ("skill_match_score", request.analysis.skill_match_score),
        ("job_match_score", request.analysis.job_match_score),
    ] {
        if !(0.0..=100.0).contains(&score) {
            return Err(AppError::Validation(format!(
                "{field} must be between 0 and 100"
            )));
        }
    }

    let pdf = generate_report(&request.job_role, &request.analysis)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe(&report_file_name(&request.file_name))
    );

    Ok((
        [
            (header::CONTENT_TYPE, REPORT_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}

/// Keeps a file name usable inside a quoted header parameter.
fn header_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_role_accepts_catalog_role() {
        let form = AnalysisForm {
            job_role: Some(" Data Scientist ".to_string()),
            ..Default::default()
        };
        assert_eq!(form.require_role().unwrap(), "Data Scientist");
    }

    #[test]
    fn test_require_role_rejects_missing_and_unknown() {
        let missing = AnalysisForm::default();
        assert!(matches!(missing.require_role(), Err(AppError::Validation(_))));

        let unknown = AnalysisForm {
            job_role: Some("Astronaut".to_string()),
            ..Default::default()
        };
        assert!(matches!(unknown.require_role(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_header_safe_replaces_quotes_and_non_ascii() {
        assert_eq!(header_safe("my \"cv\".pdf"), "my _cv_.pdf");
        assert_eq!(header_safe("résumé.pdf"), "r_sum_.pdf");
    }
}
