//! Browser front end: an upload form and a results page, server-rendered.
//!
//! Mirrors the JSON API but follows the form's conventions: nothing is
//! analysed until at least one file and a job description are present, and
//! problems are shown as a notice above the form instead of a JSON error.

pub mod page;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};

use crate::analysis::handlers::{run_analysis, AnalysisForm};
use crate::errors::AppError;
use crate::shell::page::{render_page, FormState};
use crate::state::AppState;

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&FormState::default(), &[]))
}

/// POST /analyze
pub async fn handle_analyze_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Html<String>), AppError> {
    let form = AnalysisForm::from_multipart(multipart).await?;

    let job_role = match form.require_role() {
        Ok(role) => role,
        Err(AppError::Validation(message)) => {
            let page = render_page(
                &FormState {
                    job_description: &form.job_description,
                    job_role: None,
                    notice: Some(message.as_str()),
                },
                &[],
            );
            return Ok((StatusCode::BAD_REQUEST, Html(page)));
        }
        Err(e) => return Err(e),
    };

    let notice = if form.uploads.is_empty() {
        Some("Upload at least one PDF or DOCX resume.")
    } else if form.job_description.is_empty() {
        Some("Paste the job description to run the analysis.")
    } else {
        None
    };

    if let Some(notice) = notice {
        let page = render_page(
            &FormState {
                job_description: &form.job_description,
                job_role: Some(job_role.as_str()),
                notice: Some(notice),
            },
            &[],
        );
        return Ok((StatusCode::OK, Html(page)));
    }

    let job_description = form.job_description.clone();
    let results = run_analysis(
        form.uploads,
        form.job_description,
        job_role.clone(),
        state.tagger.clone(),
    )
    .await?;

    let page = render_page(
        &FormState {
            job_description: &job_description,
            job_role: Some(job_role.as_str()),
            notice: None,
        },
        &results,
    );
    Ok((StatusCode::OK, Html(page)))
}
