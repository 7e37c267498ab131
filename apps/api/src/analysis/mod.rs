// Résumé analysis: skill matching, job-description overlap, structure check,
// and the per-upload pipeline that ties them to extraction and reporting.

pub mod catalog;
pub mod format_check;
pub mod handlers;
pub mod job_match;
pub mod pipeline;
pub mod skills;
pub mod tagger;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::format_check::missing_sections;
use crate::analysis::job_match::job_match_percentage;
use crate::analysis::skills::match_skills;
use crate::analysis::tagger::SkillTagger;

/// Everything computed for one résumé. Built once per upload, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    /// 0 – 100
    pub skill_match_score: f64,
    /// 0 – 100
    pub job_match_score: f64,
    /// Section names in catalog order.
    pub missing_sections: Vec<String>,
}

impl AnalysisResult {
    pub fn is_well_structured(&self) -> bool {
        self.missing_sections.is_empty()
    }
}

/// Runs the three text checks over already-extracted résumé text.
pub fn analyze_resume(
    resume_text: &str,
    job_description: &str,
    job_role: &str,
    tagger: &dyn SkillTagger,
) -> AnalysisResult {
    let skills = match_skills(resume_text, job_role, tagger);

    AnalysisResult {
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        skill_match_score: skills.score,
        job_match_score: job_match_percentage(resume_text, job_description),
        missing_sections: missing_sections(resume_text),
    }
}

/// Comma-joined list, or "None" when empty. Shared by the report and the UI.
pub fn join_or_none<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}
