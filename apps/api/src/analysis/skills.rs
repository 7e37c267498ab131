//! Skill matching against the role catalog.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::analysis::catalog::skills_for;
use crate::analysis::tagger::SkillTagger;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillMatch {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    /// matched / catalog size × 100; 0 when the role has no catalog skills.
    pub score: f64,
}

/// Intersects the tagger's terms with the role's catalog skills.
pub fn match_skills(resume_text: &str, job_role: &str, tagger: &dyn SkillTagger) -> SkillMatch {
    let role_skills = skills_for(job_role);
    if role_skills.is_empty() {
        tracing::debug!("Role {job_role:?} has no catalog skills");
        return SkillMatch {
            matched: BTreeSet::new(),
            missing: BTreeSet::new(),
            score: 0.0,
        };
    }

    let terms = tagger.significant_terms(resume_text);

    let (matched, missing): (BTreeSet<String>, BTreeSet<String>) = role_skills
        .iter()
        .map(|skill| skill.to_string())
        .partition(|skill| terms.contains(skill));

    let score = percentage(matched.len(), role_skills.len());

    SkillMatch {
        matched,
        missing,
        score,
    }
}

/// `part / whole × 100`, clamped to [0, 100]; 0 for an empty whole.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tagger::LexicalTagger;

    #[test]
    fn test_resume_listing_full_catalog_scores_100() {
        let resume = "Python, Java, C++, Machine Learning, Git, SQL, Docker, Kubernetes, \
                      JavaScript, React, Node.js";
        let result = match_skills(resume, "Software Engineer", &LexicalTagger);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.matched.len(), 11);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let resume = "Barista with latte art and customer service background";
        let result = match_skills(resume, "Cybersecurity Analyst", &LexicalTagger);
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing.len(), 6);
    }

    #[test]
    fn test_partial_match_splits_matched_and_missing() {
        let resume = "Built dashboards in Python and SQL";
        let result = match_skills(resume, "Data Scientist", &LexicalTagger);
        assert_eq!(
            result.matched,
            BTreeSet::from(["Python".to_string(), "SQL".to_string()])
        );
        assert_eq!(result.missing.len(), 8);
        assert!((result.score - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let result = match_skills("python sql docker", "Software Engineer", &LexicalTagger);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_unknown_role_scores_zero() {
        let result = match_skills("Python SQL", "Astronaut", &LexicalTagger);
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 3), 100.0);
        assert!((percentage(2, 3) - 66.666_666).abs() < 0.001);
    }
}
