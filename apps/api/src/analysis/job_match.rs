//! Job-description overlap.
//!
//! A coarse bag-of-words measure, not semantic matching: both texts are
//! lower-cased and split on whitespace, punctuation stays attached to words.

use std::collections::HashSet;

use crate::analysis::skills::percentage;

/// Share of the job description's distinct words that also occur in the résumé.
pub fn job_match_percentage(resume_text: &str, job_description: &str) -> f64 {
    let resume_words = word_set(resume_text);
    let job_words = word_set(job_description);

    let shared = job_words.intersection(&resume_words).count();
    percentage(shared, job_words.len())
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
