//! Résumé structure check: which standard sections have no keyword anywhere
//! in the text.

/// Section name → keywords that indicate it. Order is the reporting order.
const SECTION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Education",
        &["education", "degree", "bachelor", "master", "university"],
    ),
    ("Experience", &["experience", "internship", "company", "work"]),
    ("Skills", &["skills", "technologies", "expertise"]),
    ("Certifications", &["certification", "course", "training"]),
    ("Projects", &["projects", "portfolio", "github"]),
];

/// Returns the sections with no keyword hit, in catalog order.
///
/// Matching is plain substring containment on the lower-cased text, so
/// "network" counts for Experience and "masters" for Education.
pub fn missing_sections(resume_text: &str) -> Vec<String> {
    let lower = resume_text.to_lowercase();

    SECTION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| !keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(section, _)| section.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume_misses_every_section_in_order() {
        assert_eq!(
            missing_sections("Jane Doe, jane@example.com"),
            vec!["Education", "Experience", "Skills", "Certifications", "Projects"]
        );
    }

    #[test]
    fn test_complete_resume_misses_nothing() {
        let resume = "EDUCATION\nBachelor of Science\nEXPERIENCE\nAcme Company\n\
                      SKILLS\nRust\nCERTIFICATIONS\nAWS Certification\nPROJECTS\ngithub.com/jane";
        assert!(missing_sections(resume).is_empty());
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        let missing = missing_sections("Completed a Masters at the University; online Courses");
        assert_eq!(missing, vec!["Experience", "Skills", "Projects"]);
    }

    #[test]
    fn test_substring_inside_other_words_counts() {
        // "network" contains "work"
        let missing = missing_sections("network");
        assert!(!missing.contains(&"Experience".to_string()));
    }
}
