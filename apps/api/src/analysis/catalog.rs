//! Static skill catalog — the canonical skills expected for each supported role.

use std::collections::BTreeSet;

use serde::Serialize;

/// Role name → canonical skills. Order is the order roles are offered in the UI.
const SKILL_CATALOG: &[(&str, &[&str])] = &[
    (
        "Software Engineer",
        &[
            "Python",
            "Java",
            "C++",
            "Machine Learning",
            "Git",
            "SQL",
            "Docker",
            "Kubernetes",
            "JavaScript",
            "React",
            "Node.js",
        ],
    ),
    (
        "Data Scientist",
        &[
            "Pandas",
            "NumPy",
            "Deep Learning",
            "Statistics",
            "Python",
            "R",
            "TensorFlow",
            "PyTorch",
            "SQL",
            "Data Visualization",
        ],
    ),
    (
        "Marketing",
        &[
            "SEO",
            "Google Ads",
            "Content Writing",
            "Social Media",
            "Branding",
            "Google Analytics",
            "Copywriting",
            "Email Marketing",
        ],
    ),
    (
        "UI/UX Designer",
        &[
            "Figma",
            "Adobe XD",
            "Wireframing",
            "User Research",
            "Sketch",
            "Prototyping",
            "Design Thinking",
        ],
    ),
    (
        "Cybersecurity Analyst",
        &[
            "Network Security",
            "Ethical Hacking",
            "Cryptography",
            "Firewalls",
            "Incident Response",
            "Penetration Testing",
        ],
    ),
];

/// One catalog row as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct RoleSkills {
    pub role: &'static str,
    pub skills: Vec<&'static str>,
}

/// Role names in catalog order.
pub fn role_names() -> impl Iterator<Item = &'static str> {
    SKILL_CATALOG.iter().map(|(role, _)| *role)
}

pub fn is_known_role(role: &str) -> bool {
    SKILL_CATALOG.iter().any(|(name, _)| *name == role)
}

/// Canonical skills for `role`. Unknown roles have no skills.
pub fn skills_for(role: &str) -> BTreeSet<&'static str> {
    SKILL_CATALOG
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, skills)| skills.iter().copied().collect())
        .unwrap_or_default()
}

pub fn catalog() -> Vec<RoleSkills> {
    SKILL_CATALOG
        .iter()
        .map(|(role, skills)| RoleSkills {
            role,
            skills: skills.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_in_catalog_order() {
        let roles: Vec<_> = role_names().collect();
        assert_eq!(
            roles,
            vec![
                "Software Engineer",
                "Data Scientist",
                "Marketing",
                "UI/UX Designer",
                "Cybersecurity Analyst"
            ]
        );
    }

    #[test]
    fn test_skills_for_known_role() {
        let skills = skills_for("Software Engineer");
        assert_eq!(skills.len(), 11);
        assert!(skills.contains("Node.js"));
        assert!(skills.contains("C++"));
    }

    #[test]
    fn test_unknown_role_has_no_skills() {
        assert!(skills_for("Astronaut").is_empty());
        assert!(!is_known_role("Astronaut"));
    }

    #[test]
    fn test_role_lookup_is_case_sensitive() {
        assert!(!is_known_role("software engineer"));
    }

    #[test]
    fn test_catalog_has_no_duplicate_skills_per_role() {
        for row in catalog() {
            let unique: BTreeSet<_> = row.skills.iter().collect();
            assert_eq!(unique.len(), row.skills.len(), "duplicates in {}", row.role);
        }
    }
}
