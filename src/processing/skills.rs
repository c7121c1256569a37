//! Skill alias normalization

use std::collections::{HashMap, HashSet};

/// Maps well-known skill abbreviations and variants to canonical display
/// names. Lookup is on the lowercased, trimmed form; keywords without an
/// alias entry pass through in their original form.
pub struct SkillNormalizer {
    aliases: HashMap<&'static str, &'static str>,
}

impl Default for SkillNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillNormalizer {
    pub fn new() -> Self {
        Self {
            aliases: SKILL_ALIASES.iter().copied().collect(),
        }
    }

    /// Canonical form of a single keyword, if it has one.
    pub fn canonical(&self, keyword: &str) -> Option<&'static str> {
        self.aliases.get(keyword.to_lowercase().trim()).copied()
    }

    /// Normalize a set of keywords, deduplicating on the way out.
    ///
    /// Alias hits emit the canonical name; misses emit the original keyword
    /// untouched, original casing and all.
    pub fn normalize<I>(&self, keywords: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();
        for keyword in keywords {
            let output = match self.canonical(&keyword) {
                Some(canonical) => canonical.to_string(),
                None => keyword,
            };
            if seen.insert(output.clone()) {
                normalized.push(output);
            }
        }
        normalized
    }
}

const SKILL_ALIASES: &[(&str, &str)] = &[
    ("react.js", "React"),
    ("reactjs", "React"),
    ("node.js", "Node.js"),
    ("nodejs", "Node.js"),
    ("aws", "Amazon Web Services"),
    ("gcp", "Google Cloud Platform"),
    ("html5", "HTML"),
    ("css3", "CSS"),
    ("js", "JavaScript"),
    ("mongo", "MongoDB"),
    ("postgress", "PostgreSQL"),
    ("sql", "SQL"),
    ("docker", "Docker"),
    ("k8s", "Kubernetes"),
    ("ci/cd", "CI/CD"),
    ("ci / cd", "CI/CD"),
    ("dev ops", "DevOps"),
    ("quality assurance", "QA"),
    ("qa", "QA"),
    ("machine learning", "Machine Learning"),
    ("ml", "Machine Learning"),
    ("software engineering", "Software Engineering"),
];
