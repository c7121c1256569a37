//! Weighted keyword match scoring against resume text

use crate::processing::keyword_extractor::{CategorizedKeywords, Category};
use crate::processing::quality;
use serde::{Deserialize, Serialize};

/// Per-category weights for the match percentage.
pub const fn category_weight(category: Category) -> u32 {
    match category {
        Category::Mandatory => 3,
        Category::Normal => 2,
        Category::Bonus => 1,
    }
}

/// Result of matching categorized keywords against a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub score: u32,
    pub found_action_verbs: Vec<String>,
}

pub struct MatchScorer;

impl MatchScorer {
    /// Score a resume against categorized job-description keywords.
    ///
    /// A keyword counts as found when its lowercased form occurs as a
    /// substring of the lowercased resume text. Deliberately naive: the
    /// category weights were tuned against plain containment, so no
    /// stemming or fuzzy matching happens here. With no keywords at all
    /// the score is defined as 0.
    pub fn score(&self, resume_text: &str, keywords: &CategorizedKeywords) -> MatchReport {
        let resume_lower = resume_text.to_lowercase();

        let mut found = Vec::new();
        let mut missing = Vec::new();
        let mut user_score: u32 = 0;
        let mut total_possible: u32 = 0;

        for category in Category::ALL {
            let weight = category_weight(category);
            let category_keywords = keywords.get(category);
            total_possible += weight * category_keywords.len() as u32;

            for keyword in category_keywords {
                if resume_lower.contains(&keyword.to_lowercase()) {
                    found.push(keyword.clone());
                    user_score += weight;
                } else {
                    missing.push(keyword.clone());
                }
            }
        }

        let score = if total_possible > 0 {
            (100.0 * f64::from(user_score) / f64::from(total_possible)).round() as u32
        } else {
            0
        };

        found.sort();
        missing.sort();

        let verbs = quality::score_action_verbs(resume_text);
        let mut found_action_verbs: Vec<String> = verbs.found_verbs.into_iter().collect();
        found_action_verbs.sort();

        MatchReport {
            found,
            missing,
            score,
            found_action_verbs,
        }
    }
}
