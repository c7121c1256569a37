//! Resume quality heuristics
//!
//! Seven independent sub-scorers, each a pure function of the resume text
//! with a bounded score and a feedback line. The maxima sum to exactly 100
//! (25+20+15+10+5+10+15); the aggregator adds them up without rebalancing.

use crate::processing::spelling::SpellChecker;
use crate::processing::text_processor::word_count;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Score and feedback from a single sub-scorer.
#[derive(Debug, Clone)]
pub struct SubScore {
    pub score: u32,
    pub feedback: String,
}

/// Action-verb sub-score, which also carries the matched verbs.
#[derive(Debug, Clone)]
pub struct ActionVerbScore {
    pub score: u32,
    pub found_verbs: Vec<String>,
    pub feedback: String,
}

/// Aggregated quality report across all seven sub-scorers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_score: u32,
    pub details: BTreeMap<String, u32>,
    pub feedback: BTreeMap<String, String>,
    pub found_action_verbs: Vec<String>,
}

/// Past-tense achievement verbs that signal impact on a resume.
pub const ACTION_VERBS: &[&str] = &[
    "created", "developed", "led", "managed", "optimized", "streamlined", "implemented",
    "architected", "designed", "engineered", "built", "launched", "drove", "increased",
    "decreased", "reduced", "grew", "improved", "achieved", "negotiated", "mentored", "authored",
    "budgeted", "consulted", "directed", "facilitated", "founded", "governed", "headed", "hired",
    "hosted", "initiated", "inspired", "instituted", "instructed", "interviewed", "judged",
    "lectured", "lobbied", "mediated", "moderated", "motivated", "navigated", "organized",
    "oversaw", "pioneered", "presided", "produced", "programmed", "promoted", "publicized",
    "recruited", "regulated", "retained", "revamped", "revitalized", "saved", "scheduled",
    "secured", "selected", "supervised", "taught", "trained", "unified", "united", "updated",
    "upgraded", "validated", "verified", "won", "wrote",
];

const BUZZWORDS: &[&str] = &[
    "synergy", "go-getter", "results-driven", "team player", "hard worker", "proactive",
    "self-starter", "detail-oriented", "think outside the box",
];

/// Count distinct action verbs among the whitespace tokens of the text.
///
/// Standalone so the match scorer can reuse it without dragging in the
/// rest of the quality machinery.
pub fn score_action_verbs(text: &str) -> ActionVerbScore {
    let vocabulary: HashSet<&str> = ACTION_VERBS.iter().copied().collect();
    let lowered = text.to_lowercase();
    let found: HashSet<&str> = lowered
        .split_whitespace()
        .filter(|word| vocabulary.contains(word))
        .collect();

    let count = found.len();
    let score = match count {
        n if n >= 15 => 20,
        n if n >= 10 => 15,
        n if n >= 5 => 10,
        _ => 0,
    };

    let feedback = if count > 0 {
        format!("You used {} strong action verbs. Keep it up!", count)
    } else {
        "Start bullet points with strong action verbs like 'Managed' or 'Developed'.".to_string()
    };

    let mut found_verbs: Vec<String> = found.into_iter().map(String::from).collect();
    found_verbs.sort();

    ActionVerbScore {
        score,
        found_verbs,
        feedback,
    }
}

/// Runs the seven quality sub-scorers and assembles the report.
pub struct QualityChecker {
    metric_regex: Regex,
    experience_regex: Regex,
    education_regex: Regex,
    skills_regex: Regex,
    email_regex: Regex,
    phone_regex: Regex,
    spell_checker: SpellChecker,
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityChecker {
    pub fn new() -> Self {
        Self::with_spell_checker(SpellChecker::new())
    }

    pub fn with_spell_checker(spell_checker: SpellChecker) -> Self {
        Self {
            metric_regex: Regex::new(r"\d+|%|\$").expect("Invalid metric regex"),
            experience_regex: Regex::new(r"experience|employment|history")
                .expect("Invalid experience regex"),
            education_regex: Regex::new(r"education|academic").expect("Invalid education regex"),
            skills_regex: Regex::new(r"skills|abilities").expect("Invalid skills regex"),
            email_regex: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("Invalid email regex"),
            phone_regex: Regex::new(r"(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}")
                .expect("Invalid phone regex"),
            spell_checker,
        }
    }

    /// Quantifiable impact: digit runs, percent signs, dollar signs. Max 25.
    pub fn score_quantification(&self, text: &str) -> SubScore {
        let count = self.metric_regex.find_iter(text).count();
        let (score, feedback) = if count >= 8 {
            (25, format!("Excellent! You've used {} quantifiable metrics.", count))
        } else if count >= 4 {
            (15, format!("Good job using {} metrics. Aim for more.", count))
        } else if count >= 1 {
            (8, format!("A good start with {} metric(s). Add more numbers.", count))
        } else {
            (0, "Try to add quantifiable results (e.g., 'Increased sales by 20%').".to_string())
        };
        SubScore { score, feedback }
    }

    /// Resume length band by whitespace word count. Max 15.
    pub fn score_readability(&self, text: &str) -> SubScore {
        let words = word_count(text);
        let (score, feedback) = if (400..=700).contains(&words) {
            (15, format!("Word count of {} is in the ideal range.", words))
        } else if (250..400).contains(&words) || (701..=850).contains(&words) {
            (8, format!("Word count of {} is a bit short/long.", words))
        } else {
            (0, format!("Word count of {} is outside the recommended range.", words))
        };
        SubScore { score, feedback }
    }

    /// Presence of the experience/education/skills sections. Max 10.
    pub fn score_sections(&self, text: &str) -> SubScore {
        let lowered = text.to_lowercase();
        let mut score = 0;
        let mut found_sections = Vec::new();

        if self.experience_regex.is_match(&lowered) {
            score += 4;
            found_sections.push("Experience");
        }
        if self.education_regex.is_match(&lowered) {
            score += 3;
            found_sections.push("Education");
        }
        if self.skills_regex.is_match(&lowered) {
            score += 3;
            found_sections.push("Skills");
        }

        let feedback = if score > 0 {
            format!(
                "Great! You have these essential sections: {}.",
                found_sections.join(", ")
            )
        } else {
            "Consider adding standard sections like 'Experience', 'Education', and 'Skills'."
                .to_string()
        };
        SubScore { score, feedback }
    }

    /// Buzzword penalty: one point off per distinct buzzword token. Max 5.
    pub fn score_buzzwords(&self, text: &str) -> SubScore {
        let vocabulary: HashSet<&str> = BUZZWORDS.iter().copied().collect();
        let lowered = text.to_lowercase();
        let mut found: Vec<&str> = lowered
            .split_whitespace()
            .filter(|word| vocabulary.contains(word))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        found.sort();

        let score = 5u32.saturating_sub(found.len() as u32);
        let feedback = if found.is_empty() {
            "Excellent! No common buzzwords found.".to_string()
        } else {
            format!("Consider replacing buzzwords like '{}'.", found.join(", "))
        };
        SubScore { score, feedback }
    }

    /// Email and phone presence, five points each. Max 10.
    pub fn score_contact_info(&self, text: &str) -> SubScore {
        let mut score = 0;
        let mut feedback_items = Vec::new();

        if self.email_regex.is_match(text) {
            score += 5;
            feedback_items.push("Email found");
        } else {
            feedback_items.push("Email not found");
        }
        if self.phone_regex.is_match(text) {
            score += 5;
            feedback_items.push("Phone number found");
        } else {
            feedback_items.push("Phone number not found");
        }

        let feedback = if score == 10 {
            "Excellent! Contact information is present.".to_string()
        } else {
            format!("{}.", feedback_items.join(" | "))
        };
        SubScore { score, feedback }
    }

    /// Unknown-word count against the configured dictionary. Max 15.
    pub fn score_spelling(&self, text: &str) -> SubScore {
        let unknown = self.spell_checker.unknown_words(text);
        let error_count = unknown.len();

        let (score, feedback) = if error_count == 0 {
            (15, "Excellent! No spelling errors were found.".to_string())
        } else if error_count <= 2 {
            (10, format!(
                "Found {} potential spelling error(s). Please review: {}.",
                error_count,
                self.format_examples(&unknown)
            ))
        } else if error_count <= 5 {
            (5, format!(
                "Found {} potential spelling errors. Please proofread carefully.",
                error_count
            ))
        } else {
            (0, "Found over 5 potential spelling errors. It's highly recommended to proofread your resume.".to_string())
        };
        SubScore { score, feedback }
    }

    fn format_examples(&self, unknown: &[String]) -> String {
        unknown
            .iter()
            .take(2)
            .map(|word| match self.spell_checker.suggest(word) {
                Some(suggestion) => format!("{} (try '{}')", word, suggestion),
                None => word.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Run all seven sub-scorers and sum them up.
    pub fn check(&self, resume_text: &str) -> QualityReport {
        let verbs = score_action_verbs(resume_text);

        let scores: [(&str, SubScore); 7] = [
            ("impact_and_quantification", self.score_quantification(resume_text)),
            (
                "action_verbs",
                SubScore {
                    score: verbs.score,
                    feedback: verbs.feedback.clone(),
                },
            ),
            ("readability", self.score_readability(resume_text)),
            ("essential_sections", self.score_sections(resume_text)),
            ("clarity_and_brevity", self.score_buzzwords(resume_text)),
            ("contact_information", self.score_contact_info(resume_text)),
            ("spelling", self.score_spelling(resume_text)),
        ];

        let total_score = scores.iter().map(|(_, s)| s.score).sum();
        let mut details = BTreeMap::new();
        let mut feedback = BTreeMap::new();
        for (name, sub) in scores {
            details.insert(name.to_string(), sub.score);
            feedback.insert(name.to_string(), sub.feedback);
        }

        QualityReport {
            total_score,
            details,
            feedback,
            found_action_verbs: verbs.found_verbs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> QualityChecker {
        QualityChecker::new()
    }

    #[test]
    fn test_quantification_bands() {
        let c = checker();
        assert_eq!(c.score_quantification("").score, 0);
        assert_eq!(c.score_quantification("increased sales 20%").score, 8);
        assert_eq!(c.score_quantification("1 2 3 4").score, 15);
        assert_eq!(c.score_quantification("1 2 3 4 5 6 7 8").score, 25);
    }

    #[test]
    fn test_quantification_counts_each_marker() {
        let c = checker();
        // "$5" is a dollar sign plus a digit run: two matches
        assert_eq!(c.score_quantification("$5").score, 8);
        assert_eq!(c.score_quantification("$5 $6 %7 %8").score, 25);
    }

    #[test]
    fn test_action_verb_bands() {
        assert_eq!(score_action_verbs("").score, 0);
        // 3 distinct verbs: below the first band
        assert_eq!(score_action_verbs("created developed led").score, 0);
        // 5 distinct verbs
        assert_eq!(score_action_verbs("created developed led managed built").score, 10);
        let ten = "created developed led managed built launched designed improved saved wrote";
        assert_eq!(score_action_verbs(ten).score, 15);
        let fifteen = format!("{} trained mentored hired founded won", ten);
        assert_eq!(score_action_verbs(&fifteen).score, 20);
    }

    #[test]
    fn test_action_verbs_are_distinct_and_sorted() {
        let result = score_action_verbs("led led led wrote built");
        assert_eq!(result.found_verbs, vec!["built", "led", "wrote"]);
    }

    #[test]
    fn test_readability_bands() {
        let c = checker();
        let words = |n: usize| vec!["word"; n].join(" ");
        assert_eq!(c.score_readability(&words(500)).score, 15);
        assert_eq!(c.score_readability(&words(400)).score, 15);
        assert_eq!(c.score_readability(&words(700)).score, 15);
        assert_eq!(c.score_readability(&words(300)).score, 8);
        assert_eq!(c.score_readability(&words(800)).score, 8);
        assert_eq!(c.score_readability(&words(100)).score, 0);
        assert_eq!(c.score_readability(&words(900)).score, 0);
        assert_eq!(c.score_readability("").score, 0);
    }

    #[test]
    fn test_sections_scoring() {
        let c = checker();
        assert_eq!(c.score_sections("").score, 0);
        assert_eq!(c.score_sections("Work Experience").score, 4);
        assert_eq!(c.score_sections("Education").score, 3);
        assert_eq!(c.score_sections("Skills").score, 3);
        let all = "Experience Education Skills";
        let sub = c.score_sections(all);
        assert_eq!(sub.score, 10);
        assert!(sub.feedback.contains("Experience"));
        assert!(sub.feedback.contains("Education"));
        assert!(sub.feedback.contains("Skills"));
    }

    #[test]
    fn test_buzzword_penalty() {
        let c = checker();
        assert_eq!(c.score_buzzwords("clean text").score, 5);
        assert_eq!(c.score_buzzwords("proactive synergy").score, 3);
        // repeated buzzwords count once
        assert_eq!(c.score_buzzwords("synergy synergy synergy").score, 4);
    }

    #[test]
    fn test_contact_info() {
        let c = checker();
        assert_eq!(c.score_contact_info("").score, 0);
        let email_only = c.score_contact_info("Reach me at jane.doe@example.com");
        assert_eq!(email_only.score, 5);
        assert!(email_only.feedback.contains("Email found"));
        assert!(email_only.feedback.contains("Phone number not found"));
        let both = c.score_contact_info("jane.doe@example.com (555) 123-4567");
        assert_eq!(both.score, 10);
    }

    #[test]
    fn test_spelling_bands() {
        let c = checker();
        assert_eq!(c.score_spelling("developed software projects").score, 15);
        let one = c.score_spelling("develloped software projects");
        assert_eq!(one.score, 10);
        assert!(one.feedback.contains("develloped"));
        assert_eq!(c.score_spelling("aaz bbz ccz").score, 5);
        assert_eq!(c.score_spelling("aaz bbz ccz ddz eez ffz").score, 0);
    }

    #[test]
    fn test_check_empty_resume() {
        let report = checker().check("");

        assert_eq!(report.details["impact_and_quantification"], 0);
        assert_eq!(report.details["action_verbs"], 0);
        assert_eq!(report.details["readability"], 0);
        assert_eq!(report.details["essential_sections"], 0);
        assert_eq!(report.details["clarity_and_brevity"], 5);
        assert_eq!(report.details["contact_information"], 0);
        assert_eq!(report.details["spelling"], 15);
        assert_eq!(report.total_score, 20);
        assert!(report.found_action_verbs.is_empty());
    }

    #[test]
    fn test_check_scores_stay_in_bounds() {
        let c = checker();
        let texts = [
            "",
            "short",
            "led managed built created developed launched wrote taught trained won",
            "jane@example.com 555-123-4567 Experience Education Skills 20% $90,000",
        ];
        for text in texts {
            let report = c.check(text);
            assert!(report.details["impact_and_quantification"] <= 25);
            assert!(report.details["action_verbs"] <= 20);
            assert!(report.details["readability"] <= 15);
            assert!(report.details["essential_sections"] <= 10);
            assert!(report.details["clarity_and_brevity"] <= 5);
            assert!(report.details["contact_information"] <= 10);
            assert!(report.details["spelling"] <= 15);
            assert!(report.total_score <= 100);
        }
    }

    #[test]
    fn test_report_has_all_seven_dimensions() {
        let report = checker().check("any text");
        assert_eq!(report.details.len(), 7);
        assert_eq!(report.feedback.len(), 7);
        for key in [
            "impact_and_quantification",
            "action_verbs",
            "readability",
            "essential_sections",
            "clarity_and_brevity",
            "contact_information",
            "spelling",
        ] {
            assert!(report.details.contains_key(key));
            assert!(report.feedback.contains_key(key));
        }
    }
}
