//! Job-description keyword extraction and categorization
//!
//! Sentences are classified by trigger phrases (mandatory beats bonus, the
//! rest is normal), then mined for noun tokens and stop-word-filtered noun
//! chunks. Trigger detection is plain substring search over the lowercased
//! sentence, not token-boundary-aware; the scoring weights downstream were
//! tuned against exactly this matching behavior.

use crate::processing::annotator::{Annotator, RuleBasedAnnotator};
use crate::processing::skills::SkillNormalizer;
use crate::processing::text_processor::split_sentences;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Keyword category, assigned per sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mandatory,
    Normal,
    Bonus,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Mandatory, Category::Normal, Category::Bonus];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mandatory => "mandatory",
            Category::Normal => "normal",
            Category::Bonus => "bonus",
        }
    }
}

/// Canonical keywords per category, sorted for stable output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorizedKeywords {
    pub mandatory: Vec<String>,
    pub normal: Vec<String>,
    pub bonus: Vec<String>,
}

impl CategorizedKeywords {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Mandatory => &self.mandatory,
            Category::Normal => &self.normal,
            Category::Bonus => &self.bonus,
        }
    }

    pub fn total_keywords(&self) -> usize {
        self.mandatory.len() + self.normal.len() + self.bonus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_keywords() == 0
    }
}

const MANDATORY_TRIGGERS: &[&str] = &["required", "must have", "essential", "core requirement"];
const BONUS_TRIGGERS: &[&str] = &["nice to have", "plus", "bonus", "preferred", "desirable"];

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "in", "on", "for", "of", "with", "to", "and", "or", "but",
    "experience", "team", "candidate", "knowledge", "skills", "skill", "plus",
    "ideal", "strong", "tasks", "duties", "responsibilities", "requirements",
    "proficient", "join", "work", "innovative", "senior", "developer", "our",
    "role", "you", "we",
];

pub struct KeywordExtractor {
    mandatory_triggers: AhoCorasick,
    bonus_triggers: AhoCorasick,
    stop_words: HashSet<&'static str>,
    normalizer: SkillNormalizer,
    annotator: Box<dyn Annotator>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::with_annotator(Box::new(RuleBasedAnnotator::new()))
    }

    /// Build an extractor around a custom annotation backend.
    pub fn with_annotator(annotator: Box<dyn Annotator>) -> Self {
        let mandatory_triggers =
            AhoCorasick::new(MANDATORY_TRIGGERS).expect("Invalid mandatory trigger patterns");
        let bonus_triggers =
            AhoCorasick::new(BONUS_TRIGGERS).expect("Invalid bonus trigger patterns");

        Self {
            mandatory_triggers,
            bonus_triggers,
            stop_words: STOP_WORDS.iter().copied().collect(),
            normalizer: SkillNormalizer::new(),
            annotator,
        }
    }

    /// Extract categorized keywords from a job description.
    ///
    /// An empty or keyword-free description yields three empty lists.
    pub fn extract(&self, job_description: &str) -> CategorizedKeywords {
        let lowered = job_description.to_lowercase();

        let mut mandatory: HashSet<String> = HashSet::new();
        let mut normal: HashSet<String> = HashSet::new();
        let mut bonus: HashSet<String> = HashSet::new();

        for sentence in split_sentences(&lowered) {
            let candidates = self.sentence_candidates(&sentence);
            let target = match self.classify_sentence(&sentence) {
                Category::Mandatory => &mut mandatory,
                Category::Normal => &mut normal,
                Category::Bonus => &mut bonus,
            };
            target.extend(candidates);
        }

        CategorizedKeywords {
            mandatory: self.finalize(mandatory),
            normal: self.finalize(normal),
            bonus: self.finalize(bonus),
        }
    }

    /// Sentence category. Mandatory triggers take priority over bonus ones.
    fn classify_sentence(&self, sentence: &str) -> Category {
        if self.mandatory_triggers.is_match(sentence) {
            Category::Mandatory
        } else if self.bonus_triggers.is_match(sentence) {
            Category::Bonus
        } else {
            Category::Normal
        }
    }

    /// Noun tokens plus stop-word-filtered noun chunks, deduplicated.
    fn sentence_candidates(&self, sentence: &str) -> HashSet<String> {
        let tokens = self.annotator.annotate(sentence);
        let mut candidates: HashSet<String> = tokens
            .iter()
            .filter(|t| t.tag.is_nominal())
            .map(|t| t.text.clone())
            .collect();

        for chunk in self.annotator.noun_chunks(&tokens) {
            let cleaned = chunk
                .iter()
                .filter(|word| !self.stop_words.contains(word.as_str()))
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            if !cleaned.is_empty() {
                candidates.insert(cleaned);
            }
        }

        candidates
    }

    /// Drop stop words and single characters, normalize aliases, sort.
    fn finalize(&self, keywords: HashSet<String>) -> Vec<String> {
        let filtered = keywords
            .into_iter()
            .filter(|kw| !self.stop_words.contains(kw.as_str()) && kw.chars().count() > 1);
        let mut normalized = self.normalizer.normalize(filtered.collect::<Vec<_>>());
        normalized.sort();
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new()
    }

    #[test]
    fn test_trigger_classification() {
        let e = extractor();
        assert_eq!(
            e.classify_sentence("docker experience is required."),
            Category::Mandatory
        );
        assert_eq!(
            e.classify_sentence("kubernetes is a plus."),
            Category::Bonus
        );
        assert_eq!(
            e.classify_sentence("you will build services."),
            Category::Normal
        );
    }

    #[test]
    fn test_mandatory_beats_bonus() {
        let e = extractor();
        assert_eq!(
            e.classify_sentence("python is required, kafka is preferred."),
            Category::Mandatory
        );
    }

    #[test]
    fn test_trigger_matching_is_substring_level() {
        let e = extractor();
        // "surplus" contains "plus": lexical matching flags it anyway
        assert_eq!(
            e.classify_sentence("we have a surplus of compute."),
            Category::Bonus
        );
        // "requires" does not contain "required"
        assert_eq!(
            e.classify_sentence("the role requires travel."),
            Category::Normal
        );
    }

    #[test]
    fn test_extract_categorizes_and_normalizes() {
        let e = extractor();
        let jd = "AWS and Docker experience is required. Knowledge of Kubernetes is a plus.";
        let keywords = e.extract(jd);

        assert!(keywords.mandatory.contains(&"Amazon Web Services".to_string()));
        assert!(keywords.mandatory.contains(&"Docker".to_string()));
        assert!(keywords.bonus.contains(&"kubernetes".to_string()));
        assert!(!keywords.bonus.contains(&"Amazon Web Services".to_string()));
    }

    #[test]
    fn test_extract_filters_stop_words_and_single_chars() {
        let e = extractor();
        let keywords = e.extract("The ideal candidate will join our innovative team.");

        for category in Category::ALL {
            for kw in keywords.get(category) {
                assert!(kw.chars().count() > 1);
                assert_ne!(kw, "team");
                assert_ne!(kw, "candidate");
            }
        }
    }

    #[test]
    fn test_extract_empty_input() {
        let keywords = extractor().extract("");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_extract_is_deterministic() {
        let e = extractor();
        let jd = "Python and Django are required. GraphQL is nice to have. You will build APIs.";
        let first = e.extract(jd);
        let second = e.extract(jd);

        assert_eq!(first.mandatory, second.mandatory);
        assert_eq!(first.normal, second.normal);
        assert_eq!(first.bonus, second.bonus);
    }

    #[test]
    fn test_same_surface_keyword_in_multiple_categories() {
        let e = extractor();
        let jd = "Docker is required. Docker compose knowledge is a plus.";
        let keywords = e.extract(jd);

        assert!(keywords.mandatory.contains(&"Docker".to_string()));
        assert!(keywords.bonus.contains(&"Docker".to_string()));
    }
}
