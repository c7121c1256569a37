//! Analysis engine combining keyword extraction, match scoring, and quality checks

use crate::processing::keyword_extractor::{CategorizedKeywords, KeywordExtractor};
use crate::processing::match_scorer::{MatchReport, MatchScorer};
use crate::processing::quality::{QualityChecker, QualityReport};
use log::debug;

/// Coordinates the scoring components. All constant tables are built once
/// here; every analysis call is a pure function over its inputs, so one
/// engine can serve any number of concurrent requests through `&self`.
pub struct AnalysisEngine {
    keyword_extractor: KeywordExtractor,
    match_scorer: MatchScorer,
    quality_checker: QualityChecker,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            keyword_extractor: KeywordExtractor::new(),
            match_scorer: MatchScorer,
            quality_checker: QualityChecker::new(),
        }
    }

    /// Score a resume against a job description.
    pub fn analyze_alignment(&self, resume_text: &str, job_description: &str) -> MatchReport {
        let keywords = self.extract_keywords(job_description);
        debug!(
            "Extracted {} keywords ({} mandatory, {} normal, {} bonus)",
            keywords.total_keywords(),
            keywords.mandatory.len(),
            keywords.normal.len(),
            keywords.bonus.len()
        );
        self.match_scorer.score(resume_text, &keywords)
    }

    /// Categorized keywords for a job description, without scoring.
    pub fn extract_keywords(&self, job_description: &str) -> CategorizedKeywords {
        self.keyword_extractor.extract(job_description)
    }

    /// Grade a resume on the seven quality dimensions.
    pub fn check_quality(&self, resume_text: &str) -> QualityReport {
        self.quality_checker.check(resume_text)
    }
}
