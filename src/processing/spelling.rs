//! Spelling checks backed by a pluggable dictionary
//!
//! The contract is deliberately small: a word is misspelled iff the
//! configured dictionary does not recognize it. Any provider satisfying
//! [`Dictionary`] can back the checker; the default is an embedded
//! common-English word list seeded with a technology allow-list so that
//! stack names on a resume do not read as typos.

use std::collections::HashSet;

/// Word-recognition capability for the spelling scorer.
pub trait Dictionary: Send + Sync {
    fn contains(&self, word: &str) -> bool;

    /// Closest known word, if the provider can offer one.
    fn suggest(&self, _word: &str) -> Option<String> {
        None
    }
}

/// Dictionary backed by an embedded word list.
pub struct WordListDictionary {
    words: HashSet<String>,
}

// Technology and resume-domain terms that are not dictionary English but
// show up constantly in resumes.
const TECH_ALLOW_LIST: &[&str] = &[
    "python", "javascript", "java", "react", "nodejs", "aws", "gcp", "azure",
    "docker", "kubernetes", "terraform", "ansible", "jenkins", "git", "github",
    "sql", "nosql", "mongodb", "postgresql", "api", "apis", "restful",
    "graphql", "html", "css", "spacy", "pytesseract", "fastapi", "uvicorn",
    "tech", "devops", "backend", "frontend", "agile", "scrum", "ceo", "cto",
];

impl Default for WordListDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl WordListDictionary {
    pub fn new() -> Self {
        let mut words: HashSet<String> = include_str!("english_words.txt")
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        words.extend(TECH_ALLOW_LIST.iter().map(|w| w.to_string()));
        Self { words }
    }

    /// Extend the dictionary with extra known words.
    pub fn with_words<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(extra.into_iter().map(|w| w.into().to_lowercase()));
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn suggest(&self, word: &str) -> Option<String> {
        nearest_word(word, self.words.iter().map(|w| w.as_str()))
    }
}

/// Spell checker over word tokens of a text.
pub struct SpellChecker {
    dictionary: Box<dyn Dictionary>,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellChecker {
    pub fn new() -> Self {
        Self::with_dictionary(Box::new(WordListDictionary::new()))
    }

    pub fn with_dictionary(dictionary: Box<dyn Dictionary>) -> Self {
        Self { dictionary }
    }

    /// Distinct unknown words in the text, sorted.
    ///
    /// Tokens are `\w+` runs, lowercased. Number-like tokens are never
    /// misspellings; digits, percentages, and years stay out of the count.
    pub fn unknown_words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut unknown: Vec<String> = word_tokens(&lowered)
            .filter(|word| !is_number_like(word) && !self.dictionary.contains(word))
            .map(|word| word.to_string())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        unknown.sort();
        unknown
    }

    /// Suggestion for a misspelled word, if the dictionary offers one.
    pub fn suggest(&self, word: &str) -> Option<String> {
        self.dictionary.suggest(word)
    }
}

fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
}

fn is_number_like(word: &str) -> bool {
    word.parse::<f64>().is_ok() || word.chars().all(|c| c.is_ascii_digit())
}

/// Nearest dictionary word to a misspelling, for feedback hints.
pub fn nearest_word<'a>(word: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    candidates
        .map(|c| (strsim::jaro_winkler(word, c), c))
        .filter(|(similarity, _)| *similarity >= 0.88)
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, c)| c.to_string())
}
