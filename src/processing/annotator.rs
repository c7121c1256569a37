//! Part-of-speech annotation and noun-chunk extraction
//!
//! Keyword extraction only needs two linguistic capabilities: tokens with
//! coarse POS tags, and noun-phrase spans. Both sit behind the [`Annotator`]
//! trait so any tagger backend can be swapped in without touching the
//! extractor. The default backend is a rule-based English tagger tuned for
//! lowercased job-description prose, where capitalization carries no signal.

use std::collections::HashSet;

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Number,
}

impl PosTag {
    /// Tags the keyword extractor collects as standalone candidates.
    pub fn is_nominal(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// A single tagged token.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
}

/// Linguistic annotation capability: tokenization + tagging + chunking.
pub trait Annotator: Send + Sync {
    /// Tokenize and tag one sentence.
    fn annotate(&self, sentence: &str) -> Vec<Token>;

    /// Noun-phrase spans over the tagged tokens, as lists of token texts.
    fn noun_chunks(&self, tokens: &[Token]) -> Vec<Vec<String>>;
}

/// Rule-based English annotator.
///
/// Closed-class words come from fixed lists; open-class words fall through
/// suffix rules and finally default to noun. Known technology terms tag as
/// proper nouns. Deliberately biased toward nouns: in job descriptions the
/// unknown words are overwhelmingly skills, tools, and role nouns.
pub struct RuleBasedAnnotator {
    determiners: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    prepositions: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    ing_nouns: HashSet<&'static str>,
    tech_lexicon: HashSet<&'static str>,
}

impl Default for RuleBasedAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedAnnotator {
    pub fn new() -> Self {
        Self {
            determiners: DETERMINERS.iter().copied().collect(),
            pronouns: PRONOUNS.iter().copied().collect(),
            prepositions: PREPOSITIONS.iter().copied().collect(),
            conjunctions: CONJUNCTIONS.iter().copied().collect(),
            verbs: VERBS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            ing_nouns: ING_NOUNS.iter().copied().collect(),
            tech_lexicon: TECH_LEXICON.iter().copied().collect(),
        }
    }

    fn tag_word(&self, word: &str) -> PosTag {
        if is_number_like(word) {
            return PosTag::Number;
        }
        if self.determiners.contains(word) {
            return PosTag::Determiner;
        }
        if self.pronouns.contains(word) {
            return PosTag::Pronoun;
        }
        if self.prepositions.contains(word) {
            return PosTag::Preposition;
        }
        if self.conjunctions.contains(word) {
            return PosTag::Conjunction;
        }
        if self.verbs.contains(word) {
            return PosTag::Verb;
        }
        if self.adjectives.contains(word) {
            return PosTag::Adjective;
        }
        if self.tech_lexicon.contains(word) {
            return PosTag::ProperNoun;
        }
        if word.len() > 3 && word.ends_with("ly") {
            return PosTag::Adverb;
        }
        if word.len() > 3 && word.ends_with("ed") {
            return PosTag::Verb;
        }
        if word.len() > 4 && word.ends_with("ing") && !self.ing_nouns.contains(word) {
            return PosTag::Verb;
        }
        PosTag::Noun
    }
}

impl Annotator for RuleBasedAnnotator {
    fn annotate(&self, sentence: &str) -> Vec<Token> {
        sentence
            .split_whitespace()
            .filter_map(|raw| {
                let text = clean_token(raw);
                if text.is_empty() {
                    return None;
                }
                let tag = self.tag_word(&text);
                Some(Token { text, tag })
            })
            .collect()
    }

    fn noun_chunks(&self, tokens: &[Token]) -> Vec<Vec<String>> {
        let mut chunks = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut has_nominal = false;

        for token in tokens {
            let in_chunk = matches!(
                token.tag,
                PosTag::Determiner | PosTag::Adjective | PosTag::Noun | PosTag::ProperNoun
            );
            if in_chunk {
                has_nominal = has_nominal || token.tag.is_nominal();
                current.push(token.text.clone());
            } else {
                if has_nominal && !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
                current.clear();
                has_nominal = false;
            }
        }
        if has_nominal && !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }
}

/// Strip surrounding punctuation while keeping interior dots and slashes
/// (node.js, ci/cd) and trailing `+`/`#` (c++, c#).
fn clean_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .to_string()
}

fn is_number_like(word: &str) -> bool {
    word.parse::<f64>().is_ok()
        || (word.chars().any(|c| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '+' | '%' | '$')))
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "another", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "who", "whom", "which", "what", "someone", "anyone", "yourself",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "of", "for", "with", "to", "from", "by", "as", "into", "onto", "over",
    "under", "about", "across", "through", "during", "between", "among", "within", "without",
    "against", "via", "per", "using", "including",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "while", "because", "although", "though",
    "whether", "than", "when", "where",
];

// Auxiliaries plus the lexical verbs that actually show up in job postings.
const VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had", "do", "does",
    "did", "will", "would", "can", "could", "should", "shall", "may", "might", "must", "need",
    "needs", "require", "requires", "required", "prefer", "prefers", "preferred", "seek", "seeks",
    "seeking", "look", "looking", "hire", "hiring", "join", "work", "works", "write", "writes",
    "build", "builds", "develop", "develops", "maintain", "maintains", "collaborate",
    "collaborates", "communicate", "communicates", "deliver", "delivers", "own", "owns", "drive",
    "drives", "lead", "leads", "help", "helps", "want", "wants", "expect", "expects", "offer",
    "offers", "include", "includes", "apply", "know", "knows", "understand", "understands",
    "ensure", "ensures", "support", "supports", "get", "make", "makes", "grow", "bring", "brings",
];

const ADJECTIVES: &[&str] = &[
    "good", "great", "strong", "excellent", "solid", "deep", "broad", "senior", "junior", "new",
    "ideal", "innovative", "technical", "professional", "proficient", "familiar", "fluent",
    "relevant", "similar", "huge", "big", "small", "fast", "modern", "scalable", "reliable",
    "essential", "desirable", "nice", "core", "key", "top", "high", "low", "full", "hands-on",
    "previous", "prior", "able", "comfortable", "successful", "effective",
];

// -ing forms that are nouns in this register, not verbs.
const ING_NOUNS: &[&str] = &[
    "engineering", "learning", "testing", "marketing", "accounting", "consulting", "training",
    "monitoring", "computing", "programming", "scripting", "tooling", "onboarding", "reporting",
    "logging", "caching", "networking", "everything", "something", "nothing", "anything",
];

// Common technology terms, tagged as proper nouns the way a statistical
// tagger treats product and platform names.
const TECH_LEXICON: &[&str] = &[
    "python", "java", "javascript", "typescript", "rust", "go", "golang", "ruby", "php", "swift",
    "kotlin", "scala", "c", "c++", "c#", "dart", "flutter", "react", "react.js", "reactjs",
    "angular", "vue", "svelte", "node", "node.js", "nodejs", "express", "django", "flask",
    "fastapi", "rails", "spring", "aws", "gcp", "azure", "docker", "kubernetes", "k8s",
    "terraform", "ansible", "jenkins", "git", "github", "gitlab", "linux", "unix", "sql", "nosql",
    "mysql", "postgresql", "postgres", "mongodb", "mongo", "redis", "elasticsearch", "kafka",
    "graphql", "grpc", "rest", "html", "html5", "css", "css3", "sass", "webpack", "firebase",
    "tensorflow", "pytorch", "pandas", "numpy", "spark", "hadoop", "tableau", "excel", "jira",
    "figma", "devops", "ci/cd", "api", "apis", "microservices", "ml", "ai", "nlp", "english",
];
