//! Sentence segmentation and tokenization helpers

use unicode_segmentation::UnicodeSegmentation;

/// Split text into sentences using Unicode sentence boundaries.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.unicode_sentences()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace word count, the measure the readability band uses.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lowercased whitespace tokens, for vocabulary membership tests.
pub fn lowercase_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        let text = "We need a Rust engineer. Docker experience is required. Kubernetes is a plus.";
        let sentences = split_sentences(text);

        assert_eq!(sentences.len(), 3);
        assert!(sentences[0].starts_with("We need"));
        assert!(sentences[2].contains("Kubernetes"));
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_lowercase_tokens() {
        let tokens = lowercase_tokens("Developed REST APIs");
        assert_eq!(tokens, vec!["developed", "rest", "apis"]);
    }
}
