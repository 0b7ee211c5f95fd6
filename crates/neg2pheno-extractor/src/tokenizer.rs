//! Word-level tokenizer with sentence boundary marking

use neg2pheno_domain::{AnnotatedDocument, Token};
use once_cell::sync::Lazy;
use regex::Regex;

// Decimal numbers, words with inner apostrophes, or a single symbol
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?:[.,]\d+)+|\w+(?:['’]\w+)*|[^\w\s]").expect("token pattern is valid")
});

/// Splits text into tokens and marks sentence starts
///
/// Sentences start at the first token, after `.`, `!` or `?`, and after a
/// blank line. Patterns and notes must go through the same tokenizer so that
/// phrase matches line up on token boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into an annotated document with no entities
    pub fn make_doc(&self, text: &str) -> AnnotatedDocument {
        AnnotatedDocument::new(text, self.tokenize(text))
    }

    /// Tokens with byte offsets and sentence flags
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut previous_end = 0;
        let mut after_terminal = false;

        for m in TOKEN_PATTERN.find_iter(text) {
            let gap = &text[previous_end..m.start()];
            let is_sent_start = tokens.is_empty() || after_terminal || is_blank_line(gap);

            tokens.push(Token::new(m.as_str(), m.start(), is_sent_start));
            after_terminal = matches!(m.as_str(), "." | "!" | "?");
            previous_end = m.end();
        }

        tokens
    }

    /// Lowercased token texts, as used for phrase patterns
    pub fn lower_tokens(&self, text: &str) -> Vec<String> {
        TOKEN_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

fn is_blank_line(gap: &str) -> bool {
    gap.chars().filter(|c| *c == '\n').count() >= 2
}
