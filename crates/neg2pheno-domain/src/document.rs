//! Document module - raw notes and their token-level annotations

/// A clinical note read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Source filename; doubles as the document identifier
    pub filename: String,

    /// Decoded note text
    pub raw_text: String,
}

impl Document {
    /// Create a new document
    pub fn new(filename: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// A single token with byte offsets into the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text
    pub text: String,

    /// Lowercased text used for case-insensitive matching
    pub lower: String,

    /// Byte offset of the first character
    pub start: usize,

    /// Byte offset one past the last character
    pub end: usize,

    /// Whether this token opens a sentence
    pub is_sent_start: bool,
}

impl Token {
    /// Create a token from its source slice
    pub fn new(text: &str, start: usize, is_sent_start: bool) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            start,
            end: start + text.len(),
            is_sent_start,
        }
    }
}

/// A labelled span over a token range (`end` exclusive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// Index of the first token
    pub start: usize,

    /// Index one past the last token
    pub end: usize,

    /// Entity label (e.g. `HPO`)
    pub label: String,

    /// Set by the negation stage
    pub negated: bool,
}

impl EntitySpan {
    /// Create an unnegated span
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            negated: false,
        }
    }

    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no tokens
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether two spans share at least one token
    pub fn overlaps(&self, other: &EntitySpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A tokenized document and the entity spans attached to it by pipeline stages
#[derive(Debug, Clone)]
pub struct AnnotatedDocument {
    text: String,
    tokens: Vec<Token>,
    entities: Vec<EntitySpan>,
}

impl AnnotatedDocument {
    /// Create an annotated document with no entities
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
            entities: Vec::new(),
        }
    }

    /// Source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Current entity spans
    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    /// Mutable access for stages that annotate existing spans
    pub fn entities_mut(&mut self) -> &mut Vec<EntitySpan> {
        &mut self.entities
    }

    /// Replace every entity span
    pub fn set_entities(&mut self, entities: Vec<EntitySpan>) {
        self.entities = entities;
    }

    /// Exact source text covered by a token range
    pub fn slice_text(&self, start: usize, end: usize) -> &str {
        if start >= end || end > self.tokens.len() {
            return "";
        }
        &self.text[self.tokens[start].start..self.tokens[end - 1].end]
    }

    /// Exact source text covered by an entity span
    pub fn span_text(&self, span: &EntitySpan) -> &str {
        self.slice_text(span.start, span.end)
    }

    /// Token indices at which sentences start
    pub fn sentence_starts(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_sent_start)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> AnnotatedDocument {
        // "No  Seizures."
        let tokens = vec![
            Token::new("No", 0, true),
            Token::new("Seizures", 4, false),
            Token::new(".", 12, false),
        ];
        AnnotatedDocument::new("No  Seizures.", tokens)
    }

    #[test]
    fn test_token_offsets_and_lowercase() {
        let t = Token::new("Seizures", 4, false);
        assert_eq!(t.end, 12);
        assert_eq!(t.lower, "seizures");
    }

    #[test]
    fn test_span_text_preserves_original_whitespace() {
        let d = doc();
        let span = EntitySpan::new(0, 2, "HPO");
        assert_eq!(d.span_text(&span), "No  Seizures");
    }

    #[test]
    fn test_slice_text_out_of_range_is_empty() {
        let d = doc();
        assert_eq!(d.slice_text(2, 9), "");
        assert_eq!(d.slice_text(1, 1), "");
    }

    #[test]
    fn test_overlap() {
        let a = EntitySpan::new(0, 2, "HPO");
        let b = EntitySpan::new(1, 3, "HPO");
        let c = EntitySpan::new(2, 3, "HPO");
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_sentence_starts() {
        assert_eq!(doc().sentence_starts(), vec![0]);
    }

    #[test]
    fn test_set_entities_replaces() {
        let mut d = doc();
        d.set_entities(vec![EntitySpan::new(0, 1, "PERSON")]);
        d.set_entities(vec![EntitySpan::new(1, 2, "HPO")]);
        assert_eq!(d.entities().len(), 1);
        assert_eq!(d.entities()[0].label, "HPO");
    }
}
