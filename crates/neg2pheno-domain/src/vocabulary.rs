//! Vocabulary module - controlled phenotype terms and their synonyms

use std::collections::HashSet;

/// Identifier prefix of Human Phenotype Ontology terms
pub const HPO_PREFIX: &str = "HP:";

/// Entity label attached to spans produced by the phenotype matcher
pub const HPO_LABEL: &str = "HPO";

/// One row of a phenotype vocabulary
///
/// A term with several synonyms is represented by several entries sharing
/// the same identifier. The synonym is the literal string matched against
/// text and may equal the canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VocabularyEntry {
    /// Term identifier (e.g. `HP:0001250`)
    pub identifier: String,

    /// Primary name of the term
    pub canonical_name: String,

    /// Matchable synonym text
    pub synonym: String,
}

impl VocabularyEntry {
    /// Create a new entry
    pub fn new(
        identifier: impl Into<String>,
        canonical_name: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            canonical_name: canonical_name.into(),
            synonym: synonym.into(),
        }
    }

    /// Whether the identifier carries the HPO namespace prefix
    pub fn is_hpo(&self) -> bool {
        self.identifier.starts_with(HPO_PREFIX)
    }
}

/// An immutable, ordered table of vocabulary entries
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    /// Create a vocabulary from loaded entries
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }

    /// All entries in load order
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Number of entries (one per synonym)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct synonym strings, trimmed, empties dropped, in first-seen order
    ///
    /// # Examples
    ///
    /// ```
    /// use neg2pheno_domain::{Vocabulary, VocabularyEntry};
    ///
    /// let vocab = Vocabulary::new(vec![
    ///     VocabularyEntry::new("HP:0001250", "Seizure", "Seizure"),
    ///     VocabularyEntry::new("HP:0001250", "Seizure", " seizures "),
    ///     VocabularyEntry::new("HP:0001250", "Seizure", "Seizure"),
    ///     VocabularyEntry::new("HP:0000252", "Microcephaly", ""),
    /// ]);
    /// assert_eq!(vocab.distinct_synonyms(), vec!["Seizure", "seizures"]);
    /// ```
    pub fn distinct_synonyms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.synonym.trim())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Distinct identifiers in first-seen order
    pub fn identifiers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.identifier.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

impl FromIterator<VocabularyEntry> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = VocabularyEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vocabulary {
        Vocabulary::new(vec![
            VocabularyEntry::new("HP:0001250", "Seizure", "Seizure"),
            VocabularyEntry::new("HP:0001250", "Seizure", "seizures"),
            VocabularyEntry::new("HP:0000252", "Microcephaly", "Microcephaly"),
            VocabularyEntry::new("HP:0000252", "Microcephaly", "small head"),
        ])
    }

    #[test]
    fn test_distinct_synonyms_keeps_first_seen_order() {
        let vocab = sample();
        assert_eq!(
            vocab.distinct_synonyms(),
            vec!["Seizure", "seizures", "Microcephaly", "small head"]
        );
    }

    #[test]
    fn test_distinct_synonyms_skips_whitespace_only() {
        let vocab = Vocabulary::new(vec![
            VocabularyEntry::new("HP:1", "A", "   "),
            VocabularyEntry::new("HP:1", "A", "\t"),
        ]);
        assert!(vocab.distinct_synonyms().is_empty());
    }

    #[test]
    fn test_identifiers_deduplicated() {
        let vocab = sample();
        assert_eq!(vocab.identifiers(), vec!["HP:0001250", "HP:0000252"]);
    }

    #[test]
    fn test_is_hpo() {
        assert!(VocabularyEntry::new("HP:0000001", "All", "All").is_hpo());
        assert!(!VocabularyEntry::new("GO:0008150", "bp", "bp").is_hpo());
    }

    #[test]
    fn test_collect_into_vocabulary() {
        let vocab: Vocabulary = sample().entries().iter().cloned().collect();
        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
    }
}
