//! Affirmation module - affirmed mention texts grouped by document

use std::collections::{BTreeMap, BTreeSet};

/// Affirmed mention texts keyed by document filename
///
/// Keys iterate in lexicographic order. Mentions keep detection order and may
/// repeat; [`AffirmationMap::distinct_sorted`] gives the serialized view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffirmationMap {
    documents: BTreeMap<String, Vec<String>>,
}

impl AffirmationMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document so that it appears even with no affirmed mentions
    pub fn insert_document(&mut self, filename: impl Into<String>) {
        self.documents.entry(filename.into()).or_default();
    }

    /// Append an affirmed mention to a document, registering it if needed
    pub fn record(&mut self, filename: &str, mention: impl Into<String>) {
        self.documents
            .entry(filename.to_string())
            .or_default()
            .push(mention.into());
    }

    /// Raw mentions for a document
    pub fn get(&self, filename: &str) -> Option<&[String]> {
        self.documents.get(filename).map(Vec::as_slice)
    }

    /// Whether the document has an entry
    pub fn contains(&self, filename: &str) -> bool {
        self.documents.contains_key(filename)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document has been registered
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate (filename, raw mentions) in filename order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.documents
            .iter()
            .map(|(name, mentions)| (name.as_str(), mentions.as_slice()))
    }

    /// Distinct trimmed non-empty mentions of a document in ascending order
    pub fn distinct_sorted(&self, filename: &str) -> Vec<&str> {
        self.documents
            .get(filename)
            .map(|m| distinct_sorted(m))
            .unwrap_or_default()
    }
}

/// Reduce mentions to distinct trimmed non-empty strings in ascending order
///
/// # Examples
///
/// ```
/// use neg2pheno_domain::affirmation::distinct_sorted;
///
/// let mentions = vec![
///     "seizures".to_string(),
///     " microcephaly ".to_string(),
///     "seizures".to_string(),
///     "  ".to_string(),
/// ];
/// assert_eq!(distinct_sorted(&mentions), vec!["microcephaly", "seizures"]);
/// ```
pub fn distinct_sorted(mentions: &[String]) -> Vec<&str> {
    mentions
        .iter()
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
