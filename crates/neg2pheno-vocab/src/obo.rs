//! OBO ontology vocabularies

use crate::error::VocabError;
use neg2pheno_domain::Vocabulary;
use std::path::Path;

/// Load `HP:` terms from an OBO ontology file
///
/// Each term yields one row for its trimmed name and one per distinct trimmed
/// synonym, all sharing the term identifier.
#[cfg(feature = "obo")]
pub fn load_obo(path: &Path) -> Result<Vocabulary, VocabError> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let vocabulary = reader::vocabulary_from_terms(reader::parse_terms(&content)?);

    tracing::info!(
        "Loaded {} HPO synonym entries from {}",
        vocabulary.len(),
        path.display()
    );
    Ok(vocabulary)
}

/// Ontology support is compiled out; always fails
#[cfg(not(feature = "obo"))]
pub fn load_obo(path: &Path) -> Result<Vocabulary, VocabError> {
    Err(VocabError::OntologyUnavailable(format!(
        "cannot read {}: rebuild neg2pheno-vocab with the `obo` feature",
        path.display()
    )))
}

#[cfg(feature = "obo")]
pub(crate) mod reader {
    use crate::error::VocabError;
    use fastobo::ast::{EntityFrame, TermClause, TermFrame};
    use neg2pheno_domain::{Vocabulary, VocabularyEntry, HPO_PREFIX};
    use std::collections::HashSet;

    /// A `[Term]` frame reduced to the clauses the loader needs
    #[derive(Debug, Default, Clone, PartialEq)]
    pub(crate) struct OboTerm {
        pub id: String,
        pub name: String,
        pub synonyms: Vec<String>,
    }

    impl From<&TermFrame> for OboTerm {
        fn from(frame: &TermFrame) -> Self {
            let mut term = OboTerm {
                id: frame.id().as_inner().to_string(),
                ..OboTerm::default()
            };

            for line in frame.clauses() {
                match line.as_inner() {
                    TermClause::Name(name) => term.name = name.as_str().to_string(),
                    TermClause::Synonym(synonym) => {
                        term.synonyms.push(synonym.description().as_str().to_string())
                    }
                    _ => {}
                }
            }

            term
        }
    }

    /// Parse a document and keep its `[Term]` frames
    pub(crate) fn parse_terms(content: &str) -> Result<Vec<OboTerm>, VocabError> {
        let doc = fastobo::from_str(content).map_err(|e| VocabError::Parse(e.to_string()))?;

        Ok(doc
            .entities()
            .iter()
            .filter_map(|entity| match entity {
                EntityFrame::Term(frame) => Some(OboTerm::from(frame.as_ref())),
                _ => None,
            })
            .collect())
    }

    /// Flatten `HP:` terms into vocabulary rows
    pub(crate) fn vocabulary_from_terms(terms: Vec<OboTerm>) -> Vocabulary {
        let mut entries = Vec::new();

        for term in terms.into_iter().filter(|t| t.id.starts_with(HPO_PREFIX)) {
            let name = term.name.trim().to_string();
            let mut seen = HashSet::new();

            let texts = std::iter::once(name.as_str())
                .chain(term.synonyms.iter().map(|s| s.trim()))
                .filter(|s| !s.is_empty())
                .filter(|s| seen.insert(s.to_string()))
                .map(str::to_string)
                .collect::<Vec<_>>();

            for text in texts {
                entries.push(VocabularyEntry::new(term.id.clone(), name.clone(), text));
            }
        }

        Vocabulary::new(entries)
    }

}
