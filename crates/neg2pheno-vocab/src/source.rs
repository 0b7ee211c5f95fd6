//! Vocabulary source selection

use crate::error::VocabError;
use crate::obo::load_obo;
use crate::tsv::load_tsv;
use neg2pheno_domain::Vocabulary;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the vocabulary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    /// Tab-separated table with `HPO_ID`, `name`, `synonym` columns
    Tsv(PathBuf),
    /// OBO ontology file
    Obo(PathBuf),
}

impl VocabularySource {
    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        match self {
            VocabularySource::Tsv(path) | VocabularySource::Obo(path) => path,
        }
    }

    /// Short name of the source format
    pub fn kind(&self) -> &'static str {
        match self {
            VocabularySource::Tsv(_) => "tsv",
            VocabularySource::Obo(_) => "obo",
        }
    }
}

impl fmt::Display for VocabularySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path().display(), self.kind())
    }
}

/// Load a vocabulary from the selected source
pub fn load_vocabulary(source: &VocabularySource) -> Result<Vocabulary, VocabError> {
    match source {
        VocabularySource::Tsv(path) => load_tsv(path),
        VocabularySource::Obo(path) => load_obo(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_accessors() {
        let tsv = VocabularySource::Tsv(PathBuf::from("terms.tsv"));
        let obo = VocabularySource::Obo(PathBuf::from("hp.obo"));
        assert_eq!(tsv.kind(), "tsv");
        assert_eq!(obo.kind(), "obo");
        assert_eq!(obo.path(), Path::new("hp.obo"));
        assert_eq!(tsv.to_string(), "terms.tsv (tsv)");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = VocabularySource::Tsv(PathBuf::from("/nonexistent/terms.tsv"));
        assert!(matches!(load_vocabulary(&source), Err(VocabError::Io(_))));
    }
}
