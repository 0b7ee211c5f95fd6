//! Tab-separated vocabulary tables

use crate::error::VocabError;
use neg2pheno_domain::{Vocabulary, VocabularyEntry};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Header columns a vocabulary table must carry
pub const REQUIRED_COLUMNS: [&str; 3] = ["HPO_ID", "name", "synonym"];

/// Load a vocabulary table from a TSV file
pub fn load_tsv(path: &Path) -> Result<Vocabulary, VocabError> {
    let file = std::fs::File::open(path)?;
    let vocabulary = read_tsv(file)?;
    debug!(
        "Read {} vocabulary rows from {}",
        vocabulary.len(),
        path.display()
    );
    Ok(vocabulary)
}

/// Read a vocabulary table from any reader
///
/// Header names are matched exactly. Short rows are padded with empty
/// strings; rows are never dropped.
pub fn read_tsv<R: Read>(reader: R) -> Result<Vocabulary, VocabError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let position = |column: &str| headers.iter().position(|h| h == column);

    let (id_idx, name_idx, synonym_idx) =
        match (position("HPO_ID"), position("name"), position("synonym")) {
            (Some(id), Some(name), Some(synonym)) => (id, name, synonym),
            _ => {
                return Err(VocabError::MissingColumns {
                    required: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
                    found: headers.iter().map(|h| h.to_string()).collect(),
                })
            }
        };

    let mut entries = Vec::new();
    let mut anonymous = 0;
    for record in reader.records() {
        let record = record?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();

        let entry = VocabularyEntry::new(cell(id_idx), cell(name_idx), cell(synonym_idx));
        if entry.identifier.is_empty() {
            anonymous += 1;
        }
        entries.push(entry);
    }

    if anonymous > 0 {
        debug!("{} vocabulary rows have an empty identifier", anonymous);
    }

    Ok(Vocabulary::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_required_columns() {
        let data = "HPO_ID\tname\tsynonym\nHP:0001250\tSeizure\tseizures\n";
        let vocab = read_tsv(data.as_bytes()).unwrap();
        assert_eq!(vocab.len(), 1);
        let entry = &vocab.entries()[0];
        assert_eq!(entry.identifier, "HP:0001250");
        assert_eq!(entry.canonical_name, "Seizure");
        assert_eq!(entry.synonym, "seizures");
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let data = "synonym\tdefinition\tHPO_ID\tname\nsmall head\tx\tHP:0000252\tMicrocephaly\n";
        let vocab = read_tsv(data.as_bytes()).unwrap();
        assert_eq!(vocab.entries()[0].synonym, "small head");
        assert_eq!(vocab.entries()[0].identifier, "HP:0000252");
    }

    #[test]
    fn test_missing_cells_are_empty_strings() {
        let data = "HPO_ID\tname\tsynonym\nHP:0001250\tSeizure\n";
        let vocab = read_tsv(data.as_bytes()).unwrap();
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.entries()[0].synonym, "");
    }

    #[test]
    fn test_missing_synonym_column() {
        let data = "HPO_ID\tname\nHP:0001250\tSeizure\n";
        let err = read_tsv(data.as_bytes()).unwrap_err();
        match &err {
            VocabError::MissingColumns { required, found } => {
                assert_eq!(required, &["HPO_ID", "name", "synonym"]);
                assert_eq!(found, &["HPO_ID", "name"]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
        assert!(err.is_configuration());
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let data = "hpo_id\tName\tSynonym\nHP:1\tA\ta\n";
        assert!(matches!(
            read_tsv(data.as_bytes()),
            Err(VocabError::MissingColumns { .. })
        ));
    }

    #[test]
    fn test_empty_identifier_rows_are_kept() {
        let data = "HPO_ID\tname\tsynonym\n\tOrphan\torphan term\n";
        let vocab = read_tsv(data.as_bytes()).unwrap();
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.distinct_synonyms(), vec!["orphan term"]);
    }
}
