//! Trait definitions for the annotation pipeline
//!
//! These traits define the boundaries between the extraction pass and the
//! language-processing components it drives. Implementations live in
//! `neg2pheno-extractor`; any compliant implementation can be substituted.

use crate::{AnnotatedDocument, EntitySpan};

/// A named stage of an annotation pipeline
///
/// Stages run in order over the same document and communicate only through
/// the annotations they leave on it.
pub trait PipelineStage {
    /// Stage name, unique within a pipeline (e.g. `hpo_spans`, `negex`)
    fn name(&self) -> &str;

    /// Annotate the document in place
    fn process(&self, doc: &mut AnnotatedDocument);
}

/// Finds vocabulary phrases in a tokenized document
pub trait PhraseMatcher {
    /// Every (start, end) token range where a registered phrase occurs
    ///
    /// Ranges may overlap; callers resolve overlaps.
    fn find_matches(&self, doc: &AnnotatedDocument) -> Vec<(usize, usize)>;

    /// Number of registered phrases
    fn pattern_count(&self) -> usize;
}

/// Decides whether an entity span is negated in its context
pub trait NegationClassifier {
    /// Whether `entity` is negated within `doc`
    fn is_negated(&self, doc: &AnnotatedDocument, entity: &EntitySpan) -> bool;

    /// Classify every entity whose label is in `labels`, setting its flag
    ///
    /// Implementations that precompute per-document state should override
    /// this instead of paying for it once per entity.
    fn classify_document(&self, doc: &mut AnnotatedDocument, labels: &[String]) {
        let flags: Vec<Option<bool>> = doc
            .entities()
            .iter()
            .map(|e| {
                labels
                    .contains(&e.label)
                    .then(|| self.is_negated(doc, e))
            })
            .collect();

        for (entity, flag) in doc.entities_mut().iter_mut().zip(flags) {
            if let Some(negated) = flag {
                entity.negated = negated;
            }
        }
    }
}
