//! NegEx negation detection
//!
//! Trigger phrases are matched case-insensitively over tokens. Pseudo
//! triggers mask any other trigger starting inside them. The document is cut
//! into chunks at sentence starts and termination triggers; within a chunk an
//! entity is negated when a preceding trigger starts before it or a following
//! trigger ends after it.

mod termsets;

pub use termsets::{Termset, TermsetPatterns};

use crate::phrase::PhraseTable;
use crate::tokenizer::Tokenizer;
use neg2pheno_domain::traits::{NegationClassifier, PipelineStage};
use neg2pheno_domain::{AnnotatedDocument, EntitySpan};

/// Name of the negation stage
pub const NEGEX_STAGE: &str = "negex";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerKind {
    Pseudo,
    Preceding,
    Following,
    Termination,
}

/// Trigger token ranges found in one document
#[derive(Debug, Default)]
struct Triggers {
    preceding: Vec<(usize, usize)>,
    following: Vec<(usize, usize)>,
    terminating: Vec<(usize, usize)>,
}

/// Rule-based negation classifier
pub struct NegexClassifier {
    table: PhraseTable<TriggerKind>,
}

impl NegexClassifier {
    /// Build a classifier for a termset, tokenizing triggers with `tokenizer`
    pub fn new(tokenizer: &Tokenizer, termset: Termset) -> Self {
        let patterns = termset.patterns();
        let mut table = PhraseTable::new();

        let groups = [
            (TriggerKind::Pseudo, &patterns.pseudo),
            (TriggerKind::Preceding, &patterns.preceding),
            (TriggerKind::Following, &patterns.following),
            (TriggerKind::Termination, &patterns.termination),
        ];
        for (kind, phrases) in groups {
            for phrase in phrases {
                table.insert(&tokenizer.lower_tokens(phrase), kind);
            }
        }

        Self { table }
    }

    fn triggers(&self, doc: &AnnotatedDocument) -> Triggers {
        let matches = self.table.find_all(doc.tokens());
        let pseudo: Vec<(usize, usize)> = matches
            .iter()
            .filter(|(kind, _, _)| *kind == TriggerKind::Pseudo)
            .map(|&(_, start, end)| (start, end))
            .collect();

        let mut triggers = Triggers::default();
        for (kind, start, end) in matches {
            if kind == TriggerKind::Pseudo {
                continue;
            }
            // masked when starting anywhere inside a pseudo trigger, end inclusive
            if pseudo.iter().any(|&(ps, pe)| start >= ps && start <= pe) {
                continue;
            }
            match kind {
                TriggerKind::Preceding => triggers.preceding.push((start, end)),
                TriggerKind::Following => triggers.following.push((start, end)),
                TriggerKind::Termination => triggers.terminating.push((start, end)),
                TriggerKind::Pseudo => {}
            }
        }

        triggers
    }

    fn boundaries(doc: &AnnotatedDocument, terminating: &[(usize, usize)]) -> Vec<(usize, usize)> {
        let mut starts = doc.sentence_starts();
        starts.extend(terminating.iter().map(|&(start, _)| start));
        starts.push(doc.len());
        starts.sort_unstable();

        starts.windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// `None` when the entity straddles a chunk boundary and is left unclassified
    fn negated_in(
        entity: &EntitySpan,
        boundaries: &[(usize, usize)],
        triggers: &Triggers,
    ) -> Option<bool> {
        let &(lo, hi) = boundaries
            .iter()
            .find(|&&(lo, hi)| lo <= entity.start && entity.end <= hi)?;
        let within = |&&(start, _): &&(usize, usize)| lo <= start && start < hi;

        let preceded = triggers
            .preceding
            .iter()
            .filter(within)
            .any(|&(start, _)| start < entity.start);
        let followed = triggers
            .following
            .iter()
            .filter(within)
            .any(|&(_, end)| end > entity.end);

        Some(preceded || followed)
    }
}

impl NegationClassifier for NegexClassifier {
    fn is_negated(&self, doc: &AnnotatedDocument, entity: &EntitySpan) -> bool {
        let triggers = self.triggers(doc);
        let boundaries = Self::boundaries(doc, &triggers.terminating);
        Self::negated_in(entity, &boundaries, &triggers).unwrap_or(false)
    }

    fn classify_document(&self, doc: &mut AnnotatedDocument, labels: &[String]) {
        let triggers = self.triggers(doc);
        let boundaries = Self::boundaries(doc, &triggers.terminating);

        for entity in doc.entities_mut() {
            if !labels.contains(&entity.label) {
                continue;
            }
            if let Some(negated) = Self::negated_in(entity, &boundaries, &triggers) {
                entity.negated = negated;
            }
        }
    }
}

/// Pipeline stage flagging negated entities of the configured labels
pub struct NegationStage<C: NegationClassifier> {
    classifier: C,
    labels: Vec<String>,
}

impl<C: NegationClassifier> NegationStage<C> {
    /// Create a stage classifying entities whose label is in `labels`
    pub fn new(classifier: C, labels: Vec<String>) -> Self {
        Self { classifier, labels }
    }
}

impl<C: NegationClassifier> PipelineStage for NegationStage<C> {
    fn name(&self) -> &str {
        NEGEX_STAGE
    }

    fn process(&self, doc: &mut AnnotatedDocument) {
        self.classifier.classify_document(doc, &self.labels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::install_phenotype_matcher;
    use crate::pipeline::Pipeline;
    use neg2pheno_domain::HPO_LABEL;

    const TERMS: &[&str] = &["seizures", "seizure", "fever", "microcephaly", "hypotonia"];

    fn pipeline(termset: Termset) -> Pipeline {
        let mut pipeline = Pipeline::default();
        let negex = NegexClassifier::new(pipeline.tokenizer(), termset);
        pipeline
            .add_stage(Box::new(NegationStage::new(negex, vec![HPO_LABEL.to_string()])))
            .unwrap();
        install_phenotype_matcher(&mut pipeline, TERMS, HPO_LABEL).unwrap();
        pipeline
    }

    fn flags(termset: Termset, text: &str) -> Vec<(String, bool)> {
        let doc = pipeline(termset).process(text).unwrap();
        doc.entities()
            .iter()
            .map(|e| (doc.span_text(e).to_string(), e.negated))
            .collect()
    }

    fn clinical(text: &str) -> Vec<(String, bool)> {
        flags(Termset::EnClinical, text)
    }

    #[test]
    fn test_matcher_installed_before_negex() {
        assert_eq!(
            pipeline(Termset::EnClinical).stage_names(),
            vec!["hpo_spans", "negex"]
        );
    }

    #[test]
    fn test_preceding_negation() {
        assert_eq!(
            clinical("No evidence of seizures."),
            vec![("seizures".to_string(), true)]
        );
    }

    #[test]
    fn test_affirmed_mention() {
        assert_eq!(
            clinical("Seizures noted."),
            vec![("Seizures".to_string(), false)]
        );
    }

    #[test]
    fn test_following_negation() {
        assert_eq!(
            clinical("Seizure free for two years."),
            vec![("Seizure".to_string(), true)]
        );
    }

    #[test]
    fn test_termination_ends_scope() {
        assert_eq!(
            clinical("Patient denies fever but reports seizures."),
            vec![("fever".to_string(), true), ("seizures".to_string(), false)]
        );
    }

    #[test]
    fn test_sentence_ends_scope() {
        assert_eq!(
            clinical("No fever. Microcephaly present."),
            vec![("fever".to_string(), true), ("Microcephaly".to_string(), false)]
        );
    }

    #[test]
    fn test_pseudo_negation_masks_trigger() {
        assert_eq!(
            clinical("No change in seizures since last visit."),
            vec![("seizures".to_string(), false)]
        );
    }

    #[test]
    fn test_sensitive_termset_adds_history() {
        let text = "History of hypotonia.";
        assert_eq!(clinical(text), vec![("hypotonia".to_string(), false)]);
        assert_eq!(
            flags(Termset::EnClinicalSensitive, text),
            vec![("hypotonia".to_string(), true)]
        );
    }

    #[test]
    fn test_other_labels_not_classified() {
        let classifier = NegexClassifier::new(&Tokenizer::new(), Termset::EnClinical);
        let mut doc = Tokenizer::new().make_doc("no fever");
        doc.set_entities(vec![EntitySpan::new(1, 2, "SYMPTOM")]);

        classifier.classify_document(&mut doc, &[HPO_LABEL.to_string()]);
        assert!(!doc.entities()[0].negated);
        assert!(classifier.is_negated(&doc, &doc.entities()[0]));
    }

    #[test]
    fn test_entity_crossing_termination_left_unclassified() {
        let classifier = NegexClassifier::new(&Tokenizer::new(), Termset::EnClinical);
        // no | pain but fever ; "but" opens a new chunk inside the entity
        let mut doc = Tokenizer::new().make_doc("no pain but fever");
        doc.set_entities(vec![EntitySpan::new(1, 4, HPO_LABEL)]);

        classifier.classify_document(&mut doc, &[HPO_LABEL.to_string()]);
        assert!(!doc.entities()[0].negated);
    }
}
