//! Phenotype phrase matching stage

use crate::error::ExtractorError;
use crate::negex::NEGEX_STAGE;
use crate::phrase::PhraseTable;
use crate::pipeline::Pipeline;
use crate::tokenizer::Tokenizer;
use neg2pheno_domain::traits::{PhraseMatcher, PipelineStage};
use neg2pheno_domain::{AnnotatedDocument, EntitySpan};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Name of the phenotype matching stage
pub const MATCHER_STAGE: &str = "hpo_spans";

/// Upper bound on patterns handed to the phrase table per registration call
pub const REGISTRATION_BATCH_SIZE: usize = 1000;

/// Case-insensitive, token-aligned matcher over vocabulary synonyms
pub struct TermMatcher {
    table: PhraseTable<()>,
}

impl TermMatcher {
    /// Build a matcher from synonym strings
    ///
    /// Terms are trimmed; empty ones are skipped. An empty term list yields a
    /// matcher that never matches.
    pub fn new<I, S>(tokenizer: &Tokenizer, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self {
            table: PhraseTable::new(),
        };

        let mut batch = Vec::with_capacity(REGISTRATION_BATCH_SIZE);
        for term in terms {
            let term = term.as_ref().trim();
            if term.is_empty() {
                continue;
            }
            batch.push(tokenizer.lower_tokens(term));
            if batch.len() == REGISTRATION_BATCH_SIZE {
                matcher.register(std::mem::take(&mut batch));
            }
        }
        if !batch.is_empty() {
            matcher.register(batch);
        }

        matcher
    }

    fn register(&mut self, batch: Vec<Vec<String>>) {
        debug!("Registering batch of {} phrase patterns", batch.len());
        for pattern in &batch {
            self.table.insert(pattern, ());
        }
    }
}

impl PhraseMatcher for TermMatcher {
    fn find_matches(&self, doc: &AnnotatedDocument) -> Vec<(usize, usize)> {
        self.table
            .find_all(doc.tokens())
            .into_iter()
            .map(|(_, start, end)| (start, end))
            .collect()
    }

    fn pattern_count(&self) -> usize {
        self.table.len()
    }
}

/// Keep the longest non-overlapping spans
///
/// Candidates are taken longest first, earlier start winning ties; a span is
/// kept only if none of its tokens belong to a span already kept. The result
/// is ordered by start.
pub fn filter_spans(spans: Vec<EntitySpan>) -> Vec<EntitySpan> {
    let mut candidates = spans;
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start.cmp(&b.start)));

    let mut taken = HashSet::new();
    let mut kept = Vec::new();
    for span in candidates {
        if (span.start..span.end).any(|i| taken.contains(&i)) {
            continue;
        }
        taken.extend(span.start..span.end);
        kept.push(span);
    }

    kept.sort_by_key(|s| s.start);
    kept
}

/// Pipeline stage replacing a document's entities with labelled phrase matches
pub struct PhenotypeSpanStage<M: PhraseMatcher> {
    matcher: M,
    label: String,
}

impl<M: PhraseMatcher> PhenotypeSpanStage<M> {
    /// Create a stage labelling matches with `label`
    pub fn new(matcher: M, label: impl Into<String>) -> Self {
        Self {
            matcher,
            label: label.into(),
        }
    }
}

impl<M: PhraseMatcher> PipelineStage for PhenotypeSpanStage<M> {
    fn name(&self) -> &str {
        MATCHER_STAGE
    }

    fn process(&self, doc: &mut AnnotatedDocument) {
        let spans = self
            .matcher
            .find_matches(doc)
            .into_iter()
            .map(|(start, end)| EntitySpan::new(start, end, self.label.clone()))
            .collect();
        doc.set_entities(filter_spans(spans));
    }
}

/// Install the phenotype matcher so that it runs before negation detection
///
/// Without a negation stage the matcher is appended at the end and a warning
/// is logged; spans will then carry no negation flag.
pub fn install_phenotype_matcher<S: AsRef<str>>(
    pipeline: &mut Pipeline,
    terms: &[S],
    label: &str,
) -> Result<(), ExtractorError> {
    let matcher = TermMatcher::new(pipeline.tokenizer(), terms.iter().map(|t| t.as_ref()));
    info!("Registered {} phenotype patterns", matcher.pattern_count());

    let stage = Box::new(PhenotypeSpanStage::new(matcher, label));
    if pipeline.has_stage(NEGEX_STAGE) {
        pipeline.add_stage_before(NEGEX_STAGE, stage)
    } else {
        pipeline.add_stage(stage)?;
        warn!("NegEx not found yet; added {} at end.", MATCHER_STAGE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neg2pheno_domain::HPO_LABEL;
    use proptest::prelude::*;

    fn span(start: usize, end: usize) -> EntitySpan {
        EntitySpan::new(start, end, HPO_LABEL)
    }

    fn matched(terms: &[&str], text: &str) -> Vec<String> {
        let mut pipeline = Pipeline::default();
        install_phenotype_matcher(&mut pipeline, terms, HPO_LABEL).unwrap();
        let doc = pipeline.process(text).unwrap();
        doc.entities()
            .iter()
            .map(|e| doc.span_text(e).to_string())
            .collect()
    }

    #[test]
    fn test_filter_spans_prefers_longest() {
        let kept = filter_spans(vec![span(1, 2), span(0, 2), span(3, 4)]);
        assert_eq!(kept, vec![span(0, 2), span(3, 4)]);
    }

    #[test]
    fn test_filter_spans_tie_goes_to_earlier_start() {
        let kept = filter_spans(vec![span(1, 3), span(0, 2)]);
        assert_eq!(kept, vec![span(0, 2)]);
    }

    #[test]
    fn test_filter_spans_collapses_duplicates() {
        let kept = filter_spans(vec![span(0, 1), span(0, 1)]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_case_insensitive_surface_text_preserved() {
        assert_eq!(
            matched(&["seizures"], "Recurrent SEIZURES since birth"),
            vec!["SEIZURES"]
        );
    }

    #[test]
    fn test_longest_match_wins() {
        assert_eq!(
            matched(&["seizures", "febrile seizures"], "history: febrile seizures"),
            vec!["febrile seizures"]
        );
    }

    #[test]
    fn test_matches_respect_word_boundaries() {
        assert!(matched(&["ataxia"], "no dysataxiaa here").is_empty());
    }

    #[test]
    fn test_empty_terms_install_valid_stage() {
        let mut pipeline = Pipeline::default();
        let terms: [&str; 2] = ["", "   "];
        install_phenotype_matcher(&mut pipeline, &terms, HPO_LABEL).unwrap();
        assert_eq!(pipeline.stage_names(), vec![MATCHER_STAGE]);
        assert!(pipeline.process("seizures").unwrap().entities().is_empty());
    }

    #[test]
    fn test_generic_entities_are_replaced() {
        struct Generic;
        impl PipelineStage for Generic {
            fn name(&self) -> &str {
                "ner"
            }
            fn process(&self, doc: &mut AnnotatedDocument) {
                doc.set_entities(vec![EntitySpan::new(0, 1, "PERSON")]);
            }
        }

        let mut pipeline = Pipeline::default();
        pipeline.add_stage(Box::new(Generic)).unwrap();
        install_phenotype_matcher(&mut pipeline, &["hypotonia"], HPO_LABEL).unwrap();

        let doc = pipeline.process("John has hypotonia").unwrap();
        assert_eq!(doc.entities().len(), 1);
        assert_eq!(doc.entities()[0].label, HPO_LABEL);
        assert_eq!(doc.span_text(&doc.entities()[0]), "hypotonia");
    }

    #[test]
    fn test_batches_beyond_registration_size() {
        let terms: Vec<String> = (0..REGISTRATION_BATCH_SIZE * 2 + 5)
            .map(|i| format!("term{}", i))
            .collect();
        let matcher = TermMatcher::new(&Tokenizer::new(), &terms);
        assert_eq!(matcher.pattern_count(), terms.len());
    }

    proptest! {
        #[test]
        fn prop_filtered_spans_never_overlap(
            raw in prop::collection::vec((0usize..20, 1usize..5), 0..30)
        ) {
            let spans = raw.iter().map(|&(s, l)| span(s, s + l)).collect();
            let kept = filter_spans(spans);
            for (i, a) in kept.iter().enumerate() {
                for b in kept.iter().skip(i + 1) {
                    prop_assert!(!a.overlaps(b));
                }
            }
            prop_assert!(kept.windows(2).all(|w| w[0].start < w[1].start));
        }

        #[test]
        fn prop_longest_candidate_always_kept(
            raw in prop::collection::vec((0usize..20, 1usize..5), 1..30)
        ) {
            let spans: Vec<EntitySpan> = raw.iter().map(|&(s, l)| span(s, s + l)).collect();
            let longest = spans.iter().map(|s| s.len()).max().unwrap_or(0);
            let kept = filter_spans(spans);
            prop_assert_eq!(kept.iter().map(|s| s.len()).max().unwrap_or(0), longest);
        }
    }
}
