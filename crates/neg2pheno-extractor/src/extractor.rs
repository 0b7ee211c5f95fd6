//! Core Extractor implementation

use crate::bundle::{write_json_bundle, write_txt_bundle};
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::matcher::install_phenotype_matcher;
use crate::negex::{NegationStage, NegexClassifier};
use crate::pipeline::Pipeline;
use crate::tokenizer::Tokenizer;
use crate::types::{BundleOutput, DocumentReport, ExtractionMetadata, ExtractionResult};
use neg2pheno_domain::{AffirmationMap, Document, Mention, Vocabulary};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// The Extractor finds affirmed phenotype mentions in a directory of notes
pub struct Extractor {
    pipeline: Pipeline,
    config: ExtractorConfig,
}

impl Extractor {
    /// Build the standard pipeline: vocabulary matcher followed by NegEx
    pub fn new(config: ExtractorConfig, vocabulary: &Vocabulary) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let mut pipeline = Pipeline::new(Tokenizer::new()).with_max_length(config.max_length);
        let negex = NegexClassifier::new(pipeline.tokenizer(), config.termset);
        pipeline.add_stage(Box::new(NegationStage::new(
            negex,
            vec![config.entity_label.clone()],
        )))?;

        let terms = vocabulary.distinct_synonyms();
        info!(
            "Vocabulary has {} entries, {} distinct synonyms",
            vocabulary.len(),
            terms.len()
        );
        install_phenotype_matcher(&mut pipeline, &terms, &config.entity_label)?;

        Ok(Self { pipeline, config })
    }

    /// Create an Extractor around an already assembled pipeline
    pub fn with_pipeline(pipeline: Pipeline, config: ExtractorConfig) -> Self {
        Self { pipeline, config }
    }

    /// The annotation pipeline
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Every labelled span of a document with its negation flag, in text order
    pub fn mentions(&self, document: &Document) -> Result<Vec<Mention>, ExtractorError> {
        let doc = self.pipeline.process(&document.raw_text)?;
        Ok(doc
            .entities()
            .iter()
            .filter(|e| e.label == self.config.entity_label)
            .map(|e| Mention::new(&document.filename, doc.span_text(e), e.negated))
            .collect())
    }

    /// Run the pipeline over every `.txt` file directly inside `in_dir`
    ///
    /// Files are processed in sorted filename order. Each gets an entry in the
    /// affirmation map even when nothing was affirmed.
    pub fn extract_dir(&self, in_dir: &Path) -> Result<ExtractionResult, ExtractorError> {
        let start_time = Instant::now();
        let files = list_notes(in_dir)?;
        info!("Processing {} notes from {}", files.len(), in_dir.display());

        let mut affirmed = AffirmationMap::new();
        let mut reports = Vec::with_capacity(files.len());

        for (filename, path) in files {
            let bytes = fs::read(&path)?;
            let document = Document::new(filename, String::from_utf8_lossy(&bytes));

            let mentions = self.mentions(&document)?;
            let negated = mentions.iter().filter(|m| m.is_negated).count();
            let report = DocumentReport {
                filename: document.filename.clone(),
                affirmed: mentions.len() - negated,
                negated,
            };
            debug!(
                "{}: {} affirmed, {} negated",
                report.filename, report.affirmed, report.negated
            );

            affirmed.insert_document(document.filename.as_str());
            for mention in mentions.into_iter().filter(Mention::is_affirmed) {
                affirmed.record(&document.filename, mention.span_text);
            }
            reports.push(report);
        }

        let metadata = ExtractionMetadata {
            documents: reports.len(),
            affirmed_total: reports.iter().map(|r| r.affirmed).sum(),
            negated_total: reports.iter().map(|r| r.negated).sum(),
            termset: self.config.termset,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };
        info!(
            "Processed {} notes: {} affirmed, {} negated mentions",
            metadata.documents, metadata.affirmed_total, metadata.negated_total
        );

        Ok(ExtractionResult {
            affirmed,
            reports,
            metadata,
        })
    }

    /// Extract from `in_dir` and write the configured bundles under `out_dir`
    pub fn run(
        &self,
        in_dir: &Path,
        out_dir: &Path,
    ) -> Result<(ExtractionResult, BundleOutput), ExtractorError> {
        fs::create_dir_all(out_dir)?;
        let result = self.extract_dir(in_dir)?;
        let mut output = BundleOutput::default();

        if self.config.emit_txt {
            let txt_dir = write_txt_bundle(
                out_dir,
                &result.affirmed,
                self.config.txt_mode,
                &self.config.txt_subdir,
            )?;
            debug!("TXT bundle written to {}", txt_dir.display());
            output.txt_dir = Some(txt_dir);
        }

        if self.config.emit_json {
            let json_path =
                write_json_bundle(out_dir, &result.affirmed, &self.config.json_filename)?;
            debug!("JSON bundle written to {}", json_path.display());
            output.json_path = Some(json_path);
        }

        Ok((result, output))
    }
}

/// `.txt` files directly inside `dir`, sorted by name; dotfiles are skipped
fn list_notes(dir: &Path) -> Result<Vec<(String, PathBuf)>, ExtractorError> {
    let mut notes = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        if filename.starts_with('.') {
            continue;
        }
        notes.push((filename, path));
    }
    notes.sort();
    Ok(notes)
}
