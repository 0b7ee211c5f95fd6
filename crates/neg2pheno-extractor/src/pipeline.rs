//! Ordered annotation pipeline

use crate::error::ExtractorError;
use crate::tokenizer::Tokenizer;
use neg2pheno_domain::traits::PipelineStage;
use neg2pheno_domain::AnnotatedDocument;
use tracing::debug;

/// Default maximum document length in characters
pub const DEFAULT_MAX_LENGTH: usize = 2_000_000;

/// A tokenizer followed by named stages run in order
pub struct Pipeline {
    tokenizer: Tokenizer,
    stages: Vec<Box<dyn PipelineStage>>,
    max_length: usize,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            stages: Vec::new(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Set the maximum accepted document length in characters
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// The tokenizer shared by every stage
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Maximum accepted document length in characters
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Whether a stage with this name is installed
    pub fn has_stage(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Append a stage at the end
    pub fn add_stage(&mut self, stage: Box<dyn PipelineStage>) -> Result<(), ExtractorError> {
        self.ensure_unique(stage.name())?;
        debug!("Adding stage '{}' at end of pipeline", stage.name());
        self.stages.push(stage);
        Ok(())
    }

    /// Insert a stage immediately before the stage named `before`
    pub fn add_stage_before(
        &mut self,
        before: &str,
        stage: Box<dyn PipelineStage>,
    ) -> Result<(), ExtractorError> {
        self.ensure_unique(stage.name())?;
        let idx = self.position(before).ok_or_else(|| {
            ExtractorError::Pipeline(format!("no stage named '{}' in pipeline", before))
        })?;
        debug!("Adding stage '{}' before '{}'", stage.name(), before);
        self.stages.insert(idx, stage);
        Ok(())
    }

    /// Tokenize and run every stage over the text
    pub fn process(&self, text: &str) -> Result<AnnotatedDocument, ExtractorError> {
        let length = text.chars().count();
        if length > self.max_length {
            return Err(ExtractorError::TextTooLong(length, self.max_length));
        }

        let mut doc = self.tokenizer.make_doc(text);
        for stage in &self.stages {
            stage.process(&mut doc);
        }
        Ok(doc)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.name() == name)
    }

    fn ensure_unique(&self, name: &str) -> Result<(), ExtractorError> {
        if self.has_stage(name) {
            return Err(ExtractorError::Pipeline(format!(
                "stage '{}' already exists in pipeline",
                name
            )));
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Tokenizer::new())
    }
}
