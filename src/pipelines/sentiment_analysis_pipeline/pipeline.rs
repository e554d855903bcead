use super::model::SentimentAnalysisModel;
use crate::invocation::TextClassifier;
use tokenizers::Tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    pub label: String,
    pub score: f32,
}

/// `<label> <score>`, score in the default float representation.
impl std::fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label, self.score)
    }
}

pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    /// Predict sentiment with structured result containing label and confidence score
    pub fn predict(&self, text: &str) -> anyhow::Result<SentimentResult> {
        self.predict_all(text)?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("model returned no labels"))
    }

    /// All candidate labels ranked by confidence, highest first.
    pub fn predict_all(&self, text: &str) -> anyhow::Result<Vec<SentimentResult>> {
        self.model.predict(&self.tokenizer, text)
    }

    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

impl<M: SentimentAnalysisModel> TextClassifier for SentimentAnalysisPipeline<M> {
    fn classify(&self, text: &str) -> anyhow::Result<Vec<SentimentResult>> {
        self.predict_all(text)
    }
}
