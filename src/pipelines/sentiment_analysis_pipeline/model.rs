use super::pipeline::SentimentResult;
use tokenizers::Tokenizer;

pub trait SentimentAnalysisModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: candle_core::Device) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Every label with its probability, highest first.
    fn predict(&self, tokenizer: &Tokenizer, text: &str) -> anyhow::Result<Vec<SentimentResult>>;

    fn get_tokenizer(options: Self::Options) -> anyhow::Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}
