use super::model::SentimentAnalysisModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::models::implementations::bert::{SentimentBertModel, SentimentBertOptions};
use crate::pipelines::utils::DeviceRequest;

pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel> {
    options: M::Options,
    device_request: DeviceRequest,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self {
            options,
            device_request: DeviceRequest::Default,
        }
    }

    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    pub fn cuda_device(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    pub fn device(mut self, device: candle_core::Device) -> Self {
        self.device_request = DeviceRequest::Explicit(device);
        self
    }

    /// Resolves the device, then loads weights and tokenizer. Blocks until
    /// any missing files have been downloaded.
    pub fn build(self) -> anyhow::Result<SentimentAnalysisPipeline<M>> {
        let device = self.device_request.resolve()?;
        tracing::info!(options = ?self.options, "loading sentiment model");
        let model = M::new(self.options.clone(), device)?;
        let tokenizer = M::get_tokenizer(self.options)?;
        Ok(SentimentAnalysisPipeline { model, tokenizer })
    }
}

impl SentimentAnalysisPipelineBuilder<SentimentBertModel> {
    /// Builder bound to the multilingual 1-5 star review model.
    pub fn multilingual_bert() -> Self {
        Self::new(SentimentBertOptions::default())
    }
}
