//! BERT sequence classification for sentiment analysis.
//!
//! The encoder comes from `candle-transformers`; the pooler and the linear
//! classification head are loaded here from the same checkpoint, matching the
//! `BertForSequenceClassification` weight layout:
//!
//! - `bert.embeddings.*`, `bert.encoder.*` - encoder
//! - `bert.pooler.dense` - tanh projection of the `[CLS]` hidden state
//! - `classifier` - hidden size to number of labels
//!
//! # Quick Start
//! ```rust,no_run
//! use candle_core::Device;
//! use sentiment_analyzer::models::implementations::bert::{SentimentBertModel, SentimentBertOptions};
//! use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::SentimentAnalysisModel;
//!
//! let options = SentimentBertOptions::default();
//! let model = SentimentBertModel::new(options.clone(), Device::Cpu)?;
//! let tokenizer = SentimentBertModel::get_tokenizer(options)?;
//! let ranked = model.predict(&tokenizer, "Odio este servicio")?;
//! println!("{}", ranked[0]);
//! # anyhow::Ok(())
//! ```

use crate::loaders::{HfLoader, TokenizerLoader, WeightsLoader};
use crate::pipelines::sentiment_analysis_pipeline::{SentimentAnalysisModel, SentimentResult};
use anyhow::Context;
use candle_core::{DType, Device, IndexOp, Tensor, D};
use candle_nn::{linear, ops::softmax, Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokenizers::{Encoding, Tokenizer};

/// Multilingual (en, nl, de, fr, es, it) review model predicting 1 to 5 stars.
pub const DEFAULT_MODEL_ID: &str = "nlptown/bert-base-multilingual-uncased-sentiment";

/// The part of `config.json` the classification head needs.
#[derive(Debug, Clone, Deserialize)]
struct ClassificationHeadConfig {
    hidden_size: usize,
    max_position_embeddings: usize,
    id2label: HashMap<String, String>,
}

pub struct BertForSequenceClassification {
    bert: BertModel,
    pooler: Linear,
    classifier: Linear,
    span: tracing::Span,
}

impl BertForSequenceClassification {
    pub fn load(
        vb: VarBuilder,
        config: &BertConfig,
        hidden_size: usize,
        num_labels: usize,
    ) -> candle_core::Result<Self> {
        let pooler = linear(hidden_size, hidden_size, vb.pp("bert").pp("pooler").pp("dense"))?;
        let classifier = linear(hidden_size, num_labels, vb.pp("classifier"))?;
        let bert = BertModel::load(vb.pp("bert"), config)?;
        let span = tracing::span!(tracing::Level::TRACE, "bert-classifier");

        Ok(Self {
            bert,
            pooler,
            classifier,
            span,
        })
    }

    /// Returns logits of shape `(batch, num_labels)`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> candle_core::Result<Tensor> {
        let _enter = self.span.enter();
        let hidden_states = self
            .bert
            .forward(input_ids, token_type_ids, Some(attention_mask))?;
        let cls = hidden_states.i((.., 0))?;
        let pooled = self.pooler.forward(&cls)?.tanh()?;
        self.classifier.forward(&pooled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentBertOptions {
    pub model_id: String,
    pub revision: String,
}

impl Default for SentimentBertOptions {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            revision: "main".to_string(),
        }
    }
}

pub struct SentimentBertModel {
    model: BertForSequenceClassification,
    device: Device,
    labels: Vec<String>,
    max_position_embeddings: usize,
}

impl SentimentAnalysisModel for SentimentBertModel {
    type Options = SentimentBertOptions;

    fn new(options: Self::Options, device: Device) -> anyhow::Result<Self> {
        let config_filename =
            HfLoader::new(&options.model_id, &options.revision, "config.json").load()?;
        let weights_filename = WeightsLoader::new(&options.model_id, &options.revision).load()?;

        let config_content = std::fs::read_to_string(&config_filename)
            .with_context(|| format!("Failed to read config file {config_filename:?}"))?;
        let head_config: ClassificationHeadConfig = serde_json::from_str(&config_content)
            .context("Failed to parse classifier config")?;
        let bert_config: BertConfig =
            serde_json::from_str(&config_content).context("Failed to parse BERT config")?;

        let labels = labels_from_id2label(&head_config.id2label)?;

        let vb = load_var_builder(&weights_filename, &device)?;
        let model = BertForSequenceClassification::load(
            vb,
            &bert_config,
            head_config.hidden_size,
            labels.len(),
        )
        .context("Failed to construct BERT classifier")?;

        tracing::info!(
            model = %options.model_id,
            labels = labels.len(),
            "sentiment model ready"
        );

        Ok(Self {
            model,
            device,
            labels,
            max_position_embeddings: head_config.max_position_embeddings,
        })
    }

    fn predict(&self, tokenizer: &Tokenizer, text: &str) -> anyhow::Result<Vec<SentimentResult>> {
        let encoding = encode_within_limit(tokenizer, text, self.max_position_embeddings)?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = self
            .model
            .forward(&input_ids, &token_type_ids, &attention_mask)?;
        let probabilities = softmax(&logits, D::Minus1)?
            .squeeze(0)?
            .to_dtype(DType::F32)?
            .to_vec1::<f32>()?;

        rank_labels(&self.labels, &probabilities)
    }

    fn get_tokenizer(options: Self::Options) -> anyhow::Result<Tokenizer> {
        let mut tokenizer = TokenizerLoader::new(&options.model_id, &options.revision).load()?;
        // Over-long input must fail rather than be cut short.
        tokenizer
            .with_truncation(None)
            .map_err(|e| anyhow::anyhow!("Failed to disable truncation: {e}"))?;
        tokenizer.with_padding(None);
        Ok(tokenizer)
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

fn load_var_builder(weights_filename: &Path, device: &Device) -> anyhow::Result<VarBuilder<'static>> {
    let dtype = DType::F32;
    let vb = match weights_filename.extension().and_then(|ext| ext.to_str()) {
        Some("safetensors") => unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_filename], dtype, device)?
        },
        Some("bin") => VarBuilder::from_pth(weights_filename, dtype, device)?,
        _ => anyhow::bail!("Unsupported weight file format: {:?}", weights_filename),
    };
    Ok(vb)
}

/// Orders `id2label` by class index. Indices must run `0..n` without gaps.
fn labels_from_id2label(id2label: &HashMap<String, String>) -> anyhow::Result<Vec<String>> {
    if id2label.is_empty() {
        anyhow::bail!("config.json has an empty id2label mapping");
    }

    let mut entries = id2label
        .iter()
        .map(|(id, label)| {
            id.parse::<usize>()
                .map(|id| (id, label.clone()))
                .with_context(|| format!("Invalid class index {id:?} in id2label"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    entries.sort_by_key(|(id, _)| *id);

    if let Some((position, (id, _))) = entries.iter().enumerate().find(|(i, (id, _))| i != id) {
        anyhow::bail!("id2label is missing class index {position} (found {id})");
    }

    Ok(entries.into_iter().map(|(_, label)| label).collect())
}

/// Encodes `text` with special tokens, failing when the result is longer than
/// `max_len` positions. Nothing is truncated.
fn encode_within_limit(tokenizer: &Tokenizer, text: &str, max_len: usize) -> anyhow::Result<Encoding> {
    let encoding = tokenizer
        .encode(text, true)
        .map_err(|e| anyhow::anyhow!("Failed to tokenize input: {e}"))?;

    let seq_len = encoding.get_ids().len();
    if seq_len > max_len {
        anyhow::bail!("input is {seq_len} tokens long, the model accepts at most {max_len}");
    }

    Ok(encoding)
}

/// Pairs labels with probabilities, highest first. Equal scores keep class order.
fn rank_labels(labels: &[String], probabilities: &[f32]) -> anyhow::Result<Vec<SentimentResult>> {
    if labels.len() != probabilities.len() {
        anyhow::bail!(
            "model produced {} scores for {} labels",
            probabilities.len(),
            labels.len()
        );
    }

    let mut ranked: Vec<SentimentResult> = labels
        .iter()
        .zip(probabilities)
        .map(|(label, &score)| SentimentResult {
            label: label.clone(),
            score,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(ranked)
}
