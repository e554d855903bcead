//! Model and tokenizer loading utilities for Hugging Face Hub integration.
//!
//! Files are fetched through the blocking hub client and cached under
//! `$HF_HOME/hub` (default `~/.cache/huggingface/hub`), so only the first run
//! pays the download. `HF_ENDPOINT` overrides the hub URL.
//!
//! ## Main Types
//!
//! - [`HfLoader`] - Fetches a single file from a model repository
//! - [`TokenizerLoader`] - Loads `tokenizer.json`, or builds a WordPiece tokenizer from `vocab.txt`
//! - [`WeightsLoader`] - Locates `model.safetensors`, falling back to `pytorch_model.bin`

use anyhow::Context;
use hf_hub::api::sync::ApiBuilder;
use hf_hub::{Repo, RepoType};
use std::path::PathBuf;
use tokenizers::models::wordpiece::WordPiece;
use tokenizers::normalizers::BertNormalizer;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::processors::bert::BertProcessing;
use tokenizers::Tokenizer;

#[derive(Debug, Clone)]
pub struct HfLoader {
    pub repo: String,
    pub revision: String,
    pub filename: String,
}

impl HfLoader {
    pub fn new(repo: &str, revision: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            revision: revision.into(),
            filename: filename.into(),
        }
    }

    pub fn load(&self) -> anyhow::Result<PathBuf> {
        let hf_api = ApiBuilder::from_env()
            .with_progress(false)
            .build()
            .context("Failed to initialize Hugging Face Hub API")?;
        let hf_repo = hf_api.repo(Repo::with_revision(
            self.repo.clone(),
            RepoType::Model,
            self.revision.clone(),
        ));

        tracing::debug!(repo = %self.repo, file = %self.filename, "fetching from hub");

        hf_repo
            .get(&self.filename)
            .with_context(|| format!("Failed to download {} from {}", self.filename, self.repo))
    }
}

#[derive(Debug, Clone)]
pub struct WeightsLoader {
    pub safetensors_loader: HfLoader,
    pub pytorch_loader: HfLoader,
}

impl WeightsLoader {
    pub fn new(repo: &str, revision: &str) -> Self {
        Self {
            safetensors_loader: HfLoader::new(repo, revision, "model.safetensors"),
            pytorch_loader: HfLoader::new(repo, revision, "pytorch_model.bin"),
        }
    }

    pub fn load(&self) -> anyhow::Result<PathBuf> {
        match self.safetensors_loader.load() {
            Ok(path) => Ok(path),
            Err(safetensors_err) => {
                tracing::debug!("no safetensors weights ({safetensors_err:#}), trying pytorch_model.bin");
                self.pytorch_loader.load().context(
                    "Model weights not found in repo. Expected `model.safetensors` or `pytorch_model.bin`",
                )
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenizerLoader {
    pub tokenizer_file_loader: HfLoader,
    pub vocab_file_loader: HfLoader,
}

impl TokenizerLoader {
    pub fn new(repo: &str, revision: &str) -> Self {
        Self {
            tokenizer_file_loader: HfLoader::new(repo, revision, "tokenizer.json"),
            vocab_file_loader: HfLoader::new(repo, revision, "vocab.txt"),
        }
    }

    pub fn load(&self) -> anyhow::Result<Tokenizer> {
        if let Ok(tokenizer_file_path) = self.tokenizer_file_loader.load() {
            return Tokenizer::from_file(tokenizer_file_path).map_err(anyhow::Error::msg);
        }

        tracing::debug!("no tokenizer.json, building WordPiece tokenizer from vocab.txt");
        let vocab_path = self.vocab_file_loader.load()?;
        wordpiece_from_vocab(&vocab_path)
    }
}

/// Builds an uncased BERT tokenizer (lowercasing, accent stripping,
/// `[CLS] ... [SEP]` framing) from a plain `vocab.txt`.
pub fn wordpiece_from_vocab(vocab_path: &std::path::Path) -> anyhow::Result<Tokenizer> {
    let wordpiece = WordPiece::from_file(&vocab_path.to_string_lossy())
        .unk_token("[UNK]".to_string())
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build WordPiece model: {e}"))?;

    let mut tokenizer = Tokenizer::new(wordpiece);
    tokenizer.with_normalizer(Some(BertNormalizer::default()));
    tokenizer.with_pre_tokenizer(Some(BertPreTokenizer));

    let cls = special_token(&tokenizer, "[CLS]")?;
    let sep = special_token(&tokenizer, "[SEP]")?;
    tokenizer.with_post_processor(Some(BertProcessing::new(sep, cls)));

    Ok(tokenizer)
}

fn special_token(tokenizer: &Tokenizer, token: &str) -> anyhow::Result<(String, u32)> {
    let id = tokenizer
        .token_to_id(token)
        .ok_or_else(|| anyhow::anyhow!("Token '{token}' not found in vocabulary"))?;
    Ok((token.to_string(), id))
}
