//! Sentiment analysis pipeline for rating the tone of short texts.
//!
//! The bundled model scores text in any of its training languages on a
//! 1 to 5 star scale, which suits product reviews and social media comments.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - High-level interface for sentiment classification
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`SentimentAnalysisModel`] - Trait for sentiment analysis model implementations
//! - [`SentimentResult`] - A label with its confidence score
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;
//!
//! let pipeline = SentimentAnalysisPipelineBuilder::multilingual_bert().build()?;
//!
//! let result = pipeline.predict("Me encanta este producto")?;
//! println!("Sentiment: {} (confidence: {:.2})", result.label, result.score);
//! # anyhow::Ok(())
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::SentimentAnalysisModel;
pub use pipeline::{SentimentAnalysisPipeline, SentimentResult};

pub use crate::models::implementations::bert::{SentimentBertModel, SentimentBertOptions};

pub use anyhow::Result;
