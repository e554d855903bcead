pub mod core;
pub mod invocation;
pub mod loaders;
pub mod logging;
pub mod models;
pub mod pipelines;

// Re-export core types
pub use self::core::SentimentError;
pub use invocation::{run, TextClassifier};

// Re-export model types for easier access
pub use models::implementations::{SentimentBertModel, SentimentBertOptions};
pub use pipelines::sentiment_analysis_pipeline::{
    SentimentAnalysisPipeline, SentimentAnalysisPipelineBuilder, SentimentResult,
};
