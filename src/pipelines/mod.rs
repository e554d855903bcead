pub mod sentiment_analysis_pipeline;
pub mod utils;
