pub mod implementations;

pub use implementations::{SentimentBertModel, SentimentBertOptions};
