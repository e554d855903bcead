pub mod bert;

pub use bert::{SentimentBertModel, SentimentBertOptions};
