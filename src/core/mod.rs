pub mod error;

pub use error::SentimentError;
