use thiserror::Error;

/// Faults that end a classification run.
///
/// Library code works with `anyhow::Result`; the kind is attached once the
/// failing step is known, so the process can pick an exit status from it.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// No text argument was supplied.
    #[error("missing text argument: usage is `analyze <TEXT>`")]
    MissingArgument,

    /// The argument list could not be read (for example non UTF-8 text).
    #[error("invalid text argument")]
    InvalidArgument(#[source] clap::Error),

    /// The pretrained classifier could not be constructed.
    #[error("failed to load sentiment model")]
    ModelLoad(#[source] anyhow::Error),

    /// The forward pass failed for the given input.
    #[error("sentiment inference failed")]
    Inference(#[source] anyhow::Error),

    /// The result line could not be written to stdout.
    #[error("failed to write result")]
    Output(#[source] std::io::Error),
}

impl SentimentError {
    /// Process exit status for this fault.
    pub fn exit_code(&self) -> u8 {
        match self {
            SentimentError::MissingArgument | SentimentError::InvalidArgument(_) => 2,
            SentimentError::ModelLoad(_) => 3,
            SentimentError::Inference(_) => 4,
            SentimentError::Output(_) => 1,
        }
    }
}
