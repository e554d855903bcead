//! One classification run: acquire the classifier, read the text argument,
//! infer, keep the top candidate and print it.

use crate::core::SentimentError;
use crate::pipelines::sentiment_analysis_pipeline::SentimentResult;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;

/// Anything that maps text to labels ranked by confidence, highest first.
pub trait TextClassifier {
    fn classify(&self, text: &str) -> anyhow::Result<Vec<SentimentResult>>;
}

/// `analyze <TEXT>`
///
/// No flags: text such as `-_-`, `--help` or `--` is classified like any other.
#[derive(Debug, Parser)]
#[command(
    name = "analyze",
    about = "Print the sentiment label and confidence of one piece of text",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Text to classify.
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// Parses the full argument list, program name first.
    ///
    /// Everything after the program name is positional, so a leading `--`
    /// is the text itself rather than an end-of-options marker.
    pub fn from_args<I, T>(args: I) -> Result<Self, SentimentError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next();
        let argv = program
            .into_iter()
            .chain(std::iter::once(OsString::from("--")))
            .chain(args);

        let cli = Cli::try_parse_from(argv).map_err(|err| match err.kind() {
            ErrorKind::MissingRequiredArgument => SentimentError::MissingArgument,
            _ => SentimentError::InvalidArgument(err),
        })?;

        if !cli.extra.is_empty() {
            tracing::warn!(count = cli.extra.len(), "ignoring extra arguments");
        }

        Ok(cli)
    }
}

/// Runs the fixed sequence for one process.
///
/// `load` is called before the arguments are looked at, so the model is
/// acquired even when the text turns out to be missing.
pub fn run<C, L, I, T, W>(load: L, args: I, out: &mut W) -> Result<SentimentResult, SentimentError>
where
    C: TextClassifier,
    L: FnOnce() -> anyhow::Result<C>,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let classifier = load().map_err(SentimentError::ModelLoad)?;
    let cli = Cli::from_args(args)?;
    classify_and_report(&classifier, &cli.text, out)
}

/// Classifies `text` and writes `<label> <score>` as a single line.
pub fn classify_and_report<C, W>(
    classifier: &C,
    text: &str,
    out: &mut W,
) -> Result<SentimentResult, SentimentError>
where
    C: TextClassifier + ?Sized,
    W: Write,
{
    let top = classifier
        .classify(text)
        .map_err(SentimentError::Inference)?
        .into_iter()
        .next()
        .ok_or_else(|| SentimentError::Inference(anyhow::anyhow!("classifier returned no labels")))?;

    tracing::debug!(label = %top.label, score = top.score, "classified");

    writeln!(out, "{top}")
        .and_then(|_| out.flush())
        .map_err(SentimentError::Output)?;

    Ok(top)
}
