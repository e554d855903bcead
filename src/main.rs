use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::SentimentAnalysisPipelineBuilder;
use sentiment_analyzer::{logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let stdout = std::io::stdout();
    let result = run(
        || SentimentAnalysisPipelineBuilder::multilingual_bert().build(),
        std::env::args_os(),
        &mut stdout.lock(),
    );

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("Error: {:?}", anyhow::Error::from(err));
            ExitCode::from(code)
        }
    }
}
