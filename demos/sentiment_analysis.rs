use anyhow::Result;
use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;

fn main() -> Result<()> {
    println!("Building pipeline...");

    let pipeline = SentimentAnalysisPipelineBuilder::multilingual_bert().build()?;

    println!("Pipeline built successfully.");

    for text in ["Me encanta este producto", "Odio este servicio", "Ça va, sans plus"] {
        let ranked = pipeline.predict_all(text)?;

        println!("\n=== Sentiment Analysis Result ===");
        println!("Text: \"{}\"", text);
        for result in &ranked {
            println!("  {:<8} {:.4}", result.label, result.score);
        }
    }

    Ok(())
}
