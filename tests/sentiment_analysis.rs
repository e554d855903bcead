// Integration tests for the sentiment analysis pipeline against the real
// model. They download the weights from the Hugging Face Hub on first run:
// `cargo test -- --ignored`.

use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;

const STAR_LABELS: [&str; 5] = ["1 star", "2 stars", "3 stars", "4 stars", "5 stars"];

fn pipeline() -> anyhow::Result<SentimentAnalysisPipeline<SentimentBertModel>> {
    SentimentAnalysisPipelineBuilder::multilingual_bert().cpu().build()
}

#[test]
#[ignore = "downloads model weights"]
fn positive_spanish_comment() -> anyhow::Result<()> {
    let res = pipeline()?.predict("Me encanta este producto")?;
    assert!(res.label == "4 stars" || res.label == "5 stars", "got {res}");
    assert!((0.0..=1.0).contains(&res.score));
    Ok(())
}

#[test]
#[ignore = "downloads model weights"]
fn negative_spanish_comment() -> anyhow::Result<()> {
    let res = pipeline()?.predict("Odio este servicio")?;
    assert!(res.label == "1 star" || res.label == "2 stars", "got {res}");
    assert!((0.0..=1.0).contains(&res.score));
    Ok(())
}

#[test]
#[ignore = "downloads model weights"]
fn ranked_labels_cover_the_star_scale() -> anyhow::Result<()> {
    let ranked = pipeline()?.predict_all("The delivery was on time")?;
    assert_eq!(ranked.len(), STAR_LABELS.len());
    for label in STAR_LABELS {
        assert!(ranked.iter().any(|r| r.label == label));
    }
    let total: f32 = ranked.iter().map(|r| r.score).sum();
    assert!((total - 1.0).abs() < 1e-3);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    Ok(())
}

#[test]
#[ignore = "downloads model weights"]
fn same_text_same_label() -> anyhow::Result<()> {
    let pipeline = pipeline()?;
    let first = pipeline.predict("Muy buena calidad, lo recomiendo")?;
    let second = pipeline.predict("Muy buena calidad, lo recomiendo")?;
    assert_eq!(first.label, second.label);
    Ok(())
}

#[test]
#[ignore = "downloads model weights"]
fn empty_text_is_classified() -> anyhow::Result<()> {
    let res = pipeline()?.predict("")?;
    assert!(STAR_LABELS.contains(&res.label.as_str()));
    Ok(())
}

#[test]
#[ignore = "downloads model weights"]
fn over_long_text_is_rejected() -> anyhow::Result<()> {
    let text = "producto ".repeat(2000);
    assert!(pipeline()?.predict(&text).is_err());
    Ok(())
}
