use anyhow::Result;

use inkpress_core::{SummarizeOptions, Summarizer};

pub async fn run(summarizer: &Summarizer, content: &str, options: &SummarizeOptions, json: bool) -> Result<()> {
    let summary = summarizer.summarize(content, options).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", summary.title);
    println!("Keywords: {}", summary.keywords.join(", "));
    println!("Score: {:.2}", summary.score);
    println!();
    println!("{}", summary.content);

    Ok(())
}
