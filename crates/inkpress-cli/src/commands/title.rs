use anyhow::Result;

use inkpress_core::{SummarizeOptions, Summarizer};

pub async fn run(summarizer: &Summarizer, content: &str, options: &SummarizeOptions) -> Result<()> {
    let title = summarizer.generate_title(content, options).await?;
    println!("{}", title.trim());
    Ok(())
}
