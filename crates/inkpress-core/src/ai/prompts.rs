//! Prompt text sent to the model

use super::summary::SummarizeOptions;

pub const SUMMARY_SYSTEM_PROMPT: &str = "\
You are a professional content editor. Expand the material you are given into a \
complete, readable article while keeping every fact accurate; do not invent events, \
numbers or quotes. Write in a natural human voice and avoid phrasing that reads as \
machine generated, such as stock openings, summaries that restate the obvious, or \
lists of empty adjectives.

Also produce:
- a title for the article;
- 3 to 5 keywords, each at most 4 characters long;
- an importance score from 0 to 100 with two decimal places.

Reply with a single JSON object of the form:
{\"title\": string, \"content\": string, \"keywords\": [string], \"score\": number}";

pub const TITLE_SYSTEM_PROMPT: &str = "\
You are a headline editor. Read the material, decide which title best captures its \
most important point, and reply with that one title only. The title must be at most \
10 characters long. Do not add quotes, numbering or explanations.";

pub fn summary_user_prompt(content: &str, options: &SummarizeOptions) -> String {
    format!(
        "Write the article in {language}. The expanded content must be at least \
{min_length} characters long.\n\nMaterial:\n{content}",
        language = options.language,
        min_length = options.min_length,
    )
}

pub fn title_user_prompt(content: &str, options: &SummarizeOptions) -> String {
    format!(
        "Write the title in {language}.\n\nMaterial:\n{content}",
        language = options.language,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_embeds_options() {
        let options = SummarizeOptions {
            language: "English".to_string(),
            min_length: 100,
        };
        let prompt = summary_user_prompt("Company ships new product", &options);

        assert!(prompt.contains("in English"));
        assert!(prompt.contains("at least 100 characters"));
        assert!(prompt.ends_with("Company ships new product"));
    }

    #[test]
    fn test_json_mode_prompt_mentions_json() {
        // JSON response mode is rejected unless the prompt asks for JSON
        assert!(SUMMARY_SYSTEM_PROMPT.contains("JSON"));
    }

    #[test]
    fn test_title_prompt_uses_default_language() {
        let prompt = title_user_prompt("公司发布新产品", &SummarizeOptions::default());
        assert!(prompt.contains("中文"));
        assert!(prompt.contains("公司发布新产品"));
    }
}
