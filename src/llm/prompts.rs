use crate::models::Article;

/// Analysis text used when no article matched the topic.
pub const NO_RELEVANT_ARTICLES: &str = "No relevant articles found.";

#[derive(Debug, Clone)]
pub struct AnalysisPrompt<'a> {
    pub topic: &'a str,
    pub articles: &'a [Article],
}

impl<'a> AnalysisPrompt<'a> {
    pub fn new(topic: &'a str, articles: &'a [Article]) -> Self {
        Self { topic, articles }
    }

    pub fn to_prompt(&self) -> String {
        let titles = self
            .articles
            .iter()
            .map(|a| format!("- {}", a.title))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "\nAnalyze the following Hacker News article titles about \"{}\".\n\
             \n\
             Tasks:\n\
             - Identify key trends\n\
             - Assess technical relevance\n\
             - Note overall sentiment\n\
             \n\
             Articles:\n\
             {}\n",
            self.topic, titles
        )
    }
}

#[derive(Debug, Clone)]
pub struct SummaryPrompt<'a> {
    pub analysis: &'a str,
}

impl<'a> SummaryPrompt<'a> {
    pub fn new(analysis: &'a str) -> Self {
        Self { analysis }
    }

    pub fn to_prompt(&self) -> String {
        format!(
            "Summarize the following analysis in 5–6 lines:\n\n{}",
            self.analysis
        )
    }
}
