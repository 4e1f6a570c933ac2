use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::{Article, TrendReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "Unknown output format '{}', expected text, markdown or json",
                other
            ))),
        }
    }
}

pub fn render(report: &TrendReport, format: OutputFormat, show_articles: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(format_markdown(report, show_articles)),
        OutputFormat::Text => Ok(format_text(report, show_articles)),
    }
}

pub fn format_text(report: &TrendReport, show_articles: bool) -> String {
    let state = &report.state;
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Hacker News trends: {} ===\n",
        state.topic
    ));
    output.push_str(&format!(
        "Matched {} of {} front-page stories\n",
        state.filtered_articles.len(),
        state.raw_articles.len()
    ));

    if show_articles && !state.filtered_articles.is_empty() {
        output.push_str("\nStories:\n");
        for article in &state.filtered_articles {
            output.push_str(&format!("  - {}\n    {}\n", article.title, article.link));
        }
    }

    output.push_str(&format!("\n🔍 Analysis:\n{}\n", state.analysis.trim_end()));
    output.push_str(&format!("\n📰 Summary:\n{}\n", state.summary.trim_end()));

    output.push_str(&format!(
        "\nGenerated by {} ({}) on {}\n",
        report.provider,
        report.model,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

pub fn format_markdown(report: &TrendReport, show_articles: bool) -> String {
    let state = &report.state;
    let mut output = String::new();

    output.push_str(&format!(
        "# Hacker News trends: {}\n\n",
        escape_markdown(&state.topic)
    ));
    output.push_str(&format!(
        "_{} of {} front-page stories matched._\n\n",
        state.filtered_articles.len(),
        state.raw_articles.len()
    ));

    if show_articles && !state.filtered_articles.is_empty() {
        output.push_str("## Stories\n\n");
        for article in &state.filtered_articles {
            output.push_str(&format!("- {}\n", markdown_story(article)));
        }
        output.push('\n');
    }

    output.push_str("## Analysis\n\n");
    output.push_str(state.analysis.trim_end());
    output.push_str("\n\n## Summary\n\n");
    output.push_str(state.summary.trim_end());

    output.push_str(&format!(
        "\n\n---\n*Generated by {} ({}) on {}*\n",
        report.provider,
        report.model,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

// Relative hrefs (e.g. `item?id=1`) would resolve against the document, not HN.
fn markdown_story(article: &Article) -> String {
    let title = escape_markdown(&article.title);
    if article.is_relative() {
        format!("{} (`{}`)", title, article.link)
    } else {
        format!("[{}](<{}>)", title, article.link)
    }
}

fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']' | '*' | '_' | '`' | '<' | '>' | '#') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
