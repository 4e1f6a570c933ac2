use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::hackernews::parser::{count_rows, parse_front_page};
use crate::hackernews::source::ArticleSource;
use crate::models::Article;

pub const DEFAULT_FRONT_PAGE_URL: &str = "https://news.ycombinator.com/";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HackerNewsClient {
    client: Client,
    url: String,
}

impl HackerNewsClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("hntrends/0.1"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("text/html"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// One GET against the listing page. Any non-success status is fatal.
    pub async fn fetch_front_page(&self) -> Result<String> {
        tracing::info!("Fetching front page: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ArticleSource for HackerNewsClient {
    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        let html = self.fetch_front_page().await?;
        let articles = parse_front_page(&html)?;

        if articles.is_empty() && !html.trim().is_empty() {
            let rows = count_rows(&html)?;
            tracing::warn!(
                "Front page yielded no articles ({} listing rows); the markup may have changed",
                rows
            );
        } else {
            tracing::debug!("Parsed {} articles from {} bytes", articles.len(), html.len());
        }

        Ok(articles)
    }

    fn name(&self) -> &str {
        "Hacker News"
    }
}
