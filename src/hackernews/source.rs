use async_trait::async_trait;

use crate::error::Result;
use crate::models::Article;

/// Where the pipeline gets its listing from.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_articles(&self) -> Result<Vec<Article>>;
    fn name(&self) -> &str;
}
