use crate::models::Article;

/// Keeps the articles whose title contains `topic`, ignoring case, in input order.
pub fn filter_articles(articles: &[Article], topic: &str) -> Vec<Article> {
    let topic = topic.to_lowercase();

    articles
        .iter()
        .filter(|a| a.title.to_lowercase().contains(&topic))
        .cloned()
        .collect()
}
