use scraper::{Html, Selector};

use crate::error::{Error, Result};
use crate::models::Article;

const ROW_SELECTOR: &str = ".athing";
const TITLE_SELECTOR: &str = ".titleline a";

/// Extracts every listing row that carries a title link, in document order.
///
/// Rows without a title link, with a blank title, or without an href are
/// skipped. If the markup changes shape this returns fewer (or zero)
/// articles rather than an error.
pub fn parse_front_page(html: &str) -> Result<Vec<Article>> {
    let row_selector = selector(ROW_SELECTOR)?;
    let title_selector = selector(TITLE_SELECTOR)?;

    let document = Html::parse_document(html);

    let articles = document
        .select(&row_selector)
        .filter_map(|row| {
            let anchor = row.select(&title_selector).next()?;
            let href = anchor.value().attr("href")?;
            let text = anchor.text().collect::<String>();
            Article::new(&text, href)
        })
        .collect();

    Ok(articles)
}

/// Number of candidate rows in the markup, whether or not they yield an article.
pub fn count_rows(html: &str) -> Result<usize> {
    let row_selector = selector(ROW_SELECTOR)?;
    Ok(Html::parse_document(html).select(&row_selector).count())
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| Error::ParseError(format!("Invalid selector '{}': {}", css, e)))
}
