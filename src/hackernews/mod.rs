pub mod client;
pub mod parser;
pub mod source;

pub use client::HackerNewsClient;
pub use parser::parse_front_page;
pub use source::ArticleSource;
