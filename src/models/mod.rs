pub mod article;
pub mod state;
pub mod report;

pub use article::*;
pub use state::*;
pub use report::*;
