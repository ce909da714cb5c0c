pub mod crawl;
pub mod error;
pub mod extract;
pub mod source;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use crawl::{CrawlReport, Crawler};
pub use error::CoreError;
