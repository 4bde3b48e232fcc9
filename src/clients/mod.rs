pub mod dou;

pub use dou::{DouClient, DouCrawlConfig, DouJobCategory};
