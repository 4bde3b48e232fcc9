pub mod clients;
pub mod crawler;
pub mod error;
pub mod matcher;
pub mod models;
pub mod pipeline;
pub mod writer;

pub use clients::{DouClient, DouCrawlConfig, DouJobCategory};
pub use crawler::{VacancyCrawler, VacancyDetailCrawler, VacancyFieldExtractor, VacancyListLoadMoreCrawler};
pub use error::CrawlError;
pub use matcher::TechnologyMatcher;
pub use models::{Vacancy, VacancyStub};
pub use pipeline::{CrawlPipeline, Crawler, DetailFetchConfig};
pub use writer::save_to_csv;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
