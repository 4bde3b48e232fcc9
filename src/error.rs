use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("не вдалося прочитати файл зі списком технологій: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("не вдалося розібрати файл зі списком технологій: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("некоректна назва технології «{name}»: {source}")]
    Pattern { name: String, source: regex::Error },
}
