use dou_crawler::{
    CrawlPipeline, DetailFetchConfig, DouClient, DouCrawlConfig, DouJobCategory, Result,
    TechnologyMatcher,
};

const TECHNOLOGY_TAGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/technology_tags.json");

fn main() -> Result<()> {
    let matcher = TechnologyMatcher::from_config_file(TECHNOLOGY_TAGS)?;

    CrawlPipeline::new()
        .crawl(DouClient::new(
            DouCrawlConfig {
                category: DouJobCategory::Python,
                max_expansions: 60,
                expand_pause_ms: 500,
            },
            matcher,
        ))?
        .fetch_details(DetailFetchConfig { thread_count: 4 })
        .save("vacancies.csv");

    Ok(())
}
