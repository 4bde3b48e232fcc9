use crate::crawler::{
    VacancyCrawler, VacancyDetailCrawler, VacancyFieldExtractor, VacancyListLoadMoreCrawler,
};
use crate::matcher::TechnologyMatcher;
use crate::models::{Vacancy, VacancyStub};
use crate::pipeline::Crawler;
use crate::Result;
use headless_chrome::Tab;
use rand::prelude::IndexedRandom;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DouCrawlConfig {
    pub category: DouJobCategory,
    /// Скільки разів максимум натискати «Більше вакансій».
    pub max_expansions: usize,
    /// Пауза після кожного натискання, мс.
    pub expand_pause_ms: u64,
}

impl Default for DouCrawlConfig {
    fn default() -> Self {
        Self {
            category: DouJobCategory::Python,
            max_expansions: 100,
            expand_pause_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum DouJobCategory {
    Python,
    Java,
    Golang,
    DevOps,
    QA,
}

impl DouJobCategory {
    pub fn to_query(&self) -> &str {
        match self {
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Golang => "Golang",
            Self::DevOps => "DevOps",
            Self::QA => "QA",
        }
    }
}

pub struct DouClient {
    base_url: String,
    config: DouCrawlConfig,
    matcher: TechnologyMatcher,
}

impl DouClient {
    pub fn new(config: DouCrawlConfig, matcher: TechnologyMatcher) -> Self {
        Self {
            base_url: "https://jobs.dou.ua".to_string(),
            config,
            matcher,
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{}/vacancies/?category={}",
            self.base_url,
            self.config.category.to_query()
        )
    }

    fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}

impl Crawler for DouClient {
    fn start_crawl(&self) -> Result<Vec<VacancyStub>> {
        let url = self.build_url();
        let browser = self
            .create_browser()
            .inspect_err(|e| eprintln!("❌ Не вдалося запустити браузер: {}", e))?;

        println!("Збір списку вакансій DOU розпочато..");
        self.fetch_all_stubs(&browser, &url, self.config.max_expansions)
            .inspect(|stubs| println!("✅ У списку знайдено {} вакансій", stubs.len()))
            .inspect_err(|e| eprintln!("❌ Збір списку вакансій не вдався: {}", e))
    }
}

impl VacancyCrawler for DouClient {
    fn wait_for_list_page_load(&self, tab: &Arc<Tab>) -> Result<()> {
        tab.wait_for_element(".l-vacancy")?;
        Ok(())
    }

    fn wait_for_detail_page_load(&self, tab: &Arc<Tab>) -> Result<()> {
        tab.wait_for_element("body")?;
        Ok(())
    }
}

impl VacancyListLoadMoreCrawler for DouClient {
    fn load_more_selector(&self) -> &str {
        ".more-btn a"
    }

    fn expand_pause(&self) -> Duration {
        Duration::from_millis(self.config.expand_pause_ms)
    }

    fn parse_stubs(&self, html: &str) -> Result<Vec<VacancyStub>> {
        let document = Html::parse_document(html);
        let card_selector = Selector::parse(".l-vacancy").unwrap();

        let stubs = document
            .select(&card_selector)
            .filter_map(|card| {
                let card_fragment = Html::parse_fragment(&card.html());

                // A card without a link leads nowhere, drop it.
                let url = self.extract_url(&card_fragment)?;
                let salary = self.extract_salary(&card_fragment);
                let location = self.extract_location(&card_fragment);

                Some(VacancyStub {
                    url,
                    salary,
                    location,
                })
            })
            .collect();

        Ok(stubs)
    }
}

impl VacancyDetailCrawler for DouClient {
    fn fetch_vacancy(&self, tab: &Arc<Tab>, stub: &VacancyStub) -> Result<Vacancy> {
        tab.navigate_to(&stub.url)?;
        self.wait_for_detail_page_load(tab)?;

        let html = tab.get_content()?;
        let document = Html::parse_document(&html);

        let description = self.extract_description(&document).unwrap_or_default();
        let technologies = self.matcher.extract(&description);

        polite_delay();

        Ok(Vacancy {
            title: self.extract_title(&document),
            company: self.extract_company(&document),
            salary: stub.salary.clone(),
            location: stub.location.clone(),
            description,
            technologies,
        })
    }
}

impl VacancyFieldExtractor for DouClient {
    fn extract_url(&self, fragment: &Html) -> Option<String> {
        let anchor_selector = Selector::parse("a").ok()?;
        let href = fragment
            .select(&anchor_selector)
            .next()?
            .value()
            .attr("href")?;
        Some(self.absolutize(href))
    }

    fn extract_salary(&self, fragment: &Html) -> Option<String> {
        let salary_selector = Selector::parse("span.salary").ok()?;
        let text = fragment
            .select(&salary_selector)
            .next()?
            .text()
            .collect::<String>()
            .trim()
            .to_string();
        if text.is_empty() { None } else { Some(text) }
    }

    fn extract_location(&self, fragment: &Html) -> Option<String> {
        let cities_selector = Selector::parse("span.cities").ok()?;
        let text = fragment
            .select(&cities_selector)
            .next()?
            .text()
            .collect::<String>()
            .trim()
            .to_string();
        if text.is_empty() { None } else { Some(text) }
    }

    fn extract_title(&self, document: &Html) -> Option<String> {
        let title_selector = Selector::parse(".g-h2").ok()?;
        let text = document
            .select(&title_selector)
            .next()?
            .text()
            .collect::<String>()
            .trim()
            .to_string();
        if text.is_empty() { None } else { Some(text) }
    }

    fn extract_company(&self, document: &Html) -> Option<String> {
        let company_selector = Selector::parse(".l-n > a").ok()?;
        let text = document
            .select(&company_selector)
            .next()?
            .text()
            .collect::<String>()
            .trim()
            .to_string();
        if text.is_empty() { None } else { Some(text) }
    }

    fn extract_description(&self, document: &Html) -> Option<String> {
        let section_selector = Selector::parse("div.b-typo.vacancy-section").ok()?;
        let section = document.select(&section_selector).next()?;

        let description = section
            .text()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .replace('\u{a0}', " ");

        Some(description)
    }
}

fn polite_delay() {
    let delays = [400, 700, 1000];
    let delay = delays.choose(&mut rand::rng()).unwrap();
    std::thread::sleep(Duration::from_millis(*delay));
}
