use crate::models::{Vacancy, VacancyStub};
use crate::pipeline::DetailFetchConfig;
use crate::Result;
use headless_chrome::{Browser, LaunchOptions, Tab};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use scraper::Html;
use std::collections::HashMap;
use std::ffi::OsString;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const EXPAND_WAIT_SECS: u64 = 10;

pub trait VacancyCrawler: Sync {
    fn create_browser(&self) -> Result<Browser> {
        let user_agent = OsString::from(format!("--user-agent={}", USER_AGENT));
        let no_automation = OsString::from("--disable-blink-features=AutomationControlled");

        Browser::new(LaunchOptions {
            headless: true,
            args: vec![&user_agent, &no_automation],
            ..Default::default()
        })
        .map_err(Into::into)
    }

    fn wait_for_list_page_load(&self, tab: &Arc<Tab>) -> Result<()>;

    fn wait_for_detail_page_load(&self, tab: &Arc<Tab>) -> Result<()>;
}

/// Список, який розгортається кнопкою «Більше вакансій».
pub trait VacancyListLoadMoreCrawler: VacancyCrawler {
    fn load_more_selector(&self) -> &str;

    fn expand_pause(&self) -> Duration;

    fn parse_stubs(&self, html: &str) -> Result<Vec<VacancyStub>>;

    /// Waits for the control to become interactable and clicks it once.
    /// Any failure here means the list is fully expanded.
    fn load_more(&self, tab: &Arc<Tab>) -> Result<()> {
        let button = tab.wait_for_element_with_custom_timeout(
            self.load_more_selector(),
            Duration::from_secs(EXPAND_WAIT_SECS),
        )?;
        button.click()?;
        std::thread::sleep(self.expand_pause());
        Ok(())
    }

    fn fetch_all_stubs(
        &self,
        browser: &Browser,
        url: &str,
        max_expansions: usize,
    ) -> Result<Vec<VacancyStub>> {
        let tab = browser.new_tab()?;
        tab.navigate_to(url)?;
        self.wait_for_list_page_load(&tab)?;

        for round in 0..max_expansions {
            if self.load_more(&tab).is_err() {
                println!("Кнопка «Більше вакансій» недоступна, список повний");
                break;
            }
            println!("Список розгорнуто ({}/{})", round + 1, max_expansions);
        }

        let html = tab.get_content()?;
        self.parse_stubs(&html)
    }
}

pub trait VacancyDetailCrawler: VacancyCrawler {
    fn fetch_vacancy(&self, tab: &Arc<Tab>, stub: &VacancyStub) -> Result<Vacancy>;

    fn start_detail_crawl(
        &self,
        stubs: Vec<VacancyStub>,
        config: DetailFetchConfig,
    ) -> Result<Vec<Vacancy>> {
        let browser = self.create_browser()?;
        self.fetch_all_details(&browser, stubs, config.thread_count)
    }

    fn fetch_all_details(
        &self,
        browser: &Browser,
        stubs: Vec<VacancyStub>,
        thread_count: usize,
    ) -> Result<Vec<Vacancy>> {
        let mut tabs_map = HashMap::new();
        for i in 0..thread_count {
            tabs_map.insert(i, browser.new_tab()?);
        }
        let tabs = tabs_map;
        let pool = ThreadPoolBuilder::new().num_threads(thread_count).build()?;

        let vacancies = pool.install(|| {
            stubs
                .into_par_iter()
                .filter_map(|stub| {
                    let thread_idx = rayon::current_thread_index().unwrap();
                    let tab = &tabs[&thread_idx];

                    match self.fetch_vacancy(tab, &stub) {
                        Ok(vacancy) => {
                            println!("[потік {}] готово: {}", thread_idx, stub.url);
                            Some(vacancy)
                        }
                        Err(e) => {
                            eprintln!("[потік {}] не вдалося ({}): {}", thread_idx, stub.url, e);
                            None
                        }
                    }
                })
                .collect()
        });

        Ok(vacancies)
    }
}

/// Витяг окремих полів зі сторінок сайту. Селектори живуть у клієнтах.
pub trait VacancyFieldExtractor {
    fn extract_url(&self, fragment: &Html) -> Option<String>;

    fn extract_salary(&self, fragment: &Html) -> Option<String>;

    fn extract_location(&self, fragment: &Html) -> Option<String>;

    fn extract_title(&self, document: &Html) -> Option<String>;

    fn extract_company(&self, document: &Html) -> Option<String>;

    fn extract_description(&self, document: &Html) -> Option<String>;
}
