use crate::crawler::VacancyDetailCrawler;
use crate::models::{Vacancy, VacancyStub};
use crate::writer::save_to_csv;
use crate::Result;

#[derive(Debug, Clone)]
pub struct DetailFetchConfig {
    /// Кількість потоків (і вкладок браузера) для збору деталей.
    pub thread_count: usize,
}

impl Default for DetailFetchConfig {
    fn default() -> Self {
        Self { thread_count: 4 }
    }
}

pub trait Crawler {
    fn start_crawl(&self) -> Result<Vec<VacancyStub>>;
}

pub struct CrawlPipeline;

#[must_use = "pipeline must end with .save() to execute"]
pub struct PipelineWithStubs<C> {
    stubs: Vec<VacancyStub>,
    client: C,
}

#[must_use = "pipeline must end with .save() to execute"]
pub struct PipelineWithVacancies {
    vacancies: Vec<Vacancy>,
}

impl CrawlPipeline {
    pub fn new() -> Self {
        Self
    }

    pub fn crawl<C>(self, client: C) -> Result<PipelineWithStubs<C>>
    where
        C: Crawler,
    {
        let stubs = client.start_crawl()?;
        Ok(PipelineWithStubs { stubs, client })
    }
}

impl Default for CrawlPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PipelineWithStubs<C>
where
    C: VacancyDetailCrawler,
{
    pub fn fetch_details(self, config: DetailFetchConfig) -> PipelineWithVacancies {
        println!("Збір описів вакансій розпочато..");
        match self.client.start_detail_crawl(self.stubs, config) {
            Ok(vacancies) => {
                println!("✅ Зібрано описи {} вакансій", vacancies.len());
                PipelineWithVacancies { vacancies }
            }
            Err(e) => {
                eprintln!("❌ Збір описів не вдався: {}", e);
                PipelineWithVacancies {
                    vacancies: Vec::new(),
                }
            }
        }
    }
}

impl PipelineWithVacancies {
    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    pub fn save(self, path: impl Into<String>) {
        let path = path.into();
        match save_to_csv(&self.vacancies, &path) {
            Ok(_) => println!("✅ csv збережено: {}", path),
            Err(e) => eprintln!("❌ не вдалося зберегти csv ({}): {}", path, e),
        }
    }
}
