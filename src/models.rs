use serde::Serialize;

/// Один запис зі списку вакансій до відвідування сторінки деталей.
#[derive(Debug, Clone)]
pub struct VacancyStub {
    pub url: String,
    pub salary: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Vacancy {
    pub title: Option<String>,
    pub company: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub description: String,
    pub technologies: String,
}
