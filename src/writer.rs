use crate::models::Vacancy;
use crate::Result;
use std::fs::File;
use std::path::Path;

pub fn save_to_csv(vacancies: &[Vacancy], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    for vacancy in vacancies {
        writer.serialize(vacancy)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let vacancies = vec![Vacancy {
            title: Some("Python Developer".to_string()),
            company: Some("Acme".to_string()),
            salary: Some("1000-2000 USD".to_string()),
            location: None,
            description: "Python and AWS".to_string(),
            technologies: "Python, AWS".to_string(),
        }];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacancies.csv");
        save_to_csv(&vacancies, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("title,company,salary,location,description,technologies"));
        assert!(contents.contains("1000-2000 USD"));
        assert!(contents.contains("\"Python, AWS\""));
    }
}
