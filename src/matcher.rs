use crate::error::CrawlError;
use crate::Result;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::path::Path;

/// Значення поля `technologies`, коли опис вакансії порожній.
pub const NO_DESCRIPTION: &str = "NaN";

#[derive(Debug, Deserialize)]
struct TechnologyConfig {
    #[serde(default)]
    technologies: Vec<String>,
}

pub struct TechnologyMatcher {
    patterns: Vec<(String, Regex)>,
}

impl TechnologyMatcher {
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(CrawlError::ConfigRead)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: TechnologyConfig =
            serde_json::from_str(raw).map_err(CrawlError::ConfigParse)?;
        Self::from_names(config.technologies)
    }

    pub fn from_names(names: Vec<String>) -> Result<Self> {
        let patterns = names
            .into_iter()
            .map(|name| {
                // \b never closes a match for names ending in a symbol
                // ("C++", "C#"), so the boundaries are spelled out.
                let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(&name));
                let regex = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| CrawlError::Pattern {
                        name: name.clone(),
                        source,
                    })?;
                Ok((name, regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Повертає список технологій зі словника, згаданих в описі,
    /// у порядку словника.
    pub fn extract(&self, description: &str) -> String {
        if description.is_empty() {
            return NO_DESCRIPTION.to_string();
        }

        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(description))
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn matcher(names: &[&str]) -> TechnologyMatcher {
        TechnologyMatcher::from_names(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn empty_description_returns_sentinel() {
        let m = matcher(&["Python"]);
        assert_eq!(m.extract(""), "NaN");
    }

    #[test]
    fn empty_vocabulary_matches_nothing() {
        let m = matcher(&[]);
        assert_eq!(m.extract("Python developer wanted"), "");
    }

    #[test]
    fn matches_whole_words_case_insensitively() {
        let m = matcher(&["Go"]);
        assert_eq!(m.extract("I use Go daily"), "Go");
        assert_eq!(m.extract("i use gO daily"), "Go");
        assert_eq!(m.extract("Golang rocks"), "");
    }

    #[test]
    fn keeps_vocabulary_order_not_text_order() {
        let m = matcher(&["C++", "Python"]);
        assert_eq!(m.extract("Python and C++"), "C++, Python");
    }

    #[test]
    fn unmentioned_entries_are_left_out() {
        let m = matcher(&["Python", "Django", "AWS"]);
        let description = "We build Python services on AWS.";
        assert_eq!(m.extract(description), "Python, AWS");
    }

    #[test]
    fn metacharacters_are_taken_literally() {
        let m = matcher(&["Node.js"]);
        assert_eq!(m.extract("Experience with Node.js required"), "Node.js");
        assert_eq!(m.extract("Experience with Nodexjs required"), "");
    }

    #[test]
    fn config_without_technologies_key_is_empty() {
        let m = TechnologyMatcher::from_json("{}").unwrap();
        assert_eq!(m.extract("Python"), "");
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(TechnologyMatcher::from_json("not json").is_err());
    }

    #[test]
    fn reads_vocabulary_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"technologies": ["Python", "Django"]}}"#).unwrap();

        let m = TechnologyMatcher::from_config_file(file.path()).unwrap();
        assert_eq!(m.extract("Django on top of Python"), "Python, Django");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(TechnologyMatcher::from_config_file("no/such/file.json").is_err());
    }
}
