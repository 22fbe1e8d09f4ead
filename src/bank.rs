use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Question asset compiled into the binary.
const BUNDLED_BANK: &str = include_str!("../assets/questions.json");

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One record of the question asset, as authored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionBankEntry {
    pub question: String,
    pub options: Vec<String>,
    #[serde(
        rename = "correctIndex",
        default,
        deserialize_with = "deserialize_correct_index"
    )]
    pub correct_index: Option<usize>,
}

// Negative indices point at nothing, same as a missing answer.
fn deserialize_correct_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|i| usize::try_from(i).ok()))
}

impl QuestionBankEntry {
    #[cfg(test)]
    pub fn new(question: impl Into<String>, options: &[&str], correct_index: Option<usize>) -> Self {
        Self {
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
        }
    }

    pub fn is_eligible(&self) -> bool {
        !self.question.trim().is_empty() && self.options.len() >= 2
    }
}

/// The filtered, immutable set of questions sessions are sampled from.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    entries: Vec<QuestionBankEntry>,
}

impl QuestionBank {
    pub fn from_entries(entries: Vec<QuestionBankEntry>) -> Self {
        let total = entries.len();
        let entries: Vec<_> = entries.into_iter().filter(|e| e.is_eligible()).collect();
        if entries.len() < total {
            log::debug!(
                "Dropped {} ineligible question(s) from the bank",
                total - entries.len()
            );
        }
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let entries: Vec<QuestionBankEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn bundled() -> Result<Self, BankError> {
        let bank = Self::from_json(BUNDLED_BANK)?;
        log::info!("Loaded {} questions from the bundled bank", bank.len());
        Ok(bank)
    }

    pub fn load(path: &Path) -> Result<Self, BankError> {
        log::info!("Loading question bank from: {}", path.display());
        let contents = fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let bank = Self::from_json(&contents)?;
        log::info!("Loaded {} questions", bank.len());
        Ok(bank)
    }

    pub fn entries(&self) -> &[QuestionBankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_correct_index_shapes() {
        let json = r#"[
            {"question": "A?", "options": ["x", "y"], "correctIndex": 1},
            {"question": "B?", "options": ["x", "y"], "correctIndex": null},
            {"question": "C?", "options": ["x", "y"]},
            {"question": "D?", "options": ["x", "y"], "correctIndex": -1}
        ]"#;
        let bank = QuestionBank::from_json(json).unwrap();
        let indices: Vec<_> = bank.entries().iter().map(|e| e.correct_index).collect();
        assert_eq!(indices, vec![Some(1), None, None, None]);
    }

    #[test]
    fn filters_ineligible_entries() {
        let json = r#"[
            {"question": "   ", "options": ["x", "y"], "correctIndex": 0},
            {"question": "Only one?", "options": ["x"], "correctIndex": 0},
            {"question": "None?", "options": [], "correctIndex": null},
            {"question": "Kept?", "options": ["x", "y"], "correctIndex": 0}
        ]"#;
        let bank = QuestionBank::from_json(json).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.entries()[0].question, "Kept?");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = QuestionBank::from_json(r#"[{"question": 3}]"#).unwrap_err();
        assert!(matches!(err, BankError::Parse(_)));
        assert!(QuestionBank::from_json("not json").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = QuestionBank::load(Path::new("/nonexistent/bank.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bank.json"));
    }

    #[test]
    fn bundled_bank_is_usable() {
        let bank = QuestionBank::bundled().unwrap();
        assert!(bank.len() > crate::session::SESSION_SIZE);
        assert!(bank.entries().iter().all(QuestionBankEntry::is_eligible));
    }
}
