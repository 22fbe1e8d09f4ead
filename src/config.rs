use serde::Deserialize;
use simplelog::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::session::SESSION_SIZE;

const LOCAL_CONFIG: &str = "userconfig.cfg";

/// Read-only user preferences. Nothing here is ever written back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub session_size: usize,
    pub bank_path: Option<PathBuf>,
    pub log_level: String,
    pub dark_mode: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            session_size: SESSION_SIZE,
            bank_path: None,
            log_level: "info".to_string(),
            dark_mode: true,
        }
    }
}

impl UserConfig {
    pub fn load() -> Self {
        Self::candidate_paths()
            .iter()
            .find_map(|path| Self::load_from(path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("amg_quiz").join("config.json"));
        }
        paths.push(PathBuf::from(LOCAL_CONFIG));
        paths
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: UserConfig = serde_json::from_str(r#"{"session_size": 10}"#).unwrap();
        assert_eq!(config.session_size, 10);
        assert_eq!(config.bank_path, None);
        assert!(config.dark_mode);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = UserConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);

        let config = UserConfig {
            log_level: "debug".into(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn missing_file_yields_none() {
        assert!(UserConfig::load_from(Path::new("/nonexistent/userconfig.cfg")).is_none());
    }
}
