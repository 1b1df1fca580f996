//! Quiz settings, optionally overridden by a `trivia.toml` next to the binary's
//! working directory. Every key is optional; see `QuizConfig::default`.

use crate::error::{QuizError, Result};
use crate::logger;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "trivia.toml";
/// Open Trivia DB category id for "History".
pub const HISTORY_CATEGORY: u32 = 23;
pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub category: u32,
    pub question_count: usize,
    pub api_url: String,
    pub asset_dir: PathBuf,
    pub correct_cue: String,
    pub wrong_cue: String,
    pub menu_theme: String,
    pub backdrop: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            category: HISTORY_CATEGORY,
            question_count: DEFAULT_QUESTION_COUNT,
            api_url: DEFAULT_API_URL.to_string(),
            asset_dir: PathBuf::from("assets"),
            correct_cue: "correct.wav".to_string(),
            wrong_cue: "wrong.wav".to_string(),
            menu_theme: "work_music.wav".to_string(),
            backdrop: "backdrop.txt".to_string(),
        }
    }
}

impl QuizConfig {
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.asset_dir.join(name)
    }

    fn normalized(mut self) -> Self {
        self.question_count = self.question_count.max(1);
        self
    }
}

pub fn parse_config(path: &Path, contents: &str) -> Result<QuizConfig> {
    toml::from_str::<QuizConfig>(contents)
        .map(QuizConfig::normalized)
        .map_err(|e| QuizError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Read settings from `path`. A missing file yields defaults; a broken one is
/// logged and also yields defaults.
pub fn load_config(path: &Path) -> QuizConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return QuizConfig::default(),
        Err(e) => {
            logger::log(&format!("Failed to read {}: {}", path.display(), e));
            return QuizConfig::default();
        }
    };

    match parse_config(path, &contents) {
        Ok(config) => {
            logger::log(&format!("Loaded config from {}", path.display()));
            config
        }
        Err(e) => {
            logger::log(&format!("Ignoring config: {}", e));
            QuizConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILE));
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.category, 23);
        assert_eq!(config.question_count, 10);
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "question_count = 5\nasset_dir = \"media\"").unwrap();

        let config = load_config(file.path());
        assert_eq!(config.question_count, 5);
        assert_eq!(config.asset_dir, PathBuf::from("media"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.asset_path("wrong.wav"), PathBuf::from("media/wrong.wav"));
    }

    #[test]
    fn test_zero_count_is_clamped() {
        let config = parse_config(Path::new("t.toml"), "question_count = 0").unwrap();
        assert_eq!(config.question_count, 1);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "category = \"history\"").unwrap();

        assert!(parse_config(file.path(), "category = \"history\"").is_err());
        assert_eq!(load_config(file.path()), QuizConfig::default());
    }
}
