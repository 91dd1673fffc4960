use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

pub const DEFAULT_DB_URL: &str = "sqlite:///contacts.db";
pub const DEFAULT_LOG_FILE: &str = "contact_manager.log";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

const VALID_LEVELS: [&str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

/// Settings read from `config.ini`. Both sections are required; individual
/// keys fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_url: String,
    pub log_file: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from `explicit` if given, otherwise from
    /// `./config.ini`, otherwise from the user config directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = resolve_path(explicit)?;
        let text = fs::read_to_string(&path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::parse(&text)
    }

    /// Parse INI-style text: `[section]` headers over `key = value` pairs.
    pub fn parse(text: &str) -> Result<Self> {
        let sections = parse_ini(text);

        let database = sections
            .get("database")
            .ok_or_else(|| anyhow!("Missing 'database' section in config.ini."))?;
        let logging = sections
            .get("logging")
            .ok_or_else(|| anyhow!("Missing 'logging' section in config.ini."))?;

        let db_url = database
            .get("db_url")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DB_URL.to_string());
        let log_file = logging
            .get("log_file")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        // An unknown level silently degrades to INFO rather than failing.
        let mut log_level = logging
            .get("log_level")
            .map(|level| level.to_uppercase())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        if !VALID_LEVELS.contains(&log_level.as_str()) {
            log_level = DEFAULT_LOG_LEVEL.to_string();
        }

        Ok(Self {
            db_url,
            log_file,
            log_level,
        })
    }
}

fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let local = PathBuf::from("config.ini");
    if local.exists() {
        return Ok(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let fallback = config_dir.join("contactbook").join("config.ini");
        if fallback.exists() {
            return Ok(fallback);
        }
    }

    bail!("Missing config.ini in the current directory or the user config directory.");
}

fn parse_ini(text: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            let name = name.trim().to_lowercase();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        if let (Some(section), Some((key, value))) = (&current, line.split_once('=')) {
            if let Some(entries) = sections.get_mut(section) {
                entries.insert(key.trim().to_lowercase(), value.trim().to_string());
            }
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            "[database]\n\
             db_url = sqlite:///test.db\n\
             \n\
             [logging]\n\
             log_file = test.log\n\
             log_level = DEBUG\n",
        )
        .unwrap();

        assert_eq!(config.db_url, "sqlite:///test.db");
        assert_eq!(config.log_file, "test.log");
        assert_eq!(config.log_level, "DEBUG");
    }

    #[test]
    fn test_missing_sections_are_fatal() {
        let err = Config::parse("[logging]\nlog_level = INFO\n").unwrap_err();
        assert!(err.to_string().contains("database"));

        let err = Config::parse("[database]\ndb_url = sqlite:///x.db\n").unwrap_err();
        assert!(err.to_string().contains("logging"));

        assert!(Config::parse("").is_err());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = Config::parse("[database]\n[logging]\n").unwrap();
        assert_eq!(config.db_url, DEFAULT_DB_URL);
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_invalid_log_level_downgrades_to_info() {
        let config = Config::parse("[database]\n[logging]\nlog_level = VERBOSE\n").unwrap();
        assert_eq!(config.log_level, "INFO");
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = Config::parse("[database]\n[logging]\nlog_level = warning\n").unwrap();
        assert_eq!(config.log_level, "WARNING");
    }

    #[test]
    fn test_comments_and_whitespace_ignored() {
        let config = Config::parse(
            "# leading comment\n\
             [database]\n\
             ; another comment\n\
             db_url   =   sqlite:///spaced.db  \n\
             \n\
             [logging]\n",
        )
        .unwrap();
        assert_eq!(config.db_url, "sqlite:///spaced.db");
    }

    #[test]
    fn test_values_may_contain_equals() {
        let config = Config::parse(
            "[database]\n\
             db_url = sqlite:///name=odd.db\n\
             [logging]\n",
        )
        .unwrap();
        assert_eq!(config.db_url, "sqlite:///name=odd.db");
    }
}
