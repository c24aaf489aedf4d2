//! Mining configuration: keyword tables and tunable limits.
//!
//! # Responsibility
//! - Provide built-in defaults for every heuristic table.
//! - Load partial JSON overrides and validate them before use.
//!
//! # Invariants
//! - Omitted JSON fields fall back to the built-in defaults.
//! - A validated config never carries an empty keyword table.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const DEFAULT_WORK_KEYWORDS: &[&str] = &[
    "work",
    "meeting",
    "project",
    "client",
    "office",
    "colleague",
    "boss",
    "team",
    "business",
    "deadline",
    "presentation",
    "conference",
    "manager",
    "company",
    "contract",
];

const DEFAULT_PERSONAL_KEYWORDS: &[&str] = &[
    "family",
    "friend",
    "dinner",
    "birthday",
    "party",
    "weekend",
    "vacation",
    "wedding",
    "home",
    "kids",
    "mom",
    "dad",
    "sister",
    "brother",
    "wife",
    "husband",
];

const DEFAULT_FALLBACK_CONTACT_LABEL: &str = "Unknown contact";
const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Keyword tables used to infer a relationship category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryKeywords {
    pub work: Vec<String>,
    pub personal: Vec<String>,
}

impl Default for CategoryKeywords {
    fn default() -> Self {
        Self {
            work: to_owned_list(DEFAULT_WORK_KEYWORDS),
            personal: to_owned_list(DEFAULT_PERSONAL_KEYWORDS),
        }
    }
}

/// Follow-up detection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowUpSettings {
    /// Contact label used when a memo has no resolvable `[Contact: id]` tag.
    pub fallback_contact_label: String,
}

impl Default for FollowUpSettings {
    fn default() -> Self {
        Self {
            fallback_contact_label: DEFAULT_FALLBACK_CONTACT_LABEL.to_string(),
        }
    }
}

/// Keyword extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSettings {
    pub max_keywords: usize,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }
}

/// Root configuration for the mining core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub category_keywords: CategoryKeywords,
    pub follow_up: FollowUpSettings,
    pub keywords: KeywordSettings,
}

impl MiningConfig {
    /// Parses and validates a JSON document. Missing fields use defaults.
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let config = Self::from_json_str(&raw)?;
        log::info!(
            "event=config_load module=config status=ok work_keywords={} personal_keywords={}",
            config.category_keywords.work.len(),
            config.category_keywords.personal.len()
        );
        Ok(config)
    }

    /// Validates table and limit invariants.
    pub fn validate(&self) -> ConfigResult<()> {
        require_keywords(&self.category_keywords.work, "category_keywords.work")?;
        require_keywords(
            &self.category_keywords.personal,
            "category_keywords.personal",
        )?;
        if self.follow_up.fallback_contact_label.trim().is_empty() {
            return Err(ConfigError::InvalidFallbackLabel);
        }
        if self.keywords.max_keywords == 0 {
            return Err(ConfigError::InvalidKeywordLimit(self.keywords.max_keywords));
        }
        Ok(())
    }
}

fn require_keywords(values: &[String], name: &'static str) -> ConfigResult<()> {
    if values.iter().all(|value| value.trim().is_empty()) {
        return Err(ConfigError::EmptyKeywordTable(name));
    }
    Ok(())
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Configuration loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io { path: String, message: String },
    Parse(String),
    EmptyKeywordTable(&'static str),
    InvalidFallbackLabel,
    InvalidKeywordLimit(usize),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "failed to read config `{path}`: {message}"),
            Self::Parse(message) => write!(f, "invalid config json: {message}"),
            Self::EmptyKeywordTable(name) => write!(f, "keyword table must not be empty: {name}"),
            Self::InvalidFallbackLabel => {
                write!(f, "follow_up.fallback_contact_label must not be blank")
            }
            Self::InvalidKeywordLimit(value) => {
                write!(f, "keywords.max_keywords must be positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, MiningConfig};

    #[test]
    fn defaults_validate() {
        assert!(MiningConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_merges_over_defaults() {
        let config =
            MiningConfig::from_json_str(r#"{"follow_up":{"fallback_contact_label":"Someone"}}"#)
                .expect("partial config should load");
        assert_eq!(config.follow_up.fallback_contact_label, "Someone");
        assert_eq!(config.keywords.max_keywords, 10);
        assert!(config
            .category_keywords
            .work
            .contains(&"project".to_string()));
    }

    #[test]
    fn rejects_blank_keyword_table() {
        let err = MiningConfig::from_json_str(r#"{"category_keywords":{"work":[" "]}}"#)
            .expect_err("blank table must be rejected");
        assert_eq!(
            err,
            ConfigError::EmptyKeywordTable("category_keywords.work")
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = MiningConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
