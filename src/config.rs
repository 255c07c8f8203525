use crate::keywords::{KeywordError, KeywordSet, SearchKeywords};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("api.key is required")]
    MissingApiKey,
    #[error("keywords.events is required")]
    MissingEventKeywords,
    #[error("invalid keywords: {0}")]
    Keywords(#[from] KeywordError),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordConfig {
    #[serde(default)]
    pub events: Option<String>,
    /// Falls back to `events` when absent or without any group.
    #[serde(default)]
    pub offers: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_site")]
    pub site: String,
    #[serde(default = "default_event_type")]
    pub event_type: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base_url: default_base_url(),
            site: default_site(),
            event_type: default_event_type(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub email: Option<EmailConfig>,
}

fn default_base_url() -> String {
    "https://api.woot.com/2".to_string()
}

fn default_site() -> String {
    "computers.woot.com".to_string()
}

fn default_event_type() -> String {
    "WootPlus".to_string()
}

fn default_sender() -> String {
    "woot-sniper@localhost".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    25
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl AppConfig {
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        non_blank(&self.api.key).ok_or(ConfigError::MissingApiKey)
    }

    /// Parses both keyword sets. The offer set is re-parsed from the event
    /// string when the offer keywords are absent or yield no groups.
    pub fn search_keywords(&self) -> Result<SearchKeywords, ConfigError> {
        let events_raw =
            non_blank(&self.keywords.events).ok_or(ConfigError::MissingEventKeywords)?;
        let events = KeywordSet::parse(events_raw)?;

        let offers = match non_blank(&self.keywords.offers).map(KeywordSet::parse) {
            Some(Ok(offers)) => offers,
            Some(Err(KeywordError::Empty)) | None => KeywordSet::parse(events_raw)?,
            Some(Err(e)) => return Err(e.into()),
        };

        Ok(SearchKeywords { events, offers })
    }

    /// Email settings, only when a recipient is configured.
    pub fn email(&self) -> Option<&EmailConfig> {
        self.email
            .as_ref()
            .filter(|email| non_blank(&email.recipient).is_some())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.api_key()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(
            r#"{
                "debug": true,
                "keywords": { "events": "dell; lenovo", "offers": "precision; thinkpad" },
                "api": { "key": "secret", "site": "electronics.woot.com" },
                "email": { "recipient": "a@example.com", "smtp_host": "mail.local" }
            }"#,
        );
        let config = load_config(file.path()).unwrap();

        assert!(config.debug);
        assert_eq!(config.api_key().unwrap(), "secret");
        assert_eq!(config.api.site, "electronics.woot.com");
        assert_eq!(config.api.event_type, "WootPlus");
        assert_eq!(config.api.base_url, "https://api.woot.com/2");

        let email = config.email().unwrap();
        assert_eq!(email.smtp_host, "mail.local");
        assert_eq!(email.smtp_port, 25);
        assert_eq!(email.sender, "woot-sniper@localhost");

        let keywords = config.search_keywords().unwrap();
        assert_eq!(keywords.events.to_string(), "dell; lenovo");
        assert_eq!(keywords.offers.to_string(), "precision; thinkpad");
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let file = write_config(r#"{ "keywords": { "events": "dell" }, "api": { "key": "  " } }"#);
        assert!(matches!(load_config(file.path()), Err(ConfigError::MissingApiKey)));

        let file = write_config(r#"{ "keywords": { "events": "dell" } }"#);
        assert!(matches!(load_config(file.path()), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn missing_event_keywords_is_fatal() {
        let file = write_config(r#"{ "api": { "key": "k" }, "keywords": { "offers": "dell" } }"#);
        let config = load_config(file.path()).unwrap();
        assert!(matches!(
            config.search_keywords(),
            Err(ConfigError::MissingEventKeywords)
        ));
    }

    #[test]
    fn offer_keywords_fall_back_to_event_keywords() {
        let file = write_config(
            r#"{ "api": { "key": "k" }, "keywords": { "events": "dell precision; latitude" } }"#,
        );
        let config = load_config(file.path()).unwrap();
        let keywords = config.search_keywords().unwrap();
        assert_eq!(keywords.offers, keywords.events);
    }

    #[test]
    fn offer_keywords_without_groups_fall_back_to_event_keywords() {
        let file = write_config(
            r#"{ "api": { "key": "k" }, "keywords": { "events": "dell", "offers": " ; " } }"#,
        );
        let config = load_config(file.path()).unwrap();
        let keywords = config.search_keywords().unwrap();
        assert_eq!(keywords.offers.to_string(), "dell");
        assert_eq!(keywords.offers, keywords.events);
    }

    #[test]
    fn invalid_offer_pattern_is_still_fatal() {
        let file = write_config(
            r#"{ "api": { "key": "k" }, "keywords": { "events": "dell", "offers": "(latitude" } }"#,
        );
        let config = load_config(file.path()).unwrap();
        assert!(matches!(
            config.search_keywords(),
            Err(ConfigError::Keywords(KeywordError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn blank_recipient_disables_email() {
        let file = write_config(
            r#"{ "api": { "key": "k" }, "keywords": { "events": "dell" }, "email": { "recipient": "" } }"#,
        );
        let config = load_config(file.path()).unwrap();
        assert!(config.email().is_none());
    }
}
