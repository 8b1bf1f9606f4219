use std::str::FromStr;
use thiserror::Error;

const BASE_URL: &str = "BOOKSHELF_BASE_URL";
const LOAD_MORE_DELAY_MS: &str = "BOOKSHELF_LOAD_MORE_DELAY_MS";
const DISCARD_STALE: &str = "BOOKSHELF_DISCARD_STALE";
const SETTLE_DETAILS: &str = "BOOKSHELF_SETTLE_DETAILS";

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("Invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookshelfSettings {
    pub base_url: String,
    pub load_more_delay_ms: u32,
    // Drop list responses that are not the latest request's
    pub discard_stale_responses: bool,
    // Move a failed details fetch to Error instead of leaving it Loading
    pub settle_details_on_failure: bool,
}

impl Default for BookshelfSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".to_string(),
            load_more_delay_ms: 500,
            discard_stale_responses: true,
            settle_details_on_failure: true,
        }
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, SettingsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidValue(key, value)),
    }
}

impl BookshelfSettings {
    pub fn new_from_env() -> Result<Self, SettingsError> {
        Self::new_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn new_from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(base_url) = lookup(BASE_URL).filter(|s| !s.trim().is_empty()) {
            settings.base_url = base_url.trim().to_string();
        }
        if let Some(delay) = lookup(LOAD_MORE_DELAY_MS) {
            settings.load_more_delay_ms = u32::from_str(delay.trim())
                .map_err(|_| SettingsError::InvalidValue(LOAD_MORE_DELAY_MS, delay))?;
        }
        if let Some(value) = lookup(DISCARD_STALE) {
            settings.discard_stale_responses = parse_bool(DISCARD_STALE, value)?;
        }
        if let Some(value) = lookup(SETTLE_DETAILS) {
            settings.settle_details_on_failure = parse_bool(SETTLE_DETAILS, value)?;
        }

        Ok(settings)
    }
}
