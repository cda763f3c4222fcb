use std::path::PathBuf;

use crate::usecase::services::pagination::{is_valid_page_size, DEFAULT_PAGE_SIZE, PAGE_SIZES};

pub const DEFAULT_BASE_URL: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PDAM_BASE_URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
    #[error("PDAM_PAGE_SIZE must be one of {allowed:?}, got {value:?}")]
    InvalidPageSize { value: String, allowed: [usize; 4] },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub page_size: usize,
    pub db_path: Option<PathBuf>,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            db_path: None,
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let base_url = match non_blank("PDAM_BASE_URL") {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let page_size = match non_blank("PDAM_PAGE_SIZE") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|size| is_valid_page_size(*size))
                .ok_or(ConfigError::InvalidPageSize {
                    value: raw,
                    allowed: PAGE_SIZES,
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let debug = non_blank("PDAM_DEBUG")
            .is_some_and(|value| value == "1" || value.eq_ignore_ascii_case("true"));

        Ok(Self {
            base_url,
            api_token: non_blank("PDAM_API_TOKEN"),
            page_size,
            db_path: non_blank("PDAM_DB_PATH").map(PathBuf::from),
            debug,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_string()))
    }
}
