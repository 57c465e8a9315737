use crate::{
    domain::requests::{MAX_PAGES_TO_SHOW_LIMIT, MAX_WINDOW_SIZE, PageTokenOptions},
    utils::{DEFAULT_MAX_PAGES_TO_SHOW, DEFAULT_WINDOW_SIZE},
};
use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub is_dev: bool,
    pub pagination: PaginationConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .context("Missing env: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let is_dev = match lookup("APP_ENV").as_deref() {
            None | Some("development") => true,
            Some("production") => false,
            Some(other) => {
                return Err(anyhow!(
                    "APP_ENV must be 'development' or 'production', got '{other}'",
                ));
            }
        };

        Ok(Self {
            port,
            is_dev,
            pagination: PaginationConfig::from_lookup("PAGINATION", &lookup)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub max_pages_to_show: u32,
    pub window_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl PaginationConfig {
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_pages_to_show = match lookup(&format!("{prefix}_MAX_PAGES_TO_SHOW")) {
            Some(raw) => raw
                .parse::<u32>()
                .context(format!("{prefix}_MAX_PAGES_TO_SHOW must be a valid u32 integer"))?,
            None => defaults.max_pages_to_show,
        };

        if !(1..=MAX_PAGES_TO_SHOW_LIMIT).contains(&max_pages_to_show) {
            return Err(anyhow!(
                "{prefix}_MAX_PAGES_TO_SHOW must be between 1 and {MAX_PAGES_TO_SHOW_LIMIT}, got {max_pages_to_show}",
            ));
        }

        let window_size = match lookup(&format!("{prefix}_WINDOW_SIZE")) {
            Some(raw) => raw
                .parse::<u32>()
                .context(format!("{prefix}_WINDOW_SIZE must be a valid u32 integer"))?,
            None => defaults.window_size,
        };

        if window_size > MAX_WINDOW_SIZE {
            return Err(anyhow!(
                "{prefix}_WINDOW_SIZE must be at most {MAX_WINDOW_SIZE}, got {window_size}",
            ));
        }

        Ok(Self {
            max_pages_to_show,
            window_size,
        })
    }

    pub fn options(&self) -> PageTokenOptions {
        PageTokenOptions::new(self.max_pages_to_show, self.window_size)
    }
}
