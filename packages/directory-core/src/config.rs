use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use crate::kernel::{BaseProviderSource, FileProviderSource, HttpProviderSource};

/// Public mock feed the directory reads by default
pub const DEFAULT_SOURCE_URL: &str =
    "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: String,
    pub source_file: Option<PathBuf>,
    pub initial_address: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            source_url: env::var("DIRECTORY_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
            source_file: env::var("DIRECTORY_SOURCE_FILE").ok().map(PathBuf::from),
            initial_address: env::var("DIRECTORY_ADDRESS").ok(),
        })
    }

    /// The configured provider source; a local file wins over the URL.
    ///
    /// The URL is only validated when it is the source actually used.
    pub fn provider_source(&self) -> Result<Box<dyn BaseProviderSource>> {
        if let Some(path) = &self.source_file {
            return Ok(Box::new(FileProviderSource::new(path)));
        }

        url::Url::parse(&self.source_url)
            .with_context(|| format!("Provider source URL is not valid: {}", self.source_url))?;
        Ok(Box::new(HttpProviderSource::new(&self.source_url)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            source_file: None,
            initial_address: None,
        }
    }
}
