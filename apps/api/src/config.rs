use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::content::PROFILE;

const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_FROM_ADDRESS: &str = "Portfolio <onboarding@resend.dev>";

/// Application configuration loaded from environment variables.
/// Nothing is required; every variable has a default suitable for local runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file backing the editable sections. `None` keeps them in memory.
    pub store_path: Option<PathBuf>,
    pub email_api_url: String,
    /// Without a key, contact submissions are logged instead of emailed.
    pub email_api_key: Option<String>,
    pub email_timeout: Duration,
    pub contact_to_address: String,
    pub contact_from_address: String,
    /// Public origin of the site, written into the resume download.
    pub public_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            store_path: var("STORE_PATH").map(PathBuf::from),
            email_api_url: var("EMAIL_API_URL")
                .unwrap_or_else(|| DEFAULT_EMAIL_API_URL.to_string()),
            email_api_key: var("EMAIL_API_KEY"),
            email_timeout: Duration::from_secs(
                var("EMAIL_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse::<u64>()
                    .context("EMAIL_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            contact_to_address: var("CONTACT_TO_ADDRESS")
                .unwrap_or_else(|| PROFILE.email.to_string()),
            contact_from_address: var("CONTACT_FROM_ADDRESS")
                .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            public_origin: var("PUBLIC_ORIGIN")
                .map(|origin| origin.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "http://localhost:8080".to_string()),
        })
    }
}
