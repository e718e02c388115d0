use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Content
    pub content_dir: String,
    pub preload_translations: bool,

    // Sitemap
    pub site_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse()
                    .with_context(|| format!("PORT is not a valid port: {}", port))?,
                Err(_) => 8080,
            },

            content_dir: std::env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string()),
            preload_translations: std::env::var("PRELOAD_TRANSLATIONS")
                .ok()
                .map(|v| parse_bool(&v))
                .transpose()
                .context("PRELOAD_TRANSLATIONS must be true or false")?
                .unwrap_or(true),

            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "https://scalar.com".to_string()),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean: {}", other),
    }
}
