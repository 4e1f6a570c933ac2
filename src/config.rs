use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::hackernews::client::{DEFAULT_FETCH_TIMEOUT, DEFAULT_FRONT_PAGE_URL};
use crate::llm::provider::DEFAULT_TEMPERATURE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Claude,
}

impl ProviderKind {
    fn api_key_var(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GOOGLE_API_KEY",
            ProviderKind::Claude => "ANTHROPIC_API_KEY",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "claude" | "anthropic" => Ok(ProviderKind::Claude),
            other => Err(Error::Config(format!(
                "Unknown LLM provider '{}', expected 'gemini' or 'claude'",
                other
            ))),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Gemini => f.write_str("gemini"),
            ProviderKind::Claude => f.write_str("claude"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderKind,
    pub api_key: String,
    pub model: Option<String>,
    pub temperature: f32,
    pub llm_timeout: Duration,
    pub llm_base_url: Option<String>,
    pub front_page_url: String,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Reads the process environment, `provider_override` taking precedence
    /// over `LLM_PROVIDER`.
    pub fn from_env(provider_override: Option<ProviderKind>) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), provider_override)
    }

    pub fn from_lookup<F>(lookup: F, provider_override: Option<ProviderKind>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match provider_override {
            Some(kind) => kind,
            None => lookup("LLM_PROVIDER")
                .map(|v| v.parse::<ProviderKind>())
                .transpose()?
                .unwrap_or(ProviderKind::Gemini),
        };

        let api_key = lookup(provider.api_key_var())
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "{} environment variable not set",
                    provider.api_key_var()
                ))
            })?;

        let model = lookup("LLM_MODEL").filter(|v| !v.trim().is_empty());
        let llm_base_url = lookup("LLM_BASE_URL").filter(|v| !v.trim().is_empty());

        let llm_timeout = Duration::from_secs(parse_or("LLM_TIMEOUT_SECS", &lookup, 120)?);

        let front_page_url = lookup("HN_URL").unwrap_or_else(|| DEFAULT_FRONT_PAGE_URL.to_string());

        let fetch_timeout = Duration::from_secs(parse_or(
            "FETCH_TIMEOUT_SECS",
            &lookup,
            DEFAULT_FETCH_TIMEOUT.as_secs(),
        )?);

        let mut config = Self {
            provider,
            api_key,
            model,
            temperature: DEFAULT_TEMPERATURE,
            llm_timeout,
            llm_base_url,
            front_page_url,
            fetch_timeout,
        };
        config.set_temperature(parse_or("LLM_TEMPERATURE", &lookup, DEFAULT_TEMPERATURE)?)?;

        Ok(config)
    }

    /// Accepts temperatures in `0.0..=2.0`, the range both providers support.
    pub fn set_temperature(&mut self, temperature: f32) -> Result<()> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(Error::Config(format!(
                "Temperature must be between 0 and 2, got {}",
                temperature
            )));
        }
        self.temperature = temperature;
        Ok(())
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub temperature: f32,
    pub show_progress: bool,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            temperature: config.temperature,
            show_progress: true,
        }
    }
}
