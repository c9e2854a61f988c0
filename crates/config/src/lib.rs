//! Configuration loading and validation for Shelfwise.
//!
//! Loads configuration from `~/.shelfwise/config.toml` with environment
//! variable overrides for secrets. The catalog, the member roster, and the
//! opening hours are part of the configuration: they are loaded once at
//! startup and immutable afterwards.

use serde::{Deserialize, Serialize};
use shelfwise_core::error::ConfigError;
use shelfwise_core::persona::Persona;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.shelfwise/config.toml`.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Provider settings (model endpoint and sampling)
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Guardrail settings (classifier selection)
    #[serde(default)]
    pub guardrail: GuardrailConfig,

    /// Assistant persona
    #[serde(default)]
    pub persona: Persona,

    /// The library data: catalog, members, opening hours
    #[serde(default)]
    pub library: LibraryConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key. Usually left unset in the file and taken from the
    /// environment instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Provider name used in logs.
    #[serde(default = "default_provider_name")]
    pub name: String,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for answer phrasing. Classification always
    /// runs at temperature 0.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Max tokens per response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_api_url() -> String {
    // Gemini's OpenAI-compatible endpoint
    "https://generativelanguage.googleapis.com/v1beta/openai".into()
}
fn default_provider_name() -> String {
    "gemini".into()
}
fn default_model() -> String {
    "gemini-2.0-flash".into()
}
fn default_temperature() -> f32 {
    1.0
}
fn default_max_tokens() -> u32 {
    1024
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            name: default_provider_name(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("name", &self.name)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("provider", &self.provider)
            .field("guardrail", &self.guardrail)
            .field("persona", &self.persona)
            .field("library", &self.library)
            .finish()
    }
}

/// Secrets never appear in Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

/// Which scope classifier gates incoming queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardrailMode {
    /// Delegate the verdict to the language model (the default).
    Llm,
    /// Deterministic keyword allow-list; works offline.
    Keyword,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardrailConfig {
    #[serde(default = "default_guardrail_mode")]
    pub mode: GuardrailMode,

    /// Allow-list for keyword mode. A query is in scope iff it contains
    /// any of these, case-insensitive.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

fn default_guardrail_mode() -> GuardrailMode {
    GuardrailMode::Llm
}

fn default_keywords() -> Vec<String> {
    [
        "book", "copy", "copies", "author", "read", "borrow", "library",
        "member", "membership", "hours", "timing", "open", "close", "catalog",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            mode: default_guardrail_mode(),
            keywords: default_keywords(),
        }
    }
}

/// The library data tables. `BTreeMap` keeps hours output in a stable
/// order when re-serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub books: Vec<BookEntry>,

    #[serde(default)]
    pub members: Vec<MemberEntry>,

    #[serde(default)]
    pub hours: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub copies: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberEntry {
    pub member_id: String,
    pub name: String,

    /// Whether this membership is currently valid.
    #[serde(default = "default_true")]
    pub valid: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LibraryConfig {
    /// The sample library shipped with `shelfwise init`.
    fn default() -> Self {
        let books = [
            ("Clean Code", 2),
            ("The Pragmatic Programmer", 0),
            ("Introduction to Algorithms", 3),
            ("Design Patterns", 1),
            ("Deep Learning", 4),
        ]
        .into_iter()
        .map(|(title, copies)| BookEntry {
            title: title.into(),
            copies,
        })
        .collect();

        let members = [
            ("M-1001", "Ayesha"),
            ("M-2002", "Bilal"),
            ("M-3003", "Sana"),
        ]
        .into_iter()
        .map(|(member_id, name)| MemberEntry {
            member_id: member_id.into(),
            name: name.into(),
            valid: true,
        })
        .collect();

        let hours = [
            ("monday", "9:00 – 19:00"),
            ("tuesday", "9:00 – 19:00"),
            ("wednesday", "9:00 – 19:00"),
            ("thursday", "9:00 – 19:00"),
            ("friday", "9:00 – 19:00"),
            ("saturday", "10:00 – 16:00"),
            ("sunday", "10:00 – 14:00"),
        ]
        .into_iter()
        .map(|(d, h)| (d.to_string(), h.to_string()))
        .collect();

        Self {
            books,
            members,
            hours,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.shelfwise/config.toml).
    ///
    /// Also checks environment variables for the API key:
    /// - `SHELFWISE_API_KEY` (highest priority)
    /// - `GEMINI_API_KEY`
    /// - `OPENAI_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if config.provider.api_key.is_none() {
            config.provider.api_key = std::env::var("SHELFWISE_API_KEY")
                .ok()
                .or_else(|| std::env::var("GEMINI_API_KEY").ok())
                .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        }

        if let Ok(model) = std::env::var("SHELFWISE_MODEL") {
            config.provider.model = model;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".shelfwise")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.temperature < 0.0 || self.provider.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "provider.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        let mut titles = std::collections::HashSet::new();
        for book in &self.library.books {
            if book.title.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "book titles must not be blank".into(),
                ));
            }
            if !titles.insert(book.title.to_lowercase()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate book title: {}",
                    book.title
                )));
            }
        }

        let mut ids = std::collections::HashSet::new();
        for member in &self.library.members {
            if member.member_id.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "member ids must not be blank".into(),
                ));
            }
            if !ids.insert(member.member_id.clone()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate member id: {}",
                    member.member_id
                )));
            }
        }

        if self.guardrail.mode == GuardrailMode::Keyword && self.guardrail.keywords.is_empty() {
            return Err(ConfigError::ValidationError(
                "guardrail.keywords must not be empty in keyword mode".into(),
            ));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.provider.api_key.is_some()
    }

    /// Generate a default config TOML string (for `shelfwise init`).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    }
}
