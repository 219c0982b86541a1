use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BvError, Result};

/// Env var naming an optional JSON config file.
pub const CONFIG_PATH_ENV: &str = "BRAND_VOICE_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandVoiceConfig {
    pub server: ServerConfig,
    pub profiles: ProfilesConfig,
    pub rewrite: RewriteConfig,
    pub providers: Vec<ProviderConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Remote results shorter than this (in chars, trimmed) are discarded.
    pub min_length: usize,
}

/// Wire protocol spoken by a remote provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    OpenaiCompatible,
    HuggingFace,
    Cohere,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    pub kind: ProviderKind,
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_enabled() -> bool {
    true
}

impl ProviderConfig {
    fn preset(name: &str, kind: ProviderKind, base_url: &str, model: &str, api_key_env: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            base_url: base_url.into(),
            model: model.into(),
            api_key_env: api_key_env.into(),
            timeout_secs: default_timeout_secs(),
            enabled: true,
        }
    }

    /// Resolve the API key through `lookup` (normally the process environment).
    pub fn api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        lookup(&self.api_key_env).filter(|k| !k.trim().is_empty())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 3000 }
    }
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("./brand-profiles") }
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self { min_length: 10 }
    }
}

/// Remote providers in the order they are tried.
pub fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::preset(
            "groq",
            ProviderKind::OpenaiCompatible,
            "https://api.groq.com/openai/v1",
            "llama-3.1-8b-instant",
            "GROQ_API_KEY",
        ),
        ProviderConfig::preset(
            "together",
            ProviderKind::OpenaiCompatible,
            "https://api.together.xyz/v1",
            "meta-llama/Llama-3.2-3B-Instruct-Turbo",
            "TOGETHER_API_KEY",
        ),
        ProviderConfig::preset(
            "huggingface",
            ProviderKind::HuggingFace,
            "https://api-inference.huggingface.co",
            "mistralai/Mistral-7B-Instruct-v0.2",
            "HUGGINGFACE_API_KEY",
        ),
        ProviderConfig::preset(
            "cohere",
            ProviderKind::Cohere,
            "https://api.cohere.ai",
            "command-r",
            "COHERE_API_KEY",
        ),
        ProviderConfig::preset(
            "openrouter",
            ProviderKind::OpenaiCompatible,
            "https://openrouter.ai/api/v1",
            "meta-llama/llama-3.1-8b-instruct:free",
            "OPENROUTER_API_KEY",
        ),
    ]
}

impl BrandVoiceConfig {
    /// Defaults with the built-in provider list.
    pub fn with_default_providers() -> Self {
        Self { providers: default_providers(), ..Self::default() }
    }

    /// Parse a JSON config. Missing sections fall back to defaults; an absent
    /// `providers` key keeps the built-in list.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let has_providers = value.get("providers").is_some();
        let mut config: Self = serde_json::from_value(value)?;
        if !has_providers {
            config.providers = default_providers();
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BvError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Load from `BRAND_VOICE_CONFIG` (if set) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let lookup = |key: &str| std::env::var(key).ok();
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::with_default_providers(),
        };
        config.apply_env_overrides(lookup)?;
        Ok(config)
    }

    /// Apply `PORT`, `HOST` and `BRAND_PROFILES_DIR` overrides.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| BvError::Config(format!("PORT must be a port number, got '{port}'")))?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(dir) = lookup("BRAND_PROFILES_DIR") {
            self.profiles.dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
