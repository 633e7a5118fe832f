use std::env;
use std::path::PathBuf;

use crate::agents::errors::{AgentError, AgentResult};

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Runtime settings read from the process environment
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub endpoint: String,
    pub scratchpad_dir: PathBuf,
    pub versions_dir: PathBuf,
}

impl Config {
    /// Load from the environment; `OPENAI_API_KEY` is required
    pub fn from_env() -> AgentResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> AgentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AgentError::ConfigError("OPENAI_API_KEY must be set".to_string()))?;

        let max_tokens = match lookup("OPENAI_MAX_TOKENS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(tokens) if tokens > 0 => tokens,
                _ => {
                    return Err(AgentError::ConfigError(format!(
                        "OPENAI_MAX_TOKENS must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            api_key,
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens,
            endpoint: lookup("OPENAI_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            scratchpad_dir: lookup("SCRATCHPAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("scratchpad")),
            versions_dir: lookup("VERSIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("versions")),
        })
    }

    /// Create the working directories if they do not exist yet
    pub fn prepare_directories(&self) -> AgentResult<()> {
        for dir in [&self.scratchpad_dir, &self.versions_dir] {
            if !dir.exists() {
                std::fs::create_dir_all(dir)?;
                tracing::info!("Created working directory {}", dir.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.scratchpad_dir, PathBuf::from("scratchpad"));
        assert_eq!(config.versions_dir, PathBuf::from("versions"));
    }

    #[test]
    fn test_missing_api_key_fails() {
        let result = Config::from_lookup(lookup_from(&[]));

        assert!(matches!(result, Err(AgentError::ConfigError(_))));
    }

    #[test]
    fn test_blank_api_key_fails() {
        let result = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "  ")]));

        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_MAX_TOKENS", "512"),
            ("SCRATCHPAD_DIR", "/tmp/pad"),
        ]))
        .unwrap();

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.scratchpad_dir, PathBuf::from("/tmp/pad"));
    }

    #[test]
    fn test_invalid_max_tokens_fails() {
        let result = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MAX_TOKENS", "lots"),
        ]));

        assert!(matches!(result, Err(AgentError::ConfigError(_))));
    }

    #[test]
    fn test_zero_max_tokens_fails() {
        let result = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MAX_TOKENS", "0"),
        ]));

        assert!(matches!(result, Err(AgentError::ConfigError(_))));
    }

    #[test]
    fn test_prepare_directories_creates_both() {
        let root =
            std::env::temp_dir().join(format!("taskforce-config-{}", uuid::Uuid::new_v4()));
        let mut config =
            Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        config.scratchpad_dir = root.join("scratchpad");
        config.versions_dir = root.join("versions");

        config.prepare_directories().unwrap();
        // Second call is a no-op on existing directories
        config.prepare_directories().unwrap();

        assert!(config.scratchpad_dir.is_dir());
        assert!(config.versions_dir.is_dir());
        std::fs::remove_dir_all(&root).unwrap();
    }
}
