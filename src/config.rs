//! Runtime configuration
//!
//! Built once at startup from CLI flags, an optional TOML settings file and
//! the `OPENAI_API_KEY` environment variable, then passed by reference to
//! the gateways and the session controller.

use crate::cli::{Args, Verbosity};
use crate::errors::{ReviewError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable holding the gateway credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_GENERATION_MAX_TOKENS: u32 = 1500;
pub const DEFAULT_FEEDBACK_MAX_TOKENS: u32 = 150;
pub const DEFAULT_CARDS: usize = 10;
pub const DEFAULT_TOPIC: &str = "the reference material";

/// Request timeout for gateway calls (2 minutes)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Contents of the optional settings file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewaySettings {
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub generation_max_tokens: Option<u32>,
    pub feedback_max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSettings {
    pub cards: Option<usize>,
    pub topic: Option<String>,
}

impl Settings {
    /// Load settings. An explicit path must exist; the default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Settings::default()),
            },
        }
    }

    /// `~/.skillcards/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skillcards").join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ReviewError::Config(format!("Failed to read settings {}: {}", path.display(), e))
        })?;

        let settings = toml::from_str(&contents).map_err(|e| {
            ReviewError::Config(format!("Failed to parse settings {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Settings loaded");
        Ok(settings)
    }
}

/// Gateway transport settings
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub generation_max_tokens: u32,
    pub feedback_max_tokens: u32,
    pub timeout: Duration,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("generation_max_tokens", &self.generation_max_tokens)
            .field("feedback_max_tokens", &self.feedback_max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Per-session knobs
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cards: usize,
    pub topic: String,
}

/// Locations of the persisted documents
#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub resources: PathBuf,
    pub skills: PathBuf,
    pub score: PathBuf,
}

impl PathsConfig {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            resources: dir.join("resources.md"),
            skills: dir.join("skills.json"),
            score: dir.join("skill_score.json"),
        }
    }
}

/// Complete configuration for one run
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gateway: GatewayConfig,
    pub session: SessionConfig,
    pub paths: PathsConfig,
    pub verbosity: Verbosity,
}

impl AppConfig {
    /// Resolve from process arguments, the settings file and the environment
    pub fn from_env(args: &Args) -> Result<Self> {
        let settings = Settings::load(args.config.as_deref())?;
        let api_key = std::env::var(API_KEY_ENV).ok();
        Self::resolve(args, settings, api_key)
    }

    /// Merge sources: CLI flag > settings file > built-in default
    pub fn resolve(args: &Args, settings: Settings, api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ReviewError::Config(format!(
                    "Please set your {} in the environment variables.",
                    API_KEY_ENV
                ))
            })?;

        let Settings { gateway, session } = settings;

        let gateway = GatewayConfig {
            api_key,
            api_url: args
                .api_url
                .clone()
                .or(gateway.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: args
                .model
                .clone()
                .or(gateway.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            generation_max_tokens: gateway
                .generation_max_tokens
                .unwrap_or(DEFAULT_GENERATION_MAX_TOKENS),
            feedback_max_tokens: gateway
                .feedback_max_tokens
                .unwrap_or(DEFAULT_FEEDBACK_MAX_TOKENS),
            timeout: REQUEST_TIMEOUT,
        };

        let session = SessionConfig {
            cards: args.cards.or(session.cards).unwrap_or(DEFAULT_CARDS),
            topic: args
                .topic
                .clone()
                .or(session.topic)
                .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
        };

        let defaults = PathsConfig::in_dir(&args.data_dir());
        let paths = PathsConfig {
            resources: args.resources.clone().unwrap_or(defaults.resources),
            skills: args.skills_file.clone().unwrap_or(defaults.skills),
            score: args.score_file.clone().unwrap_or(defaults.score),
        };

        let config = Self {
            gateway,
            session,
            paths,
            verbosity: args.verbosity(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.session.cards == 0 {
            return Err(ReviewError::Config(
                "Card count must be at least 1".to_string(),
            ));
        }
        if self.gateway.generation_max_tokens == 0 || self.gateway.feedback_max_tokens == 0 {
            return Err(ReviewError::Config(
                "Token ceilings must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn key() -> Option<String> {
        Some("sk-test".to_string())
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(&Args::default(), Settings::default(), key()).unwrap();
        assert_eq!(config.gateway.model, DEFAULT_MODEL);
        assert_eq!(config.gateway.api_url, DEFAULT_API_URL);
        assert_eq!(config.gateway.generation_max_tokens, 1500);
        assert_eq!(config.gateway.feedback_max_tokens, 150);
        assert_eq!(config.session.cards, 10);
        assert_eq!(config.paths.score, PathBuf::from("./skill_score.json"));
        assert_eq!(config.paths.skills, PathBuf::from("./skills.json"));
        assert_eq!(config.paths.resources, PathBuf::from("./resources.md"));
    }

    #[test]
    fn test_missing_credential() {
        let err = AppConfig::resolve(&Args::default(), Settings::default(), None).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let result = AppConfig::resolve(&Args::default(), Settings::default(), Some("  ".into()));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides_settings() {
        let args = Args {
            model: Some("gpt-4o".to_string()),
            cards: Some(3),
            ..Default::default()
        };
        let settings: Settings = toml::from_str(
            r#"
            [gateway]
            model = "gpt-3.5-turbo"
            feedback_max_tokens = 300

            [session]
            cards = 20
            topic = "Node.js"
            "#,
        )
        .unwrap();

        let config = AppConfig::resolve(&args, settings, key()).unwrap();
        assert_eq!(config.gateway.model, "gpt-4o");
        assert_eq!(config.gateway.feedback_max_tokens, 300);
        assert_eq!(config.session.cards, 3);
        assert_eq!(config.session.topic, "Node.js");
    }

    #[test]
    fn test_zero_cards_rejected() {
        let args = Args {
            cards: Some(0),
            ..Default::default()
        };
        let err = AppConfig::resolve(&args, Settings::default(), key()).unwrap_err();
        assert!(matches!(err, ReviewError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = AppConfig::resolve(&Args::default(), Settings::default(), key()).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-test"));
    }

    #[test]
    fn test_explicit_settings_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(Settings::load(Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_unparsable_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[gateway\nmodel = ").unwrap();
        assert!(matches!(Settings::load(Some(path.as_path())), Err(ReviewError::Config(_))));
    }

    #[test]
    fn test_data_dir_paths() {
        let args = Args {
            data_dir: Some(PathBuf::from("deck")),
            score_file: Some(PathBuf::from("elsewhere/score.json")),
            ..Default::default()
        };
        let config = AppConfig::resolve(&args, Settings::default(), key()).unwrap();
        assert_eq!(config.paths.resources, PathBuf::from("deck/resources.md"));
        assert_eq!(config.paths.score, PathBuf::from("elsewhere/score.json"));
    }
}
