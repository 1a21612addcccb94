use crate::{Error, Result};
use std::env::{self, VarError};
use std::path::{Path, PathBuf};

/// Environment variable holding the bearer token.
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
/// Environment variable holding the model identifier.
pub const MODEL_VAR: &str = "OPENROUTER_MODEL";
/// Environment variable holding the path of the prompt file.
pub const PROMPT_FILE_VAR: &str = "OPENROUTER_PROMPT_FILE";
/// Optional comma-separated list of OpenRouter transforms, e.g. `middle-out`.
pub const TRANSFORMS_VAR: &str = "OPENROUTER_TRANSFORMS";
/// Optional override of the chat-completions URL.
pub const ENDPOINT_VAR: &str = "OPENROUTER_ENDPOINT";

/// Chat-completions endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Configuration for a single run, read once from the environment.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub prompt_file: PathBuf,
    pub transforms: Vec<String>,
    pub endpoint: Option<String>,
}

// The API key never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("prompt_file", &self.prompt_file)
            .field("transforms", &self.transforms)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Create a configuration from explicit values.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        prompt_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            prompt_file: prompt_file.into(),
            transforms: Vec::new(),
            endpoint: None,
        }
    }

    /// Set the OpenRouter transforms sent with the request.
    pub fn with_transforms<I, S>(mut self, transforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transforms = transforms.into_iter().map(Into::into).collect();
        self
    }

    /// Point the client at a different chat-completions URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Create configuration from environment variables, merging a local `.env` file first.
    ///
    /// Variables already present in the process environment win over the file.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(None)
    }

    /// Like [`Config::from_env`], but merges `env_file` instead of searching for `.env`.
    pub fn from_env_with(env_file: Option<&Path>) -> Result<Self> {
        match env_file {
            Some(path) => load_env_path(path),
            None => load_env_file(),
        }
        for var in [API_KEY_VAR, MODEL_VAR, PROMPT_FILE_VAR] {
            if let Err(VarError::NotUnicode(_)) = env::var(var) {
                return Err(Error::non_unicode_config(var));
            }
        }
        Self::from_lookup(process_env)
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as absent. Present values are returned unmodified.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::missing_config(var))
        };

        let api_key = required(API_KEY_VAR)?;
        let model = required(MODEL_VAR)?;
        let prompt_file = required(PROMPT_FILE_VAR)?;

        let transforms = lookup(TRANSFORMS_VAR)
            .map(|raw| parse_transforms(&raw))
            .unwrap_or_default();
        let endpoint = lookup(ENDPOINT_VAR).filter(|value| !value.is_empty());

        let config = Self {
            api_key,
            model,
            prompt_file: PathBuf::from(prompt_file),
            transforms,
            endpoint,
        };
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// The URL the request is posted to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

/// Merge a `.env` file from the working directory (or a parent) into the process environment.
///
/// Existing variables are not overwritten and a missing file is not an error.
pub fn load_env_file() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => tracing::debug!("no environment file found"),
        Err(e) => tracing::warn!("ignoring unreadable environment file: {e}"),
    }
}

/// Merge the environment file at `path`, with the same rules as [`load_env_file`].
pub fn load_env_path(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "no environment file found")
        }
        Err(e) => tracing::warn!(path = %path.display(), "ignoring unreadable environment file: {e}"),
    }
}

/// Lookup over the real process environment.
pub fn process_env(var: &str) -> Option<String> {
    env::var(var).ok()
}

fn parse_transforms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
