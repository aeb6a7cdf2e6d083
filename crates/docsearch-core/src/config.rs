use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const MAX_TITLE_BOOST: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSettings {
    /// Artifact file, or a built site directory to search for one.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub default_limit: usize,
    pub max_limit: usize,
    pub snippet_chars: usize,
    pub prefix_match: bool,
    pub title_boost: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub index: IndexSettings,
    pub search: SearchSettings,
    pub server: ServerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            index: IndexSettings { path: "site/search/search_index.json".to_string() },
            search: SearchSettings {
                default_limit: 10,
                max_limit: 100,
                snippet_chars: 160,
                prefix_match: true,
                title_boost: 1,
            },
            server: ServerSettings { host: "127.0.0.1".to_string(), port: 8000 },
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        let s = &self.search;
        if s.default_limit == 0 {
            return Err(Error::InvalidConfig("search.default_limit must be at least 1".into()));
        }
        if s.default_limit > s.max_limit {
            return Err(Error::InvalidConfig(format!(
                "search.default_limit ({}) exceeds search.max_limit ({})",
                s.default_limit, s.max_limit
            )));
        }
        if s.title_boost == 0 || s.title_boost > MAX_TITLE_BOOST {
            return Err(Error::InvalidConfig(format!(
                "search.title_boost must be between 1 and {} (got {})",
                MAX_TITLE_BOOST, s.title_boost
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(Path::new("."), &env_name)
    }

    /// Merge defaults, `config.toml`, `config.<env>.toml` and `APP_*` variables,
    /// reading the files from `base`.
    pub fn load_for_env(base: &Path, env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(base.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            other => tracing::warn!(env = other, "unknown RUST_ENV, using base configuration only"),
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.settings()?.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
