//! Configuration for Onboard.
//!
//! Read from `$ONBOARD_CONFIG` when set, otherwise `~/.onboard/config.toml`.
//! A missing file is not an error: every section is optional.

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use onboard_types::{DeckError, OnboardPage, PageDeck, ui::UiOptions};

pub const CONFIG_ENV_VAR: &str = "ONBOARD_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OnboardConfig {
    pub ui: Option<UiConfig>,
    pub flow: Option<FlowConfig>,
    /// Replaces the built-in pages when present.
    pub pages: Option<Vec<OnboardPage>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid pages in config at {}: {source}", .path.display())]
    Deck {
        path: PathBuf,
        #[source]
        source: DeckError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Deck { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Use ASCII-only glyphs for markers and buttons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable slide and indicator animations.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// What the host does when the user taps "Skip".
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipBehavior {
    /// Jump to the last page so the user still sees "Get Started".
    #[default]
    LastPage,
    /// Treat skip as completing the flow.
    Finish,
    /// Leave the screen as is.
    Ignore,
}

impl SkipBehavior {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastPage => "last_page",
            Self::Finish => "finish",
            Self::Ignore => "ignore",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowConfig {
    #[serde(default)]
    pub skip: SkipBehavior,
}

impl OnboardConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let config = Self::parse(&content).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // Validate the deck up front so a bad override is reported with its path.
        config.deck().map_err(|source| ConfigError::Deck {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let ui = self.ui.as_ref();
        UiOptions {
            ascii_only: ui.is_some_and(|ui| ui.ascii_only),
            high_contrast: ui.is_some_and(|ui| ui.high_contrast),
            reduced_motion: ui.is_some_and(|ui| ui.reduced_motion),
        }
    }

    #[must_use]
    pub fn skip_behavior(&self) -> SkipBehavior {
        self.flow.as_ref().map(|flow| flow.skip).unwrap_or_default()
    }

    /// The configured deck, or the built-in one when `pages` is absent.
    pub fn deck(&self) -> Result<PageDeck, DeckError> {
        match &self.pages {
            Some(pages) => PageDeck::new(pages.clone()),
            None => Ok(PageDeck::builtin()),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".onboard").join("config.toml"))
}
