//! Onboarding page content.
//!
//! A [`PageDeck`] is built once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sanitize::sanitize_terminal_text;

const BUILTIN_DESCRIPTION: &str =
    "Lorem Ipsum is simply dummy text of the printing and typesetting Industry.";

/// Key of an image asset supplied by the host packaging.
///
/// The view resolves the key to something drawable; the domain only
/// guarantees it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

#[derive(Debug, Error)]
#[error("image reference must not be empty")]
pub struct EmptyImageRef;

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Result<Self, EmptyImageRef> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(EmptyImageRef);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageRef {
    type Error = EmptyImageRef;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One introductory page: an image, a title and a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardPage {
    pub image: ImageRef,
    pub title: String,
    pub description: String,
}

impl OnboardPage {
    #[must_use]
    pub fn new(image: ImageRef, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image,
            title: title.into(),
            description: description.into(),
        }
    }

    fn sanitized(self) -> Self {
        Self {
            image: self.image,
            title: sanitize_terminal_text(&self.title).trim().to_string(),
            description: sanitize_terminal_text(&self.description).trim().to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("onboarding deck must contain at least one page")]
    Empty,
    #[error("onboarding page {index} has a blank title")]
    BlankTitle { index: usize },
}

/// Ordered, fixed, non-empty sequence of onboarding pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDeck {
    pages: Vec<OnboardPage>,
}

impl PageDeck {
    /// Builds a deck from untrusted content.
    ///
    /// Titles and descriptions are stripped of terminal control sequences.
    pub fn new(pages: Vec<OnboardPage>) -> Result<Self, DeckError> {
        if pages.is_empty() {
            return Err(DeckError::Empty);
        }
        let pages: Vec<OnboardPage> = pages.into_iter().map(OnboardPage::sanitized).collect();
        if let Some(index) = pages.iter().position(|page| page.title.is_empty()) {
            return Err(DeckError::BlankTitle { index });
        }
        Ok(Self { pages })
    }

    /// The three pages shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let page = |image: &str, title: &str| OnboardPage {
            image: ImageRef(image.to_string()),
            title: title.to_string(),
            description: BUILTIN_DESCRIPTION.to_string(),
        };
        Self {
            pages: vec![
                page("onboard1", "Make it Easy One"),
                page("onboard2", "Make it Easy Two"),
                page("onboard3", "Make it Easy Three"),
            ],
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&OnboardPage> {
        self.pages.get(index)
    }

    /// Page at `index`, clamped to the last page.
    #[must_use]
    pub fn clamped(&self, index: usize) -> &OnboardPage {
        &self.pages[index.min(self.pages.len() - 1)]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OnboardPage> {
        self.pages.iter()
    }
}

impl Default for PageDeck {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a PageDeck {
    type Item = &'a OnboardPage;
    type IntoIter = std::slice::Iter<'a, OnboardPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
