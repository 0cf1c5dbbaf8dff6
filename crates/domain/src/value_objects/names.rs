//! Validated name tokens for roster entities
//!
//! The provider identifies both items and categories by lowercase name
//! tokens. These newtypes ensure a token is valid by construction:
//! - Non-empty after trimming
//! - Lowercased (the provider matches names case-insensitively)
//! - Free of characters that would corrupt a request path or the
//!   comma-joined `type` query parameter

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Characters that may never appear inside a name token
const FORBIDDEN_CHARS: [char; 4] = ['/', '?', '#', ','];

fn normalize_token(kind: &str, raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{kind} cannot be empty")));
    }
    if let Some(c) = trimmed
        .chars()
        .find(|c| c.is_whitespace() || FORBIDDEN_CHARS.contains(c))
    {
        return Err(DomainError::validation(format!(
            "{kind} cannot contain {c:?}"
        )));
    }
    Ok(trimmed.to_lowercase())
}

// ============================================================================
// ItemName
// ============================================================================

/// A validated item (creature) name, e.g. `bulbasaur`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming
    /// or contains whitespace, `/`, `?`, `#` or `,`.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        normalize_token("Item name", name.as_ref()).map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

// ============================================================================
// CategoryName
// ============================================================================

/// A validated category ("type") name, e.g. `grass`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a new validated category name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` under the same rules as [`ItemName::new`].
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        normalize_token("Category name", name.as_ref()).map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CategoryName> for String {
    fn from(name: CategoryName) -> String {
        name.0
    }
}
