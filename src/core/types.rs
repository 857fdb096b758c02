//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`PageName`] - Validated page name
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use linkweb::core::types::PageName;
//!
//! // Valid constructions
//! let name = PageName::new("HomePage").unwrap();
//! assert_eq!(name.as_str(), "HomePage");
//!
//! // Invalid constructions fail at creation time
//! assert!(PageName::new("").is_err());
//! assert!(PageName::new("has space").is_err());
//! ```

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a single input token, in characters.
///
/// The tokenizer caps every token it produces at this length, so a longer
/// string can never reach [`PageName::new`] through the command stream.
pub const MAX_TOKEN_LEN: usize = 64;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid page name: {0}")]
    InvalidPageName(String),
}

/// A validated page name.
///
/// Page names arrive through whitespace tokenization, so a valid name:
/// - Cannot be empty
/// - Cannot contain whitespace or ASCII control characters
/// - Cannot exceed [`MAX_TOKEN_LEN`] characters
///
/// Names are case-sensitive: `Home` and `home` are distinct pages.
///
/// # Example
///
/// ```
/// use linkweb::core::types::PageName;
///
/// let name = PageName::new("Wiki/Main").unwrap();
/// assert_eq!(name.as_str(), "Wiki/Main");
///
/// assert!(PageName::new("").is_err());
/// assert!(PageName::new("two words").is_err());
/// assert!(PageName::new("a".repeat(65)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageName(String);

impl PageName {
    /// Create a new validated page name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidPageName` if the name is empty, contains
    /// whitespace or control characters, or exceeds [`MAX_TOKEN_LEN`]
    /// characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a page name.
    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidPageName(
                "page name cannot be empty".into(),
            ));
        }

        if name.chars().count() > MAX_TOKEN_LEN {
            return Err(TypeError::InvalidPageName(format!(
                "page name cannot exceed {MAX_TOKEN_LEN} characters"
            )));
        }

        for c in name.chars() {
            if c.is_whitespace() {
                return Err(TypeError::InvalidPageName(
                    "page name cannot contain whitespace".into(),
                ));
            }
            if c.is_ascii_control() {
                return Err(TypeError::InvalidPageName(
                    "page name cannot contain control characters".into(),
                ));
            }
        }

        Ok(())
    }

    /// Get the page name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PageName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PageName> for String {
    fn from(name: PageName) -> Self {
        name.0
    }
}

impl AsRef<str> for PageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
