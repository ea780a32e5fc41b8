//! core::types
//!
//! Strong types for database identifiers.
//!
//! # Types
//!
//! - [`Identifier`] - Validated snake-case table or column name
//!
//! # Validation
//!
//! Identifiers are checked at construction time so the naming rules in
//! [`crate::core::naming`] never see input they cannot turn into a
//! function name.
//!
//! # Examples
//!
//! ```
//! use dbtpl_fixcheck::core::types::Identifier;
//!
//! let table = Identifier::new("xo_test").unwrap();
//! assert_eq!(table.as_str(), "xo_test");
//!
//! assert!(Identifier::new("").is_err());
//! assert!(Identifier::new("1st_table").is_err());
//! assert!(Identifier::new("has space").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// A validated database identifier.
///
/// Identifiers must:
/// - Be non-empty
/// - Contain only ASCII alphanumerics and `_`
/// - Not start with a digit
/// - Contain at least one alphanumeric character
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Create a new validated identifier.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidIdentifier` if the name is not a plain
    /// snake-case identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidIdentifier(
                "identifier cannot be empty".into(),
            ));
        }

        if name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(TypeError::InvalidIdentifier(format!(
                "'{}' cannot start with a digit",
                name
            )));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(TypeError::InvalidIdentifier(format!(
                "'{}' contains invalid character {:?}",
                name, c
            )));
        }

        if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(TypeError::InvalidIdentifier(format!(
                "'{}' has no alphanumeric characters",
                name
            )));
        }

        Ok(())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = TypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Identifier> for String {
    fn from(ident: Identifier) -> Self {
        ident.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod identifier {
        use super::*;

        #[test]
        fn valid_identifiers() {
            assert!(Identifier::new("id").is_ok());
            assert!(Identifier::new("xo_test").is_ok());
            assert!(Identifier::new("_private").is_ok());
            assert!(Identifier::new("table2").is_ok());
            assert!(Identifier::new("MixedCase").is_ok());
        }

        #[test]
        fn empty_rejected() {
            assert_eq!(
                Identifier::new(""),
                Err(TypeError::InvalidIdentifier(
                    "identifier cannot be empty".into()
                ))
            );
        }

        #[test]
        fn leading_digit_rejected() {
            assert!(Identifier::new("1table").is_err());
        }

        #[test]
        fn punctuation_rejected() {
            assert!(Identifier::new("user-id").is_err());
            assert!(Identifier::new("user id").is_err());
            assert!(Identifier::new("public.users").is_err());
        }

        #[test]
        fn underscores_only_rejected() {
            assert!(Identifier::new("___").is_err());
        }

        #[test]
        fn serde_rejects_invalid() {
            let result: Result<Identifier, _> = serde_json::from_str("\"bad name\"");
            assert!(result.is_err());
        }

        #[test]
        fn display_matches_input() {
            let ident = Identifier::new("xo_test").unwrap();
            assert_eq!(ident.to_string(), "xo_test");
            assert_eq!(String::from(ident), "xo_test");
        }
    }
}
