//! Alias value object - the name a function version is published under
//!
//! The same string names the Lambda alias and the API Gateway stage, so it
//! has to satisfy both naming rules.

use std::fmt;

const MAX_LEN: usize = 128;

/// Why an alias string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    Empty,
    TooLong(usize),
    InvalidCharacter(char),
    NumericOnly,
}

impl fmt::Display for AliasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasError::Empty => write!(f, "alias must not be empty"),
            AliasError::TooLong(len) => {
                write!(f, "alias is {} characters long (max {})", len, MAX_LEN)
            }
            AliasError::InvalidCharacter(c) => write!(
                f,
                "alias contains '{}' (only letters, digits, '-' and '_' are allowed)",
                c
            ),
            AliasError::NumericOnly => {
                write!(f, "alias must not be all digits (it would shadow a version)")
            }
        }
    }
}

impl std::error::Error for AliasError {}

/// A validated alias / stage name such as `staging` or `prod`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias(String);

impl Alias {
    pub fn parse(raw: &str) -> Result<Self, AliasError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AliasError::Empty);
        }
        if raw.len() > MAX_LEN {
            return Err(AliasError::TooLong(raw.len()));
        }
        if let Some(c) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(AliasError::InvalidCharacter(c));
        }
        if raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(AliasError::NumericOnly);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
