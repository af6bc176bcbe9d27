//! Strongly-typed value objects used by the listing layer.
//!
//! These wrappers enforce basic invariants (e.g., non-empty identifiers, a
//! closed set of listing statuses) so that once a value reaches the service
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    ResourceId,
    "Backend identifier of a single artwork, order or artist."
);

/// Publication status accepted by the backend's `status` query parameter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ListingStatus {
    Enabled,
    Disabled,
    Draft,
}

impl ListingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Enabled => "Enabled",
            ListingStatus::Disabled => "Disabled",
            ListingStatus::Draft => "Draft",
        }
    }
}

impl Display for ListingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enabled" => Ok(ListingStatus::Enabled),
            "Disabled" => Ok(ListingStatus::Disabled),
            "Draft" => Ok(ListingStatus::Draft),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown listing status `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_id_is_trimmed() {
        let id = ResourceId::new("  A-1024 ").unwrap();
        assert_eq!(id.as_str(), "A-1024");
    }

    #[test]
    fn resource_id_rejects_blank_input() {
        assert_eq!(
            ResourceId::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn listing_status_parses_exact_spelling() {
        assert_eq!("Draft".parse::<ListingStatus>(), Ok(ListingStatus::Draft));
        assert_eq!(ListingStatus::Enabled.to_string(), "Enabled");
        assert!("enabled".parse::<ListingStatus>().is_err());
    }
}
