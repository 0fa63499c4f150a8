//! Public slug value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Number of symbols in a generated slug.
pub const SLUG_LENGTH: usize = 8;

/// The 62-symbol alphabet slugs are drawn from.
pub const SLUG_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Opaque public identifier of a project, used in unauthenticated URLs.
///
/// Exactly `SLUG_LENGTH` ASCII alphanumeric characters. Case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicSlug(String);

impl PublicSlug {
    /// Validates a candidate slug.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.len() != SLUG_LENGTH {
            return Err(ValidationError::invalid_format(
                "public_slug",
                format!("must be {} characters", SLUG_LENGTH),
            ));
        }
        if !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::invalid_format(
                "public_slug",
                "must be alphanumeric",
            ));
        }
        Ok(Self(value))
    }

    /// Builds a slug from positions in `SLUG_ALPHABET`, wrapping out-of-range values.
    pub fn from_alphabet(positions: [usize; SLUG_LENGTH]) -> Self {
        Self(
            positions
                .iter()
                .map(|&p| char::from(SLUG_ALPHABET[p % SLUG_ALPHABET.len()]))
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
