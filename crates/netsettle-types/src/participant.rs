//! Participant identity.
//!
//! A participant is an opaque name. Identity is exact string equality —
//! no case folding or whitespace normalization happens here; callers trim
//! at the input boundary. The derived `Ord` gives the lexicographic
//! ordering the settlement engine uses to break ties deterministically.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque participant identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty after trimming.
    ///
    /// The ledger rejects blank participants at record time; a name of
    /// pure whitespace is considered blank too.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
