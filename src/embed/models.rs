//! Data structures for the video identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-supplied video identifier.
///
/// No shape is enforced. The only distinction the renderer makes is empty
/// versus non-empty, so an empty string never becomes a `VideoId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap raw input, returning `None` when it is empty.
    ///
    /// The input is taken as-is: whitespace-only input is still an identifier.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
