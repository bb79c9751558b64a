//! Best-effort revision identifiers

use crate::Error;

/// Sentinel recorded when the revision cannot be determined.
pub const UNKNOWN_REVISION: &str = "UNKNOWN";

/// Outcome of a revision lookup.
///
/// Lookup failures are a normal, expected branch: they become
/// [`Revision::Unknown`] and render as [`UNKNOWN_REVISION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// Short revision id reported by the client
    Known(String),
    /// The client was missing or failed; `reason` is kept for logging
    Unknown { reason: String },
}

impl Revision {
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self::Unknown {
            reason: reason.into(),
        }
    }

    /// The text embedded in the provenance banner.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(id) => id,
            Self::Unknown { .. } => UNKNOWN_REVISION,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Result<String, Error>> for Revision {
    fn from(result: Result<String, Error>) -> Self {
        match result {
            Ok(id) => Self::Known(id),
            Err(e) => Self::unknown(e.to_string()),
        }
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
