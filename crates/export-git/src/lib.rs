//! Revision-control client access for stadic-export
//!
//! Only one question is ever asked of the client: which commit is checked
//! out. The answer is best-effort, so callers get a [`Revision`] value
//! rather than an error.

pub mod client;
pub mod error;
pub mod revision;

pub use client::{DEFAULT_GIT_PROGRAM, GitClient};
pub use error::{Error, Result};
pub use revision::{Revision, UNKNOWN_REVISION};
