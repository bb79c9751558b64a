//! Filesystem primitives for stadic-export
//!
//! Provides normalized paths, atomic writes, file and tree copies, and
//! format-agnostic loading of profile files.

pub mod config;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use layout::TreePath;
pub use path::{NormalizedPath, validate_file_name};
