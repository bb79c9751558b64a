//! Shared test utilities for the stadic-export workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] - fake revision-control clients
//! - [`tree`] - [`SourceTree`] builder for scratch source trees

pub mod git;
pub mod tree;

pub use git::{failing_git_client, fake_git_client};
pub use tree::{SourceTree, list_dir, snapshot_files};
