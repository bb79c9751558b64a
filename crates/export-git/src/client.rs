//! Invocation of the external revision-control client

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, Result, Revision};

/// Program used when no client path is configured; resolved through `PATH`.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Handle on a revision-control client executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitClient {
    program: PathBuf,
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_PROGRAM)
    }
}

impl GitClient {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// True when the program is given as a path rather than a bare command
    /// name. Only explicit paths are checked for existence up front.
    fn is_explicit_path(&self) -> bool {
        self.program.is_absolute() || self.program.components().count() > 1
    }

    /// The program to spawn. A relative explicit path is anchored to the
    /// current directory, since the client itself runs inside the source
    /// tree.
    fn resolved_program(&self) -> Result<PathBuf> {
        if !self.is_explicit_path() || self.program.is_absolute() {
            return Ok(self.program.clone());
        }
        std::path::absolute(&self.program).map_err(|source| Error::Spawn {
            program: self.program.clone(),
            source,
        })
    }

    /// Run `rev-parse --short HEAD` in `repo_dir` and return the trimmed id.
    pub fn short_head(&self, repo_dir: &Path) -> Result<String> {
        let program = self.resolved_program()?;
        if self.is_explicit_path() && !program.exists() {
            return Err(Error::ClientNotFound { path: program });
        }

        tracing::debug!(
            "Running {} rev-parse --short HEAD in {}",
            program.display(),
            repo_dir.display()
        );

        let output = Command::new(&program)
            .args(["rev-parse", "--short", "HEAD"])
            .current_dir(repo_dir)
            .output()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let id = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or("")
            .trim()
            .to_string();

        if id.is_empty() {
            return Err(Error::EmptyOutput { program });
        }

        Ok(id)
    }

    /// Best-effort lookup of the checked-out revision.
    ///
    /// Never fails: any error is logged and turned into
    /// [`Revision::Unknown`].
    pub fn revision(&self, repo_dir: &Path) -> Revision {
        let revision = Revision::from(self.short_head(repo_dir));
        if let Revision::Unknown { reason } = &revision {
            tracing::warn!("Recording revision as UNKNOWN: {}", reason);
        }
        revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bare_command_is_not_an_explicit_path() {
        assert!(!GitClient::default().is_explicit_path());
        assert!(GitClient::new("/usr/bin/git").is_explicit_path());
        assert!(GitClient::new("tools/git").is_explicit_path());
    }

    #[test]
    fn relative_explicit_path_is_anchored_to_current_dir() {
        let resolved = GitClient::new("tools/git").resolved_program().unwrap();

        assert!(resolved.is_absolute());
        assert_eq!(resolved, std::env::current_dir().unwrap().join("tools/git"));
    }

    #[test]
    fn bare_command_is_left_for_path_lookup() {
        let resolved = GitClient::default().resolved_program().unwrap();
        assert_eq!(resolved, PathBuf::from(DEFAULT_GIT_PROGRAM));
    }

    #[test]
    fn missing_explicit_client_is_client_not_found() {
        let temp = TempDir::new().unwrap();
        let client = GitClient::new(temp.path().join("no-such-git"));

        let err = client.short_head(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ClientNotFound { .. }));
    }

    #[test]
    fn missing_bare_command_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let client = GitClient::new("stadic-export-no-such-client");

        let err = client.short_head(temp.path()).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[test]
    fn missing_client_revision_is_unknown() {
        let temp = TempDir::new().unwrap();
        let client = GitClient::new(temp.path().join("bin/git"));

        assert_eq!(client.revision(temp.path()).as_str(), "UNKNOWN");
    }
}
