//! Provenance banner and the README that carries it

use std::path::Path;

use chrono::{DateTime, Utc};
use export_git::{GitClient, Revision};

/// Format of the export timestamp in the banner.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

const README_TEMPLATE: &str = "\
STADIC
======

Simulation Tool for Architectural Daylighting and Integrated Controls

Developed by Rick Mistrick, Craig Casey, and Jason DeGraw at Penn State

Description
-----------

STADIC is based upon the Radiance ray-tracing software system. This is
a subset created from git commit @REVISION@ on @TIMESTAMP@.
";

/// What state of the source tree an export was taken from, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceBanner {
    pub revision: Revision,
    pub exported_at: DateTime<Utc>,
}

impl ProvenanceBanner {
    pub fn new(revision: Revision, exported_at: DateTime<Utc>) -> Self {
        Self {
            revision,
            exported_at,
        }
    }

    /// Ask `client` for the revision checked out in `source` and stamp the
    /// current time. Never fails; an unavailable client yields `UNKNOWN`.
    pub fn capture(client: &GitClient, source: &Path) -> Self {
        Self::new(client.revision(source), Utc::now())
    }

    pub fn timestamp(&self) -> String {
        self.exported_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The README text with the revision and timestamp filled in.
    pub fn render_readme(&self) -> String {
        README_TEMPLATE
            .replace("@REVISION@", self.revision.as_str())
            .replace("@TIMESTAMP@", &self.timestamp())
    }
}
