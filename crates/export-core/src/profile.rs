//! Export profiles: allow-lists stored as data files
//!
//! A profile names the units to export. It can be written in TOML, JSON or
//! YAML; the format follows the file extension.
//!
//! ```toml
//! [library]
//! modules = ["filepath", "logging"]
//! headers = ["stadicapi.h"]
//!
//! [utilities]
//! programs = ["dxgridmaker"]
//! ```

use export_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::{AllowList, Result};

/// The profile shipped with the tool, used when none is given.
const BUNDLED_PROFILE: &str = include_str!("../profiles/stadic.toml");

/// Library section of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibrarySection {
    /// Modules exported as `<name>.cpp` + `<name>.h`
    #[serde(default)]
    pub modules: Vec<String>,

    /// Header-only files, named literally
    #[serde(default)]
    pub headers: Vec<String>,
}

/// Utilities section of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UtilitiesSection {
    /// Programs exported as `<name>.cpp`
    #[serde(default)]
    pub programs: Vec<String>,
}

/// A parsed export profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub library: LibrarySection,

    #[serde(default)]
    pub utilities: UtilitiesSection,
}

impl Profile {
    /// Load a profile file; the format is chosen from its extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let profile: Profile = ConfigStore::new().load(path)?;
        tracing::debug!(
            "Loaded profile {} ({} modules, {} headers, {} utilities)",
            path,
            profile.library.modules.len(),
            profile.library.headers.len(),
            profile.utilities.programs.len()
        );
        Ok(profile)
    }

    /// The profile bundled with the tool.
    pub fn bundled() -> Result<Self> {
        Self::parse_toml(BUNDLED_PROFILE)
    }

    /// Parse a profile from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let origin = NormalizedPath::new("<bundled>/stadic.toml");
        Ok(ConfigStore::new().parse(&origin, "toml", content)?)
    }

    /// Validate the profile into an [`AllowList`].
    pub fn allow_list(&self) -> Result<AllowList> {
        AllowList::new(
            self.library.modules.iter().cloned(),
            self.library.headers.iter().cloned(),
            self.utilities.programs.iter().cloned(),
        )
    }
}
