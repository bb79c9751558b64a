//! The curated set of units selected for export
//!
//! An [`AllowList`] names three kinds of unit:
//!
//! - library modules, each a `<name>.cpp` / `<name>.h` pair under `lib/`
//! - header-only files under `lib/`, named literally
//! - utility programs, each a single `<name>.cpp` under `utilities/`
//!
//! Both the copier and the manifest synthesizer resolve file names through
//! the methods here, which is what keeps manifests and copied files in
//! agreement.

use crate::{Error, Result};

/// Ordered, duplicate-free selection of library and utility units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    modules: Vec<String>,
    headers: Vec<String>,
    utilities: Vec<String>,
}

impl AllowList {
    /// Build an allow-list, validating every name.
    ///
    /// Order is preserved. Repeated names are dropped with a warning, and a
    /// header-only entry naming one of a module's own files (`<name>.cpp`
    /// or `<name>.h`) is dropped in favour of the module pairing, so no
    /// file is ever listed twice.
    pub fn new<M, H, U>(modules: M, headers: H, utilities: U) -> Result<Self>
    where
        M: IntoIterator,
        M::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        let modules = collect_unique("library module", modules)?;
        let utilities = collect_unique("utility", utilities)?;

        let mut headers = collect_unique("header", headers)?;
        headers.retain(|header| {
            let paired = modules
                .iter()
                .any(|m| header_for(m) == *header || source_for(m) == *header);
            if paired {
                tracing::warn!(
                    "Header entry '{}' is already provided by its library module; listing it once",
                    header
                );
            }
            !paired
        });

        Ok(Self {
            modules,
            headers,
            utilities,
        })
    }

    /// Library module names, each implying a source/header pair.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Header-only file names.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Utility program names.
    pub fn utilities(&self) -> &[String] {
        &self.utilities
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.headers.is_empty() && self.utilities.is_empty()
    }

    /// `<module>.cpp` for every library module.
    pub fn library_sources(&self) -> Vec<String> {
        self.modules.iter().map(|m| source_for(m)).collect()
    }

    /// Header-only files followed by `<module>.h` for every library module.
    pub fn library_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .cloned()
            .chain(self.modules.iter().map(|m| header_for(m)))
            .collect()
    }

    /// Every file that belongs in the flat library directory: sources, then
    /// headers.
    pub fn library_files(&self) -> Vec<String> {
        let mut files = self.library_sources();
        files.extend(self.library_headers());
        files
    }

    /// `<utility>.cpp` for every utility program.
    pub fn utility_sources(&self) -> Vec<String> {
        self.utilities.iter().map(|u| source_for(u)).collect()
    }
}

pub(crate) fn source_for(name: &str) -> String {
    format!("{name}.cpp")
}

pub(crate) fn header_for(name: &str) -> String {
    format!("{name}.h")
}

fn collect_unique<I>(category: &str, names: I) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut unique: Vec<String> = Vec::new();
    for name in names {
        let name = name.into();
        export_fs::validate_file_name(&name).map_err(|e| match e {
            export_fs::Error::InvalidFileName { name, reason } => Error::InvalidEntry {
                category: category.to_string(),
                name,
                reason,
            },
            other => Error::Fs(other),
        })?;

        if unique.contains(&name) {
            tracing::warn!("Dropping duplicate {} entry '{}'", category, name);
            continue;
        }
        unique.push(name);
    }
    Ok(unique)
}
