//! Selective export and build-manifest synthesis
//!
//! Turns a source tree plus an [`AllowList`] into a standalone, buildable
//! distribution:
//!
//! ```text
//!   Destination::claim ──> Copier ──> manifest::synthesize ──> README
//!   (refuse if present)    deps,       lib/, utilities/,        provenance
//!                          lib,        top level                banner
//!                          utilities
//! ```
//!
//! Manifests are pure functions of the allow-list, so the files they
//! reference are exactly the files the copier wrote.

pub mod allowlist;
pub mod copier;
pub mod error;
pub mod exporter;
pub mod guard;
pub mod manifest;
pub mod plan;
pub mod profile;
pub mod provenance;

pub use allowlist::AllowList;
pub use copier::{CopiedFiles, Copier};
pub use error::{Error, Result};
pub use exporter::{DEFAULT_DESTINATION, ExportOptions, ExportReport, export};
pub use guard::Destination;
pub use manifest::{ManifestEntry, synthesize};
pub use plan::ExportPlan;
pub use profile::Profile;
pub use provenance::ProvenanceBanner;
