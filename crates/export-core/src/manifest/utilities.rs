//! `utilities/CMakeLists.txt`

use super::{CMAKE_MINIMUM_VERSION, LIBRARY_TARGET, render};
use crate::AllowList;

const PREAMBLE: &str = "\
cmake_minimum_required(VERSION @CMAKE_MINIMUM_VERSION@)

project(utilities)

include_directories(../lib)

";

const EXECUTABLE: &str = "\
add_executable(@NAME@ @SOURCE@)
target_link_libraries(@NAME@ @LIBRARY_TARGET@)

";

/// Manifest declaring one executable per utility, each linked against the
/// library target.
pub fn utilities_manifest(allow: &AllowList) -> String {
    let mut manifest = render(
        PREAMBLE,
        &[("CMAKE_MINIMUM_VERSION", CMAKE_MINIMUM_VERSION)],
    );

    for (name, source) in allow.utilities().iter().zip(allow.utility_sources()) {
        manifest.push_str(&render(
            EXECUTABLE,
            &[
                ("NAME", name.as_str()),
                ("SOURCE", source.as_str()),
                ("LIBRARY_TARGET", LIBRARY_TARGET),
            ],
        ));
    }

    manifest
}
