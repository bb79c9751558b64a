//! `lib/CMakeLists.txt`

use super::{CMAKE_MINIMUM_VERSION, GEOMETRY_TARGET, LIBRARY_TARGET, render};
use crate::AllowList;

const TEMPLATE: &str = "\
cmake_minimum_required(VERSION @CMAKE_MINIMUM_VERSION@)

project(lib)

set(DEP_SRCS ../dependencies/jsoncpp/jsoncpp.cpp)

set(SRCS @SRCS@)

set(HDRS @HDRS@)

add_library(@LIBRARY_TARGET@ SHARED ${HDRS} ${SRCS} ${DEP_SRCS})
add_dependencies(@LIBRARY_TARGET@ @GEOMETRY_TARGET@)
";

/// Manifest building every allow-listed library file into one shared
/// library that depends on the geometry headers.
pub fn library_manifest(allow: &AllowList) -> String {
    let sources = allow.library_sources().join(" ");
    let headers = allow.library_headers().join(" ");

    render(
        TEMPLATE,
        &[
            ("CMAKE_MINIMUM_VERSION", CMAKE_MINIMUM_VERSION),
            ("SRCS", sources.as_str()),
            ("HDRS", headers.as_str()),
            ("LIBRARY_TARGET", LIBRARY_TARGET),
            ("GEOMETRY_TARGET", GEOMETRY_TARGET),
        ],
    )
}
