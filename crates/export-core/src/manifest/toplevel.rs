//! Top-level `CMakeLists.txt`
//!
//! The compiler checks below are CMake code evaluated by whoever builds the
//! export; they are emitted as text and never interpreted here.

use super::{CMAKE_MINIMUM_VERSION, GEOMETRY_TARGET, render};

/// Archive holding the geometry headers.
pub const GEOMETRY_ARCHIVE: &str = "boost-geometry-1_57.tar.gz";

/// Where the geometry archive is fetched from when no prefix is given: the
/// copy bundled in the exported dependency tree.
pub const DEFAULT_GEOMETRY_PREFIX: &str = "${CMAKE_SOURCE_DIR}/dependencies/";

const TEMPLATE: &str = "\
cmake_minimum_required(VERSION @CMAKE_MINIMUM_VERSION@)

project(stadic)

if(CMAKE_COMPILER_IS_GNUCXX)
  # nullptr and range-based for need g++ 4.6
  if(${CMAKE_CXX_COMPILER_VERSION} VERSION_LESS \"4.6.0\")
    message(FATAL_ERROR \"g++ versions earlier than 4.6.0 are not supported\")
  endif()
  set(CMAKE_CXX_FLAGS \"${CMAKE_CXX_FLAGS} -std=c++11\")
elseif(MSVC)
  # 18.0.21005.1 is Visual Studio 2013
  if(${CMAKE_C_COMPILER_VERSION} VERSION_LESS \"18.0.21005.1\")
    message(FATAL_ERROR \"Visual Studio earlier than VS2013 is not supported\")
  endif()
elseif(\"${CMAKE_CXX_COMPILER_ID}\" STREQUAL \"Clang\")
  set(CMAKE_CXX_FLAGS \"${CMAKE_CXX_FLAGS} -std=c++11 -stdlib=libc++\")
endif()

set(CMAKE_LIBRARY_OUTPUT_DIRECTORY ${CMAKE_BINARY_DIR}/bin)
set(CMAKE_RUNTIME_OUTPUT_DIRECTORY ${CMAKE_BINARY_DIR}/bin)

# Boost
include(ExternalProject)
ExternalProject_Add(@GEOMETRY_TARGET@
  URL @GEOMETRY_URL@
  CONFIGURE_COMMAND \"\"
  BUILD_COMMAND \"\"
  INSTALL_COMMAND \"\")
set(Boost_INCLUDE_DIR ${CMAKE_BINARY_DIR}/@GEOMETRY_TARGET@-prefix/src/@GEOMETRY_TARGET@)
include_directories(${Boost_INCLUDE_DIR})

# JSON Dependency
include_directories(\"dependencies/jsoncpp\")

add_subdirectory(lib)
add_subdirectory(utilities)
";

/// URL of the geometry archive for a given prefix.
///
/// An empty prefix points at the bundled archive; any other prefix is used
/// verbatim, so it should end with a separator.
pub fn geometry_url(boost_prefix: &str) -> String {
    let prefix = if boost_prefix.is_empty() {
        DEFAULT_GEOMETRY_PREFIX
    } else {
        boost_prefix
    };
    format!("{prefix}{GEOMETRY_ARCHIVE}")
}

/// Manifest tying the export together: toolchain requirements, the
/// geometry fetch step, the JSON include path and both subdirectories.
pub fn top_level_manifest(boost_prefix: &str) -> String {
    let url = geometry_url(boost_prefix);
    render(
        TEMPLATE,
        &[
            ("CMAKE_MINIMUM_VERSION", CMAKE_MINIMUM_VERSION),
            ("GEOMETRY_TARGET", GEOMETRY_TARGET),
            ("GEOMETRY_URL", url.as_str()),
        ],
    )
}
