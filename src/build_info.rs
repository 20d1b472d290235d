//! Compile-time build information, generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `floppy-fish <version> (<date>, <commit>)`
pub fn version_line() -> String {
    format!(
        "floppy-fish {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
