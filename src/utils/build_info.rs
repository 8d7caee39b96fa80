//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `"<date> (<commit>)"`, as printed by `--version`.
pub fn version_string() -> String {
    format!("{} ({})", BUILD_DATE, BUILD_COMMIT)
}
