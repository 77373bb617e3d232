//! Configuration constants and utilities for gim
//!
//! Runtime knobs are read from environment variables; everything else is a
//! compile-time constant.

/// Environment variable holding the tracing filter directive (e.g. `gim=debug`)
pub const LOG_FILTER_ENV_VAR: &str = "GIM_LOG";

/// Environment variable naming the file tracing output is appended to
pub const LOG_FILE_ENV_VAR: &str = "GIM_LOG_FILE";

/// Filter used when `GIM_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Width the status line text is padded to, so shorter labels overwrite longer ones
pub const DEFAULT_STATUS_WIDTH: usize = 30;

/// Size of a single stdin read; one read is one decode unit
pub const INPUT_CHUNK_SIZE: usize = 1024;

/// Get the log filter directive, checking the environment first
pub fn get_log_filter() -> String {
    std::env::var_os(LOG_FILTER_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Get the log file path; `None` disables logging since stdout is the editing surface
pub fn get_log_file() -> Option<String> {
    std::env::var_os(LOG_FILE_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .filter(|path| !path.is_empty())
}
