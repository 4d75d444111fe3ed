//! Calculator configuration management.
//!
//! This module provides configuration loading, global verbose flag
//! management, and the default calculator settings.

mod defaults;

// Re-export public types
pub use defaults::CalculatorDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["dorkroom.yml", "dorkroom.yaml", "calculator_defaults.yml"];

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct CalculatorConfigHandle {
    pub config: CalculatorConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl CalculatorConfigHandle {
    fn with_config(
        config: CalculatorConfig,
        source: Option<PathBuf>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CalculatorConfig {
    pub defaults: CalculatorDefaults,
}

impl CalculatorConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }
}

/// Load configuration from disk, optionally forcing a specific path.
pub fn load_calculator_config(custom_path: Option<&Path>) -> CalculatorConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<CalculatorConfig>(&contents) {
                Ok(config) => {
                    let sanitized = config.sanitize();
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return CalculatorConfigHandle::with_config(sanitized, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse calculator config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read calculator config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No calculator config found; using built-in defaults.".to_string());
    CalculatorConfigHandle::with_config(CalculatorConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("DORKROOM_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("dorkroom").join(name));
        }
    }

    candidates
}

static CALCULATOR_CONFIG_HANDLE: OnceLock<CalculatorConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global calculator configuration (loaded once per process).
pub fn calculator_config_handle() -> &'static CalculatorConfigHandle {
    CALCULATOR_CONFIG_HANDLE.get_or_init(|| load_calculator_config(None))
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = calculator_config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[dorkroom] Loaded calculator config from {}", source.display());
        } else {
            eprintln!("[dorkroom] Using built-in calculator defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[dorkroom] Config warning: {}", warning);
        }
    });
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = "defaults:\n  paper_width: 11.0\n  paper_height: 14.0\n  min_border: 0.75\n";
        let config: CalculatorConfig = serde_yaml::from_str(yaml).expect("parse");
        assert!((config.defaults.paper_width - 11.0).abs() < 1e-9);
        assert!((config.defaults.min_border - 0.75).abs() < 1e-9);
        // Unspecified fields keep their defaults
        assert!((config.defaults.ratio_width - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CalculatorConfig = serde_yaml::from_str("{}").expect("parse");
        let defaults = CalculatorDefaults::default();
        assert_eq!(config.defaults.easel_cache_capacity, defaults.easel_cache_capacity);
    }

    #[test]
    fn test_missing_config_falls_back_with_warning() {
        let handle = load_calculator_config(Some(Path::new("/nonexistent/dorkroom.yml")));
        assert!(handle.source.is_none());
        assert!(
            handle.warnings.iter().any(|w| w.contains("built-in defaults")),
            "expected fallback warning, got {:?}",
            handle.warnings
        );
    }
}
