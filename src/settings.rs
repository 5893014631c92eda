//! Config file discovery for the binary.
//!
//! Lookup order: an explicit path, then the `BLOCKFALL_CONFIG` environment
//! variable, then `<config dir>/blockfall/config.toml` if that file exists.
//! With none of them the built-in defaults apply.

use std::path::{Path, PathBuf};

use crate::core::{ConfigError, EngineConfig, CONFIG_ENV_VAR};

const APP_DIR: &str = "blockfall";
const CONFIG_FILE: &str = "config.toml";

/// Default location in the user's config directory, whether or not it exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Resolve which config file to read, if any
pub fn discover_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    default_config_path().filter(|path| path.is_file())
}

/// Load the discovered config, falling back to defaults when there is none.
///
/// A file that was named explicitly or through the environment must exist and
/// parse; errors are returned rather than papered over.
pub fn load_config(explicit: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    match discover_config_path(explicit) {
        Some(path) => {
            log::info!("using config {}", path.display());
            EngineConfig::load(&path)
        }
        None => {
            log::debug!("no config file found, using defaults");
            Ok(EngineConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/tmp/does-not-matter.toml");
        assert_eq!(discover_config_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 42\n[rules]\nmax_level = 5").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rules.max_level, 5);
        assert_eq!(config.rules.lines_per_level, 10);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_default_path_layout() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("blockfall/config.toml"));
        }
    }
}
