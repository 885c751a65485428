//! Configuration file for the `powercurve` CLI.
//!
//! Every setting is optional and command-line flags take precedence.
//! Relative paths are resolved against the directory holding the file.
//!
//! # Example
//!
//! ```toml
//! [migrate]
//! power_reference_location = "low-voltage"
//! target = "alpha-6"
//! schema = "power-curve-schema/schema.json"
//!
//! [validate]
//! schema = "power-curve-schema/schema.json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub migrate: MigrateSettings,
    #[serde(default)]
    pub validate: ValidateSettings,
}

/// `[migrate]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrateSettings {
    /// Value given to `turbine.power_reference_location` by the alpha-3 lens.
    pub power_reference_location: Option<String>,
    /// Version tag to migrate to when `--to` is not given.
    pub target: Option<String>,
    /// Schema the migrated document is validated against.
    pub schema: Option<PathBuf>,
}

/// `[validate]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidateSettings {
    pub schema: Option<PathBuf>,
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Read and parse a config TOML file from `path`.
///
/// Returns a human-readable error string on failure.
pub fn read_cli_config(path: &Path) -> Result<CliConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;

    let mut config: CliConfig = toml::from_str(&content)
        .map_err(|e| format!("could not parse '{}': {}", path.display(), e))?;

    if let Some(base) = path.parent() {
        config.migrate.schema = config.migrate.schema.map(|p| base.join(p));
        config.validate.schema = config.validate.schema.map(|p| base.join(p));
    }
    Ok(config)
}

/// Load the config file if one was given, defaults otherwise.
pub fn load_cli_config(path: Option<&Path>) -> Result<CliConfig, String> {
    match path {
        Some(p) => read_cli_config(p),
        None => Ok(CliConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("powercurve.toml");
        fs::write(&path, contents).unwrap();
        (tmp, path)
    }

    #[test]
    fn reads_full_config() {
        let (tmp, path) = write_config(
            r#"
[migrate]
power_reference_location = "high-voltage"
target = "alpha-5"
schema = "schema.json"

[validate]
schema = "/abs/schema.json"
"#,
        );
        let config = read_cli_config(&path).unwrap();
        assert_eq!(
            config.migrate.power_reference_location.as_deref(),
            Some("high-voltage")
        );
        assert_eq!(config.migrate.target.as_deref(), Some("alpha-5"));
        assert_eq!(config.migrate.schema, Some(tmp.path().join("schema.json")));
        assert_eq!(config.validate.schema, Some(PathBuf::from("/abs/schema.json")));
    }

    #[test]
    fn sections_are_optional() {
        let (_tmp, path) = write_config("[validate]\n");
        assert_eq!(read_cli_config(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let (_tmp, path) = write_config("[migrate]\ntarget_version = \"alpha-6\"\n");
        let err = read_cli_config(&path).unwrap_err();
        assert!(err.contains("could not parse"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_cli_config(Path::new("/nonexistent/powercurve.toml")).unwrap_err();
        assert!(err.contains("could not read"));
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load_cli_config(None).unwrap(), CliConfig::default());
    }
}
