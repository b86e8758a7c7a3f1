use crate::error::{Result, RevscanError};
use crate::types::config::RevscanConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "revscan.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/revscan/config.toml";

/// Load the tool configuration. An explicit `--config` path wins; otherwise
/// `revscan.toml` in the working directory is used. Global settings from
/// `$HOME/.config/revscan/config.toml` merge underneath either one.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<RevscanConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let primary = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    load_config_with_global(&primary, global.as_deref())
}

pub(crate) fn load_config_with_global(
    primary: &Path,
    global_path: Option<&Path>,
) -> Result<Option<RevscanConfig>> {
    if !primary.exists() {
        return Ok(None);
    }
    debug!(path = %primary.display(), "loading configuration");

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, primary)?;

    let cfg: RevscanConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RevscanError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RevscanError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_primary_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(&dir.path().join("revscan.toml"), None)
            .expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_under_primary() {
        let dir = TempDir::new().expect("temp dir should be created");
        let global_path = dir.path().join("global.toml");
        let primary_path = dir.path().join("revscan.toml");

        fs::write(
            &global_path,
            r#"
[scoring.weights]
market_demand = 0.30
strategic_value = 0.0
"#,
        )
        .expect("global config should write");

        fs::write(
            &primary_path,
            r#"
[scoring.weights]
market_demand = 0.25
strategic_value = 0.05
"#,
        )
        .expect("primary config should write");

        let cfg = load_config_with_global(&primary_path, Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");
        let weights = cfg.weights();
        assert_eq!(weights[0], 0.25);
        assert_eq!(weights[6], 0.05);
    }

    #[test]
    fn load_config_rejects_invalid_weights() {
        let dir = TempDir::new().expect("temp dir should be created");
        let primary_path = dir.path().join("revscan.toml");
        fs::write(
            &primary_path,
            r#"
[scoring.weights]
market_demand = 0.90
"#,
        )
        .expect("primary config should write");

        let err = load_config_with_global(&primary_path, None)
            .expect_err("invalid weights should be rejected");
        assert!(err.to_string().contains("sum to 1.0"));
    }
}
