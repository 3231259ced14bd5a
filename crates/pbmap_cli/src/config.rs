use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::CliError;

pub const CONFIG_ENV_VAR: &str = "PBMAP_CONFIG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Optional JSON settings file. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub endpoint: String,
    pub log_filter: String,
    pub pretty_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            endpoint: pbmap::io::MAP_SERVER_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty_json: true,
        }
    }
}

pub fn parse_config(path: &Path, raw: &str) -> Result<CliConfig, CliError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize::<_, CliConfig>(&mut deserializer).map_err(|error| {
        let field = error.path().to_string();
        CliError::ConfigParse {
            path: path.to_path_buf(),
            field,
            message: error.into_inner().to_string(),
        }
    })
}

/// Loads the config named by `--config`, else by `PBMAP_CONFIG`, else the
/// defaults, then applies the `PBMAP_ENDPOINT` override.
pub fn load_config(explicit: Option<&Path>) -> Result<CliConfig, CliError> {
    let from_env = env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let path = explicit.map(Path::to_path_buf).or(from_env);
    let endpoint_override = env::var(pbmap::ENDPOINT_ENV_VAR).ok();
    resolve_config(path.as_deref(), endpoint_override)
}

pub(crate) fn resolve_config(
    path: Option<&Path>,
    endpoint_override: Option<String>,
) -> Result<CliConfig, CliError> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(path, &raw)?
        }
        None => CliConfig::default(),
    };
    if let Some(endpoint) = endpoint_override.filter(|value| !value.trim().is_empty()) {
        config.endpoint = endpoint;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = parse_config(Path::new("cfg.json"), r#"{ "pretty_json": false }"#)
            .expect("config");
        assert!(!config.pretty_json);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.endpoint, pbmap::io::MAP_SERVER_URL);
    }

    #[test]
    fn bad_field_reports_its_json_path() {
        let err = parse_config(Path::new("cfg.json"), r#"{ "pretty_json": "yes" }"#)
            .expect_err("type mismatch");
        match err {
            CliError::ConfigParse { field, .. } => assert_eq!(field, "pretty_json"),
            other => panic!("unexpected error {other:?}"),
        }
        let err = parse_config(Path::new("cfg.json"), r#"{ "colour": true }"#)
            .expect_err("unknown field");
        assert!(err.to_string().contains("colour"), "{err}");
    }

    #[test]
    fn file_then_endpoint_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pbmap.json");
        fs::write(&path, r#"{ "endpoint": "http://file.example/", "log_filter": "debug" }"#)
            .expect("write");

        let config = resolve_config(Some(&path), None).expect("config");
        assert_eq!(config.endpoint, "http://file.example/");
        assert_eq!(config.log_filter, "debug");

        let config = resolve_config(Some(&path), Some("http://env.example/".to_string()))
            .expect("config");
        assert_eq!(config.endpoint, "http://env.example/");

        let err = resolve_config(Some(&dir.path().join("absent.json")), None).expect_err("read");
        assert!(matches!(err, CliError::ConfigRead { .. }), "{err:?}");
    }
}
