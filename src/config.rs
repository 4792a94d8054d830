use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_MAPPING_DISTANCE;

/// Configuration for a TermFoldNode instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Path where the node will store its data
    pub storage_path: PathBuf,
    /// Mapping distance used when a resolution request does not specify one
    #[serde(default = "default_max_distance")]
    pub default_max_distance: u32,
}

fn default_max_distance() -> u32 {
    DEFAULT_MAPPING_DISTANCE
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("data"),
            default_max_distance: default_max_distance(),
        }
    }
}

impl NodeConfig {
    /// Create a new node configuration with the specified storage path
    pub fn new(storage_path: PathBuf) -> Self {
        Self {
            storage_path,
            ..Default::default()
        }
    }

}

/// Load a node configuration from the given path or from the
/// `TERMFOLD_CONFIG` environment variable.
///
/// If the file does not exist, a default [`NodeConfig`] is returned.
pub fn load_node_config(path: Option<&str>) -> Result<NodeConfig, std::io::Error> {
    use std::fs;

    let config_path = path
        .map(|p| p.to_string())
        .or_else(|| std::env::var("TERMFOLD_CONFIG").ok())
        .unwrap_or_else(|| "config/node_config.json".to_string());

    if let Ok(config_str) = fs::read_to_string(&config_path) {
        match serde_json::from_str::<NodeConfig>(&config_str) {
            Ok(cfg) => Ok(cfg),
            Err(e) => {
                log::error!("Failed to parse node configuration: {}", e);
                Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            }
        }
    } else {
        Ok(NodeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NodeConfig::default();
        assert_eq!(config.storage_path, PathBuf::from("data"));
        assert_eq!(config.default_max_distance, DEFAULT_MAPPING_DISTANCE);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = load_node_config(Some("does/not/exist.json")).unwrap();
        assert_eq!(config.storage_path, PathBuf::from("data"));
    }

    #[test]
    fn test_distance_default_applies_when_absent_from_json() {
        let config: NodeConfig =
            serde_json::from_str(r#"{"storage_path": "/tmp/termfold"}"#).unwrap();
        assert_eq!(config.default_max_distance, DEFAULT_MAPPING_DISTANCE);
    }
}
