//! Configuration for the appearance pipeline
//!
//! Timeouts and fan-out caps for the bake workflow. These mirror the
//! defaults the official viewer uses; most deployments never touch them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Tunables for one appearance pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// How long to wait for the simulator's wearables list on a first run
    pub wearables_list_timeout: Duration,
    /// Per-asset timeout when downloading wearable assets
    pub wearable_fetch_timeout: Duration,
    /// How long to wait for the baked-texture cache response
    pub cache_response_timeout: Duration,
    /// Per-texture timeout when downloading bake sources
    pub texture_fetch_timeout: Duration,
    /// Per-layer timeout when uploading baked textures
    pub upload_timeout: Duration,
    /// Maximum concurrent wearable/texture downloads
    pub max_concurrent_downloads: usize,
    /// Maximum concurrent baked-texture uploads
    pub max_concurrent_uploads: usize,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            wearables_list_timeout: Duration::from_secs(10),
            wearable_fetch_timeout: Duration::from_secs(10),
            cache_response_timeout: Duration::from_secs(10),
            texture_fetch_timeout: Duration::from_secs(30),
            upload_timeout: Duration::from_secs(30),
            max_concurrent_downloads: 5,
            max_concurrent_uploads: 3,
        }
    }
}

/// Persist a config to disk as JSON.
pub fn save_appearance_config(config: &AppearanceConfig, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

/// Load a previously saved config; None when absent or unreadable.
pub fn load_appearance_config(path: &Path) -> Option<AppearanceConfig> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_caps() {
        let config = AppearanceConfig::default();
        assert_eq!(config.max_concurrent_downloads, 5);
        assert_eq!(config.max_concurrent_uploads, 3);
        assert_eq!(config.cache_response_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = AppearanceConfig {
            max_concurrent_downloads: 8,
            ..AppearanceConfig::default()
        };
        let dir = std::env::temp_dir().join("slv-appearance-config-test");
        let path = dir.join("appearance.json");
        save_appearance_config(&config, &path).unwrap();
        let loaded = load_appearance_config(&path).unwrap();
        assert_eq!(loaded.max_concurrent_downloads, 8);
        assert_eq!(loaded.upload_timeout, config.upload_timeout);
        let _ = std::fs::remove_dir_all(dir);
    }
}
