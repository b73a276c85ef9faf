//! Renderer configuration.
//!
//! Stored as JSON, e.g.:
//!
//! ```json
//! {
//!   "marker_prefix": "isµ1700000000000",
//!   "svg": false,
//!   "minify": true
//! }
//! ```
//!
//! Every field is optional; missing fields take their [`Default`] value.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{Result, UcontentError};

/// Settings for a [`crate::renderer::Renderer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Marker prefix handed to the instrumenter. `None` picks a per-process
    /// prefix, see [`RendererConfig::prefix`].
    pub marker_prefix: Option<String>,
    /// Keep self-closing tags as written (SVG content). Read by instrumenters
    /// built from a config.
    pub svg: bool,
    /// Pass rendered markup through the renderer's minifier.
    pub minify: bool,
}

impl RendererConfig {
    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| UcontentError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| UcontentError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| UcontentError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// The configured prefix, or `isµ` followed by the current unix time in
    /// milliseconds.
    pub fn prefix(&self) -> String {
        match &self.marker_prefix {
            Some(prefix) => prefix.clone(),
            None => {
                let millis = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_millis())
                    .unwrap_or_default();
                format!("isµ{millis}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ucontent.config.json");
        let config = RendererConfig {
            marker_prefix: Some("mk".into()),
            svg: true,
            minify: false,
        };
        config.save(&path).unwrap();
        assert_eq!(RendererConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_default() {
        let config: RendererConfig = serde_json::from_str(r#"{ "minify": true }"#).unwrap();
        assert!(config.minify);
        assert!(!config.svg);
        assert!(config.marker_prefix.is_none());
    }

    #[test]
    fn test_load_nonexistent() {
        let result = RendererConfig::load(Path::new("/tmp/nonexistent_ucontent_config.json"));
        assert!(matches!(result, Err(UcontentError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            RendererConfig::load(&path),
            Err(UcontentError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_prefix() {
        let explicit = RendererConfig {
            marker_prefix: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(explicit.prefix(), "abc");
        assert!(RendererConfig::default().prefix().starts_with("isµ"));
    }
}
