use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::commands::templates::Framework;
use crate::error::ScaffoldError;

/// Name of the optional per-project config file.
pub const CONFIG_FILE: &str = "unitgen.yaml";

/// Project-level scaffolding settings.
///
/// Every field has a default, so the config file is optional and may set
/// any subset of keys:
///
/// ```yaml
/// default_framework: react        # used when package.json gives no hint (default: vue)
/// src_dir: app                    # default: src
/// routes_file: app/router/index.js  # default: src/router/routes.js
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    pub default_framework: Framework,
    pub src_dir: PathBuf,
    pub routes_file: PathBuf,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            default_framework: Framework::Vue,
            src_dir: PathBuf::from("src"),
            routes_file: PathBuf::from("src/router/routes.js"),
        }
    }
}

impl ScaffoldConfig {
    /// Load `unitgen.yaml` from `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self, ScaffoldError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(ScaffoldError::io(&path))?;
        let config = match Self::from_yaml_str(&content) {
            Ok(config) => config,
            Err(source) => return Err(ScaffoldError::Config { path, source }),
        };

        if let Some((key, value)) = config.escaping_path() {
            return Err(ScaffoldError::ConfigPath {
                path,
                key,
                value: value.to_path_buf(),
            });
        }
        Ok(config)
    }

    /// First configured path that is absolute or climbs out with `..`.
    ///
    /// Import paths for the route table are computed between project-relative
    /// paths, so both must stay inside the project root.
    pub fn escaping_path(&self) -> Option<(&'static str, &Path)> {
        [
            ("src_dir", self.src_dir.as_path()),
            ("routes_file", self.routes_file.as_path()),
        ]
        .into_iter()
        .find(|(_, value)| {
            value
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        })
    }

    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
