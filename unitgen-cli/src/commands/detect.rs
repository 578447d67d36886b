use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::templates::Framework;

/// Why a framework was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionReason {
    /// Forced with `--framework`.
    Override,
    /// The named marker package is a (dev) dependency.
    Dependency(String),
    /// No `package.json` in the project root.
    NoManifest,
    /// `package.json` parsed but lists no marker package.
    NoMatch,
    /// `package.json` exists but could not be read or parsed.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub framework: Framework,
    pub reason: DetectionReason,
}

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<BTreeMap<String, serde_json::Value>>,
}

impl PackageManifest {
    fn depends_on(&self, package: &str) -> bool {
        [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flatten()
            .any(|deps| deps.contains_key(package))
    }
}

/// Pick the framework for the project at `root`.
///
/// `override_with` wins unconditionally. Otherwise `package.json` is checked for
/// each dialect's marker package in [`Framework::ALL`] order, and `default` is
/// returned when nothing matches. Never fails.
pub fn detect_framework(
    root: &Path,
    override_with: Option<Framework>,
    default: Framework,
) -> Detection {
    if let Some(framework) = override_with {
        return Detection {
            framework,
            reason: DetectionReason::Override,
        };
    }

    let manifest_path = root.join("package.json");
    if !manifest_path.exists() {
        return Detection {
            framework: default,
            reason: DetectionReason::NoManifest,
        };
    }

    let manifest = match read_manifest(&manifest_path) {
        Ok(manifest) => manifest,
        Err(message) => {
            tracing::warn!(path = %manifest_path.display(), error = %message, "cannot read package.json");
            return Detection {
                framework: default,
                reason: DetectionReason::Unreadable(message),
            };
        }
    };

    for framework in Framework::ALL {
        if let Some(package) = framework.dialect().marker_package() {
            if manifest.depends_on(package) {
                return Detection {
                    framework,
                    reason: DetectionReason::Dependency(package.to_string()),
                };
            }
        }
    }

    Detection {
        framework: default,
        reason: DetectionReason::NoMatch,
    }
}

fn read_manifest(path: &Path) -> Result<PackageManifest, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}
