use std::path::PathBuf;

/// Errors that abort a scaffolding run.
///
/// Benign conditions (existing file, missing route table, unreadable
/// `package.json`) are not errors: they are reported as outcomes and the
/// run still succeeds.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error(
        "Invalid config file '{}': {key} must be a relative path inside the project, got '{}'",
        path.display(),
        value.display()
    )]
    ConfigPath {
        path: PathBuf,
        key: &'static str,
        value: PathBuf,
    },
}

impl ScaffoldError {
    /// Build a `map_err` adapter that tags an I/O error with `path`.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ScaffoldError::Io { path, source }
    }
}
