use std::fs;
use std::path::{Path, PathBuf};

use super::templates::Dialect;
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::unit::Unit;

/// Result of writing a unit's source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    Created { path: PathBuf },
    /// The target already existed and was left untouched.
    Skipped { path: PathBuf },
}

/// Path of the file generated for `unit`, relative to the project root.
///
/// `<src_dir>/<components|views>/<Name>/<Name>.<ext>`
pub fn unit_file_path(config: &ScaffoldConfig, unit: &Unit, dialect: &dyn Dialect) -> PathBuf {
    config
        .src_dir
        .join(unit.kind().dir_name())
        .join(unit.pascal_name())
        .join(format!("{}.{}", unit.pascal_name(), dialect.file_extension()))
}

/// Render and write the source file for `unit` under `root`.
///
/// Never overwrites: an existing target yields [`EmitOutcome::Skipped`].
/// Failing to create the directory or write the file is an error.
pub fn emit_unit(
    root: &Path,
    config: &ScaffoldConfig,
    unit: &Unit,
    dialect: &dyn Dialect,
) -> Result<EmitOutcome, ScaffoldError> {
    let relative = unit_file_path(config, unit, dialect);
    let path = root.join(&relative);

    if path.exists() {
        tracing::debug!(path = %path.display(), "target exists, not overwriting");
        return Ok(EmitOutcome::Skipped { path: relative });
    }

    let content = dialect.render(unit);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(ScaffoldError::io(dir))?;
    }
    fs::write(&path, content).map_err(ScaffoldError::io(&path))?;
    tracing::debug!(path = %path.display(), dialect = dialect.name(), "unit written");

    Ok(EmitOutcome::Created { path: relative })
}
