//! Pipeline stages of the `create-component` command.

/// Orchestration — `create-component <name>`.
///
/// Runs normalize → detect → emit → (pages only) route registration and
/// prints the outcome of each step.
pub mod create;

/// Framework detection from `package.json` dependencies.
pub mod detect;

/// Source file emission. Never overwrites an existing file.
pub mod emit;

/// Route table parsing and page registration.
///
/// The route file is parsed with tree-sitter to find its last top-level array
/// literal and that array's elements; new routes are appended to it.
pub mod routes;

/// Naming helpers and the per-framework dialects (vue, react).
pub mod templates;
