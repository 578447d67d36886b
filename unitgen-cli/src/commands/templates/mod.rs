pub mod react;
pub mod vue;

use std::fmt;

use crate::unit::Unit;

/// Simple template rendering: replaces {{key}} with value.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{}}}}}", key), value);
    }
    output
}

/// Convert kebab-case to PascalCase.
///
/// Only the first character of each segment is uppercased; the rest is kept
/// as typed. Empty segments are dropped.
pub fn to_pascal_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// A framework-specific output flavour: file template plus route entry shape.
pub trait Dialect: Sync {
    /// Short name shown to the user (`vue`, `react`).
    fn name(&self) -> &'static str;

    /// Extension of generated files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Dependency whose presence in `package.json` selects this dialect.
    /// `None` means the dialect is only reachable as a default or override.
    fn marker_package(&self) -> Option<&'static str>;

    /// Render the source file for `unit`.
    fn render(&self, unit: &Unit) -> String;

    /// Route table entry for `unit`. `module_path` is the generated file's
    /// path relative to the route table, without extension.
    fn route_entry(&self, unit: &Unit, module_path: &str) -> String;
}

/// Built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    Vue,
    React,
}

impl Framework {
    /// Probe order used by detection.
    pub const ALL: [Framework; 2] = [Framework::React, Framework::Vue];

    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Framework::Vue => &vue::Vue,
            Framework::React => &react::React,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dialect().name())
    }
}
