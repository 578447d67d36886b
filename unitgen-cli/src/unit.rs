use std::fmt;

use crate::commands::templates::to_pascal_case;

/// Kind of front-end unit to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UnitKind {
    Component,
    Page,
}

impl UnitKind {
    /// Directory under the source root that holds units of this kind.
    pub fn dir_name(self) -> &'static str {
        match self {
            UnitKind::Component => "components",
            UnitKind::Page => "views",
        }
    }

    /// Localized label embedded in generated files.
    pub fn label(self) -> &'static str {
        match self {
            UnitKind::Component => "组件",
            UnitKind::Page => "页面",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Component => f.write_str("component"),
            UnitKind::Page => f.write_str("page"),
        }
    }
}

/// A unit request with its derived names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    raw_name: String,
    pascal_name: String,
    kind: UnitKind,
}

impl Unit {
    pub fn new(raw_name: &str, kind: UnitKind) -> Self {
        Self {
            raw_name: raw_name.to_string(),
            pascal_name: to_pascal_case(raw_name),
            kind,
        }
    }

    /// The name as typed on the command line (e.g. `user-card`).
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Exported identifier and file stem (e.g. `UserCard`).
    pub fn pascal_name(&self) -> &str {
        &self.pascal_name
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// CSS class / root attribute used by the templates.
    pub fn css_class(&self) -> String {
        self.raw_name.to_lowercase()
    }

    /// Route path registered for a page (e.g. `/settings`).
    pub fn route_path(&self) -> String {
        format!("/{}", self.raw_name)
    }
}
