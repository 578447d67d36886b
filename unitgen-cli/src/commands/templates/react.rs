use super::{render, Dialect};
use crate::unit::Unit;

const COMPONENT_TEMPLATE: &str = r#"import React from 'react';

const {{name}} = () => {
  return (
    <div className="{{class}}">
      {/* {{label}}: {{name}} */}
    </div>
  );
};

export default {{name}};
"#;

/// React function components in `.jsx`, routed with `React.lazy`.
#[derive(Debug)]
pub struct React;

impl Dialect for React {
    fn name(&self) -> &'static str {
        "react"
    }

    fn file_extension(&self) -> &'static str {
        "jsx"
    }

    fn marker_package(&self) -> Option<&'static str> {
        Some("react")
    }

    fn render(&self, unit: &Unit) -> String {
        let class = unit.css_class();
        render(
            COMPONENT_TEMPLATE,
            &[
                ("class", class.as_str()),
                ("label", unit.kind().label()),
                ("name", unit.pascal_name()),
            ],
        )
    }

    fn route_entry(&self, unit: &Unit, module_path: &str) -> String {
        format!(
            "{{ path: '{}', element: React.lazy(() => import('{module_path}')) }}",
            unit.route_path()
        )
    }
}
