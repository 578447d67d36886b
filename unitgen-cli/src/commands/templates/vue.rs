use super::{render, Dialect};
use crate::unit::Unit;

const SFC_TEMPLATE: &str = r#"<template>
  <div class="{{class}}">
    <!-- {{label}}: {{name}} -->
  </div>
</template>

<script>
export default {
  name: '{{name}}'
}
</script>

<style scoped>
.{{class}} {
  /* 样式 */
}
</style>"#;

/// Vue single-file components, routed with a lazy `component` loader.
#[derive(Debug)]
pub struct Vue;

impl Dialect for Vue {
    fn name(&self) -> &'static str {
        "vue"
    }

    fn file_extension(&self) -> &'static str {
        "vue"
    }

    fn marker_package(&self) -> Option<&'static str> {
        None
    }

    fn render(&self, unit: &Unit) -> String {
        let class = unit.css_class();
        render(
            SFC_TEMPLATE,
            &[
                ("class", class.as_str()),
                ("label", unit.kind().label()),
                ("name", unit.pascal_name()),
            ],
        )
    }

    fn route_entry(&self, unit: &Unit, module_path: &str) -> String {
        format!(
            "{{ path: '{}', component: () => import('{module_path}.vue') }}",
            unit.route_path()
        )
    }
}
