use std::fs;
use std::path::{Component, Path, PathBuf};

use tree_sitter::{Node, Parser};

use super::emit::unit_file_path;
use super::templates::Dialect;
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::unit::Unit;

const DEFAULT_INDENT: &str = "  ";

/// Result of registering a page in the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Registered { path: PathBuf },
    /// An entry for the same path or module is already present.
    AlreadyRegistered { path: PathBuf },
    MissingRouteFile { path: PathBuf },
    /// The file has no top-level array literal to insert into.
    NoRouteArray { path: PathBuf },
}

/// One element of the route array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Value of the `path` key when the element is an object literal with a
    /// string `path`.
    pub path: Option<String>,
    /// Source text of the element, trimmed.
    pub source: String,
}

/// A route file with its route array located.
///
/// The route array is the last top-level array literal in the file: one
/// reached from the program through declarations, exports and assignments
/// only. Text outside of it is never touched by [`RouteTable::with_entry`].
#[derive(Debug, Clone)]
pub struct RouteTable {
    source: String,
    open: usize,
    close: usize,
    last_item_end: Option<usize>,
    trailing_comma: bool,
    indent: String,
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Locate the route array in `source`. Returns `None` when the file has no
    /// top-level array literal.
    pub fn parse(source: &str) -> Option<Self> {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&tree_sitter_javascript::LANGUAGE.into()) {
            tracing::warn!(error = %e, "cannot load the JavaScript grammar");
            return None;
        }
        let tree = parser.parse(source, None)?;
        let array = last_top_level_array(tree.root_node())?;

        let mut cursor = array.walk();
        let close = array
            .children(&mut cursor)
            .last()
            .filter(|n| n.kind() == "]" && !n.is_missing())?
            .start_byte();
        let inner: Vec<Node<'_>> = array
            .children(&mut cursor)
            .filter(|n| !matches!(n.kind(), "[" | "]" | "comment"))
            .collect();

        let entries = inner
            .iter()
            .filter(|n| n.is_named())
            .map(|element| RouteEntry {
                path: object_path_value(source, *element),
                source: node_text(source, *element).to_string(),
            })
            .collect();

        let last_item_end = inner.last().map(|n| n.end_byte());
        let trailing_comma = inner.last().is_some_and(|n| n.kind() == ",");
        let indent = inner
            .first()
            .map(|n| line_indent(source, n.start_byte()))
            .filter(|indent| !indent.is_empty())
            .unwrap_or(DEFAULT_INDENT)
            .to_string();

        Some(Self {
            source: source.to_string(),
            open: array.start_byte(),
            close,
            last_item_end,
            trailing_comma,
            indent,
            entries,
        })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Whether an entry already routes `route_path` (ASCII case-insensitive)
    /// or the file imports `module` anywhere, inside the array or not.
    pub fn is_registered(&self, route_path: &str, module: &str) -> bool {
        self.entries.iter().any(|entry| {
            entry
                .path
                .as_deref()
                .is_some_and(|p| p.eq_ignore_ascii_case(route_path))
        }) || references_module(&self.source, module)
    }

    /// Source text with `entry` appended as the last element of the array.
    pub fn with_entry(&self, entry: &str) -> String {
        let src = &self.source;
        let mut out = String::with_capacity(src.len() + entry.len() + 8);

        match self.last_item_end {
            None => {
                out.push_str(&src[..=self.open]);
                out.push_str(src[self.open + 1..self.close].trim_end());
                out.push('\n');
                out.push_str(&self.indent);
                out.push_str(entry);
            }
            Some(end) => {
                out.push_str(&src[..end]);
                if !self.trailing_comma {
                    out.push(',');
                }
                out.push_str(src[end..self.close].trim_end());
                out.push('\n');
                out.push_str(&self.indent);
                out.push_str(entry);
                if self.trailing_comma {
                    out.push(',');
                }
            }
        }

        out.push('\n');
        out.push_str(&src[self.close..]);
        out
    }
}

/// Add a route for the page `unit` to the configured route table.
///
/// Missing route file, missing route array and existing registrations are
/// reported as outcomes; only I/O failures on an existing file are errors.
pub fn register_route(
    root: &Path,
    config: &ScaffoldConfig,
    unit: &Unit,
    dialect: &dyn Dialect,
) -> Result<RouteOutcome, ScaffoldError> {
    let relative = config.routes_file.clone();
    let path = root.join(&relative);

    if !path.exists() {
        return Ok(RouteOutcome::MissingRouteFile { path: relative });
    }

    let content = fs::read_to_string(&path).map_err(ScaffoldError::io(&path))?;
    let Some(table) = RouteTable::parse(&content) else {
        return Ok(RouteOutcome::NoRouteArray { path: relative });
    };

    let unit_file = unit_file_path(config, unit, dialect);
    let routes_dir = relative.parent().unwrap_or_else(|| Path::new(""));
    let module = relative_module_path(routes_dir, &unit_file.with_extension(""));
    let module_ref = format!(
        "{}/{}/{}",
        unit.kind().dir_name(),
        unit.pascal_name(),
        unit.pascal_name()
    );

    if table.is_registered(&unit.route_path(), &module_ref) {
        tracing::debug!(route = %unit.route_path(), "route already registered");
        return Ok(RouteOutcome::AlreadyRegistered { path: relative });
    }

    let entry = dialect.route_entry(unit, &module);
    fs::write(&path, table.with_entry(&entry)).map_err(ScaffoldError::io(&path))?;
    tracing::debug!(route = %unit.route_path(), module = %module, "route registered");

    Ok(RouteOutcome::Registered { path: relative })
}

/// Import specifier for `target` as seen from a module in `from_dir`.
///
/// Both paths are relative to the project root. The result always starts
/// with `./` or `../` and uses `/` separators.
pub fn relative_module_path(from_dir: &Path, target: &Path) -> String {
    let from: Vec<Component<'_>> = from_dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let to: Vec<Component<'_>> = target
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = std::iter::repeat("..".to_string())
        .take(from.len() - common)
        .collect();
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    let joined = parts.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}

fn references_module(source: &str, module: &str) -> bool {
    source.match_indices(module).any(|(idx, _)| {
        let before = source[..idx].chars().next_back();
        let after = source[idx + module.len()..].chars().next();
        before.map_or(true, |c| c == '/' || c == '\'' || c == '"' || c == '`')
            && after.map_or(true, |c| !is_ident_char(c))
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn line_indent(source: &str, pos: usize) -> &str {
    let line_start = source[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..pos];
    if line.chars().all(|c| c == ' ' || c == '\t') {
        line
    } else {
        ""
    }
}

// ── Syntax tree helpers ─────────────────────────────────────────────

/// Node kinds an array may sit under and still count as top-level.
const TOP_LEVEL_KINDS: &[&str] = &[
    "program",
    "export_statement",
    "lexical_declaration",
    "variable_declaration",
    "variable_declarator",
    "expression_statement",
    "assignment_expression",
];

fn last_top_level_array(root: Node<'_>) -> Option<Node<'_>> {
    let mut found = None;
    collect_top_level_arrays(root, &mut found);
    found
}

fn collect_top_level_arrays<'tree>(node: Node<'tree>, found: &mut Option<Node<'tree>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "array" {
            if found.map_or(true, |f| child.start_byte() > f.start_byte()) {
                *found = Some(child);
            }
        } else if TOP_LEVEL_KINDS.contains(&child.kind()) {
            collect_top_level_arrays(child, found);
        }
    }
}

/// The string value of the `path` key of an object literal element.
fn object_path_value(source: &str, element: Node<'_>) -> Option<String> {
    if element.kind() != "object" {
        return None;
    }

    let mut cursor = element.walk();
    let pair = element.named_children(&mut cursor).find(|pair| {
        pair.kind() == "pair"
            && pair
                .child_by_field_name("key")
                .is_some_and(|key| unquote(node_text(source, key)) == "path")
    })?;

    let value = pair.child_by_field_name("value")?;
    (value.kind() == "string").then(|| unquote(node_text(source, value)).to_string())
}

fn node_text<'a>(source: &'a str, node: Node<'_>) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

fn unquote(text: &str) -> &str {
    let quoted = text.len() >= 2
        && matches!(text.as_bytes()[0], b'\'' | b'"' | b'`')
        && text.as_bytes()[text.len() - 1] == text.as_bytes()[0];
    if quoted {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_js(source: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    fn top_level_array_text(source: &str) -> Option<String> {
        let tree = parse_js(source);
        last_top_level_array(tree.root_node()).map(|n| node_text(source, n).to_string())
    }

    #[test]
    fn last_top_level_array_ignores_nested_arrays() {
        assert_eq!(
            top_level_array_text("const a = [1]; export default [{ children: [] }];").as_deref(),
            Some("[{ children: [] }]")
        );
    }

    #[test]
    fn arrays_inside_calls_are_not_top_level() {
        assert_eq!(
            top_level_array_text("export default createRouter({ routes: [{ path: '/' }] });"),
            None
        );
    }

    #[test]
    fn assigned_array_is_top_level() {
        assert_eq!(
            top_level_array_text("let routes;\nroutes = ['/a'];\n").as_deref(),
            Some("['/a']")
        );
    }

    #[test]
    fn array_inside_function_body_is_not_top_level() {
        assert_eq!(
            top_level_array_text("export function routes() { return [1]; }"),
            None
        );
    }

    #[test]
    fn path_value_from_string_key() {
        let source = r#"x = { "path": "/x", name: "x" };"#;
        let tree = parse_js(source);
        let object = tree
            .root_node()
            .named_child(0)
            .and_then(|stmt| stmt.named_child(0))
            .and_then(|assign| assign.child_by_field_name("right"))
            .unwrap();
        assert_eq!(object_path_value(source, object).as_deref(), Some("/x"));
    }

    #[test]
    fn unquote_variants() {
        assert_eq!(unquote("'a'"), "a");
        assert_eq!(unquote("\"b\""), "b");
        assert_eq!(unquote("path"), "path");
        assert_eq!(unquote("'"), "'");
    }
}
