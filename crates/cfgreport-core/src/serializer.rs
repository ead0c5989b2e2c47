//! Indented report serializer.
//!
//! Walks a configuration tree in insertion order and produces one output line
//! per field. The default [`ReportStyle::Sectioned`] layout:
//!
//! ```text
//! --- Server ---
//!   host = localhost
//!   port = 8080
//!   allowed:
//!     - 10.0.0.1
//!     -
//!       name = admin
//!
//! ```
//!
//! - **Scalars**: `key = value`
//! - **Mappings**: `--- key ---` header, children one level deeper, blank
//!   line after the section
//! - **Sequences**: `key:` header, then `- value` bullets one level deeper;
//!   mapping and sequence elements get a bare `-` with their body two levels
//!   deeper than the header
//!
//! [`ReportStyle::Plain`] keeps the same traversal but writes `key:` for
//! mappings (no blank line) and `key: value` for scalars.
//!
//! Scalar text comes from the `Display` impl of [`ConfigValue`].

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::value::{ConfigValue, Mapping};

/// Layout of nested mappings and scalar fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// `--- key ---` sections and `key = value` fields.
    #[default]
    Sectioned,
    /// `key:` headers and `key: value` fields.
    Plain,
}

/// Serializer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializeOptions {
    pub style: ReportStyle,
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            style: ReportStyle::default(),
            indent_width: 2,
        }
    }
}

/// Serialize a document root into report lines using default options.
///
/// # Example
/// ```
/// use cfgreport_core::{decode_yaml, serialize};
/// let root = decode_yaml("Server:\n  port: 8080\n").unwrap();
/// assert_eq!(serialize(&root).unwrap(), vec!["--- Server ---", "  port = 8080", ""]);
/// ```
pub fn serialize(root: &ConfigValue) -> Result<Vec<String>> {
    serialize_with(root, &SerializeOptions::default())
}

/// Serialize a document root into report lines.
///
/// The root must be a mapping; anything else is a structural error, since a
/// report of a bare scalar or list would have no field names.
pub fn serialize_with(root: &ConfigValue, options: &SerializeOptions) -> Result<Vec<String>> {
    match root {
        ConfigValue::Mapping(map) => {
            let mut writer = Writer::new(options);
            writer.mapping_fields(map, 0);
            Ok(writer.lines)
        }
        other => Err(ConfigError::structural(
            "<root>",
            format!("expected mapping, found {}", other.type_name()),
        )),
    }
}

/// Serialize any value as a report fragment.
///
/// Mappings produce their fields, sequences produce `-` bullets at the left
/// margin, and scalars produce a single line holding the canonical text.
pub fn serialize_value(value: &ConfigValue, options: &SerializeOptions) -> Vec<String> {
    let mut writer = Writer::new(options);
    match value {
        ConfigValue::Mapping(map) => writer.mapping_fields(map, 0),
        ConfigValue::Sequence(items) => writer.list_items(items, 0),
        ConfigValue::Null
        | ConfigValue::Bool(_)
        | ConfigValue::Integer(_)
        | ConfigValue::Float(_)
        | ConfigValue::String(_) => writer.lines.push(value.to_string()),
    }
    writer.lines
}

/// [`serialize`], joined into sink form: every line terminated by `\n`.
pub fn render(root: &ConfigValue) -> Result<String> {
    render_with(root, &SerializeOptions::default())
}

/// [`serialize_with`], joined into sink form.
pub fn render_with(root: &ConfigValue, options: &SerializeOptions) -> Result<String> {
    Ok(join_lines(&serialize_with(root, options)?))
}

/// Terminate each line with `\n` and concatenate.
pub fn join_lines(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

struct Writer<'o> {
    options: &'o SerializeOptions,
    lines: Vec<String>,
}

impl<'o> Writer<'o> {
    fn new(options: &'o SerializeOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
        }
    }

    fn indent(&self, columns: usize) -> String {
        " ".repeat(columns)
    }

    /// Emit all fields of a mapping at `indent` columns.
    fn mapping_fields(&mut self, map: &Mapping, indent: usize) {
        for (key, value) in map {
            self.field(key, value, indent);
        }
    }

    /// Dispatch one field by value type.
    fn field(&mut self, key: &str, value: &ConfigValue, indent: usize) {
        let pad = self.indent(indent);
        let step = self.options.indent_width;
        match value {
            ConfigValue::Mapping(child) => {
                match self.options.style {
                    ReportStyle::Sectioned => self.lines.push(format!("{pad}--- {key} ---")),
                    ReportStyle::Plain => self.lines.push(format!("{pad}{key}:")),
                }
                self.mapping_fields(child, indent + step);
                if self.options.style == ReportStyle::Sectioned {
                    self.lines.push(String::new());
                }
            }
            ConfigValue::Sequence(items) => {
                self.lines.push(format!("{pad}{key}:"));
                self.list_items(items, indent + step);
            }
            ConfigValue::Null
            | ConfigValue::Bool(_)
            | ConfigValue::Integer(_)
            | ConfigValue::Float(_)
            | ConfigValue::String(_) => match self.options.style {
                ReportStyle::Sectioned => self.lines.push(format!("{pad}{key} = {value}")),
                ReportStyle::Plain => self.lines.push(format!("{pad}{key}: {value}")),
            },
        }
    }

    /// Emit sequence elements with their `-` marker at `bullet` columns.
    /// Container elements get a bare marker and a body one level further in.
    fn list_items(&mut self, items: &[ConfigValue], bullet: usize) {
        let pad = self.indent(bullet);
        let step = self.options.indent_width;
        for item in items {
            match item {
                ConfigValue::Mapping(map) => {
                    self.lines.push(format!("{pad}-"));
                    self.mapping_fields(map, bullet + step);
                }
                ConfigValue::Sequence(inner) => {
                    self.lines.push(format!("{pad}-"));
                    self.list_items(inner, bullet + step);
                }
                ConfigValue::Null
                | ConfigValue::Bool(_)
                | ConfigValue::Integer(_)
                | ConfigValue::Float(_)
                | ConfigValue::String(_) => self.lines.push(format!("{pad}- {item}")),
            }
        }
    }
}
