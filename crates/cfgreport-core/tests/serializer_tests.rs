/// Serializer contract tests for the indented report format.
///
/// Format summary:
/// - scalar field      `key = value`
/// - mapping field     `--- key ---`, children +2, blank line after
/// - sequence field    `key:`, bullets +2, container bodies +4
use cfgreport_core::{
    decode_yaml, render, serialize, serialize_value, serialize_with, ConfigError, ConfigValue,
    Mapping, ReportStyle, SerializeOptions,
};

fn report(yaml: &str) -> Vec<String> {
    serialize(&decode_yaml(yaml).unwrap()).unwrap()
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn single_section_with_port() {
    assert_eq!(
        report("Server:\n  port: 8080\n"),
        vec!["--- Server ---", "  port = 8080", ""]
    );
}

#[test]
fn top_level_scalars() {
    assert_eq!(
        report("name: demo\ndebug: false\n"),
        vec!["name = demo", "debug = false"]
    );
}

#[test]
fn booleans_render_lowercase() {
    assert_eq!(
        report("a: true\nb: false\n"),
        vec!["a = true", "b = false"]
    );
}

#[test]
fn null_renders_as_null() {
    assert_eq!(report("a: ~\n"), vec!["a = null"]);
}

#[test]
fn numbers_render_in_decimal_form() {
    assert_eq!(
        report("i: -42\nf: 2.5\nw: 3.0\n"),
        vec!["i = -42", "f = 2.5", "w = 3.0"]
    );
}

#[test]
fn strings_render_unquoted() {
    assert_eq!(
        report("path: \"/var/log/app.log\"\nmsg: 'a: b'\n"),
        vec!["path = /var/log/app.log", "msg = a: b"]
    );
}

// ============================================================================
// Nested mappings
// ============================================================================

#[test]
fn nested_sections_close_with_blank_lines() {
    let yaml = r#"
Logging:
  level: info
  file:
    path: /var/log/app.log
    max_size: 10MB
"#;
    assert_eq!(
        report(yaml),
        vec![
            "--- Logging ---",
            "  level = info",
            "  --- file ---",
            "    path = /var/log/app.log",
            "    max_size = 10MB",
            "",
            "",
        ]
    );
}

#[test]
fn empty_mapping_is_an_empty_section() {
    assert_eq!(report("Empty: {}\n"), vec!["--- Empty ---", ""]);
}

#[test]
fn key_order_follows_the_document() {
    let lines = report("zeta: 1\nalpha: 2\nmid: 3\n");
    assert_eq!(lines, vec!["zeta = 1", "alpha = 2", "mid = 3"]);
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn sequence_of_scalars() {
    let yaml = "Server:\n  allowed_hosts:\n    - a.example\n    - b.example\n";
    assert_eq!(
        report(yaml),
        vec![
            "--- Server ---",
            "  allowed_hosts:",
            "    - a.example",
            "    - b.example",
            "",
        ]
    );
}

#[test]
fn sequence_of_mappings() {
    let yaml = r#"
users:
  - name: admin
    roles:
      - read
      - write
  - name: guest
"#;
    assert_eq!(
        report(yaml),
        vec![
            "users:",
            "  -",
            "    name = admin",
            "    roles:",
            "      - read",
            "      - write",
            "  -",
            "    name = guest",
        ]
    );
}

#[test]
fn sequence_of_mappings_inside_section() {
    let yaml = "Server:\n  users:\n    - name: admin\n";
    assert_eq!(
        report(yaml),
        vec!["--- Server ---", "  users:", "    -", "      name = admin", ""]
    );
}

#[test]
fn nested_sequences() {
    assert_eq!(
        report("matrix: [[1, 2], [3]]\n"),
        vec!["matrix:", "  -", "    - 1", "    - 2", "  -", "    - 3"]
    );
}

#[test]
fn mixed_sequence() {
    assert_eq!(
        report("items: [1, {k: v}, true]\n"),
        vec!["items:", "  - 1", "  -", "    k = v", "  - true"]
    );
}

#[test]
fn empty_sequence_is_just_a_header() {
    assert_eq!(report("tags: []\n"), vec!["tags:"]);
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn plain_style_matches_key_colon_layout() {
    let root = decode_yaml("Server:\n  port: 8080\n  users:\n    - name: admin\nname: demo\n")
        .unwrap();
    let options = SerializeOptions {
        style: ReportStyle::Plain,
        ..SerializeOptions::default()
    };
    assert_eq!(
        serialize_with(&root, &options).unwrap(),
        vec![
            "Server:",
            "  port: 8080",
            "  users:",
            "    -",
            "      name: admin",
            "name: demo",
        ]
    );
}

#[test]
fn custom_indent_width() {
    let root = decode_yaml("Server:\n  hosts: [a]\n").unwrap();
    let options = SerializeOptions {
        indent_width: 4,
        ..SerializeOptions::default()
    };
    assert_eq!(
        serialize_with(&root, &options).unwrap(),
        vec!["--- Server ---", "    hosts:", "        - a", ""]
    );
}

// ============================================================================
// Sink form, fragments, errors
// ============================================================================

#[test]
fn render_terminates_every_line() {
    let root = decode_yaml("Server:\n  port: 8080\n").unwrap();
    assert_eq!(render(&root).unwrap(), "--- Server ---\n  port = 8080\n\n");
}

#[test]
fn render_of_empty_mapping_is_empty() {
    let root = ConfigValue::Mapping(Mapping::new());
    assert_eq!(render(&root).unwrap(), "");
}

#[test]
fn fragment_of_sequence_starts_at_margin() {
    let value = ConfigValue::Sequence(vec![
        ConfigValue::String("a".into()),
        ConfigValue::Integer(2),
    ]);
    assert_eq!(
        serialize_value(&value, &SerializeOptions::default()),
        vec!["- a", "- 2"]
    );
}

#[test]
fn fragment_of_scalar_is_canonical_text() {
    assert_eq!(
        serialize_value(&ConfigValue::Bool(true), &SerializeOptions::default()),
        vec!["true"]
    );
}

#[test]
fn non_mapping_root_is_a_structural_error() {
    let err = serialize(&ConfigValue::Integer(3)).unwrap_err();
    match err {
        ConfigError::Structural { path, message } => {
            assert_eq!(path, "<root>");
            assert_eq!(message, "expected mapping, found integer");
        }
        other => panic!("expected structural error, got {other:?}"),
    }
}

#[test]
fn serialize_is_deterministic() {
    let root = decode_yaml("b: [1, {x: y}]\na:\n  c: d\n").unwrap();
    assert_eq!(serialize(&root).unwrap(), serialize(&root).unwrap());
}

#[test]
fn merged_fields_render_without_merge_key() {
    let root = decode_yaml("base: &b\n  level: info\nLogging:\n  <<: *b\n").unwrap();
    let text = render(&root).unwrap();
    assert!(!text.contains("<<"), "got {text:?}");
    assert!(text.contains("--- Logging ---\n  level = info\n"), "got {text:?}");
}
