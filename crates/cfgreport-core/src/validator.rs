//! Field validation driven by a fixed table of path rules.
//!
//! Each [`Rule`] names an absolute dotted path, a predicate over the value
//! found there, and the message reported when the predicate fails. Rules are
//! evaluated once each, in table order. A path segment of `*` matches every
//! child of a mapping, so `Features.*.enabled` checks `enabled` in each
//! feature block.
//!
//! A rule whose path does not exist in the document is skipped: every field
//! is optional. Violations are collected as [`ValidationError`] values, not
//! returned as `Err`; only a malformed wildcard parent (a feature block that
//! is not a mapping) aborts validation with [`ConfigError::Structural`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{ConfigError, Result};
use crate::value::ConfigValue;

/// A rule violation at a dotted path.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

/// Whether to stop at the first violation or report them all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    #[default]
    CollectAll,
    FailFast,
}

/// One entry of the rule table.
#[derive(Debug)]
pub struct Rule {
    path: &'static str,
    check: fn(&ConfigValue) -> bool,
    message: &'static str,
}

impl Rule {
    /// Dotted path this rule applies to; may contain `*` segments.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Apply the predicate to a value found at this rule's path.
    pub fn check(&self, value: &ConfigValue) -> bool {
        (self.check)(value)
    }
}

static RULES: &[Rule] = &[
    Rule {
        path: "Application.version",
        check: is_version_string,
        message: "expected version string of dot-separated digits",
    },
    Rule {
        path: "Server.port",
        check: is_integer,
        message: "expected integer",
    },
    Rule {
        path: "Features.*.enabled",
        check: is_boolean,
        message: "expected boolean",
    },
    Rule {
        path: "Logging.file.max_size",
        check: is_size,
        message: "expected integer or size string like 10MB",
    },
];

/// The rule table, in evaluation order.
pub fn rules() -> &'static [Rule] {
    RULES
}

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)*$").expect("static regex"));

static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(KB|MB|GB)?$").expect("static regex"));

fn is_version_string(value: &ConfigValue) -> bool {
    value.as_str().is_some_and(|s| VERSION_RE.is_match(s))
}

fn is_integer(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::Integer(_))
}

fn is_boolean(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::Bool(_))
}

fn is_size(value: &ConfigValue) -> bool {
    match value {
        ConfigValue::Integer(_) => true,
        ConfigValue::String(s) => SIZE_RE.is_match(s),
        ConfigValue::Null
        | ConfigValue::Bool(_)
        | ConfigValue::Float(_)
        | ConfigValue::Mapping(_)
        | ConfigValue::Sequence(_) => false,
    }
}

/// Validate `root`, collecting every violation.
///
/// ```
/// use cfgreport_core::{decode_yaml, validate};
///
/// let root = decode_yaml("Server:\n  port: \"8080\"\n").unwrap();
/// let errors = validate(&root).unwrap();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].path, "Server.port");
/// ```
pub fn validate(root: &ConfigValue) -> Result<Vec<ValidationError>> {
    validate_with(root, ValidationMode::CollectAll)
}

/// Validate `root` in the given mode.
pub fn validate_with(root: &ConfigValue, mode: ValidationMode) -> Result<Vec<ValidationError>> {
    if root.as_mapping().is_none() {
        return Err(ConfigError::structural(
            "<root>",
            format!("expected mapping, found {}", root.type_name()),
        ));
    }

    let mut sink = Sink {
        mode,
        errors: Vec::new(),
    };
    for rule in RULES {
        let before = sink.errors.len();
        let segments: Vec<&str> = rule.path.split('.').collect();
        let mut trail = Vec::with_capacity(segments.len());
        apply(rule, root, &segments, &mut trail, &mut sink)?;
        tracing::debug!(
            rule = rule.path,
            violations = sink.errors.len() - before,
            "rule evaluated"
        );
        if sink.is_done() {
            break;
        }
    }
    Ok(sink.errors)
}

struct Sink {
    mode: ValidationMode,
    errors: Vec<ValidationError>,
}

impl Sink {
    fn is_done(&self) -> bool {
        self.mode == ValidationMode::FailFast && !self.errors.is_empty()
    }
}

/// Walk `segments` from `node`, applying `rule` at the end of every match.
/// `trail` holds the concrete keys taken so far and becomes the error path.
fn apply<'a>(
    rule: &Rule,
    node: &'a ConfigValue,
    segments: &[&str],
    trail: &mut Vec<&'a str>,
    sink: &mut Sink,
) -> Result<()> {
    let Some((first, rest)) = segments.split_first() else {
        if !rule.check(node) {
            sink.errors.push(ValidationError {
                path: trail.join("."),
                message: rule.message.to_string(),
            });
        }
        return Ok(());
    };

    if *first != "*" {
        let Some(child) = node.as_mapping().and_then(|map| map.get_entry(first)) else {
            return Ok(());
        };
        trail.push(child.0);
        let result = apply(rule, child.1, rest, trail, sink);
        trail.pop();
        return result;
    }

    let map = node.as_mapping().ok_or_else(|| {
        ConfigError::structural(
            trail.join("."),
            format!("expected mapping of named entries, found {}", node.type_name()),
        )
    })?;
    for (name, child) in map {
        trail.push(name);
        if !rest.is_empty() && child.as_mapping().is_none() {
            return Err(ConfigError::structural(
                trail.join("."),
                format!("expected mapping, found {}", child.type_name()),
            ));
        }
        apply(rule, child, rest, trail, sink)?;
        trail.pop();
        if sink.is_done() {
            break;
        }
    }
    Ok(())
}
