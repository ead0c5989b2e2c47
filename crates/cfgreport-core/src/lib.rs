//! # cfgreport-core
//!
//! Load a hierarchical configuration document, check a fixed set of fields,
//! and render the whole tree as an indented, section-delimited report.
//!
//! ## Quick start
//!
//! ```rust
//! use cfgreport_core::{decode_yaml, render, resolve, validate, ConfigValue};
//!
//! let root = decode_yaml("Server:\n  host: localhost\n  port: 8080\n").unwrap();
//!
//! assert!(validate(&root).unwrap().is_empty());
//! assert_eq!(
//!     render(&root).unwrap(),
//!     "--- Server ---\n  host = localhost\n  port = 8080\n\n"
//! );
//! assert_eq!(resolve(&root, "Server.port"), Some(&ConfigValue::Integer(8080)));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `ConfigValue` tree and ordered `Mapping`
//! - [`decoder`] — YAML / JSON text → `ConfigValue`
//! - [`validator`] — path rule table, `ValidationError` collection
//! - [`serializer`] — `ConfigValue` → report lines
//! - [`resolver`] — dotted-path lookup
//! - [`error`] — Error types for decode and structural failures

pub mod decoder;
pub mod error;
pub mod resolver;
pub mod serializer;
pub mod validator;
pub mod value;

pub use decoder::{decode, decode_json, decode_yaml, SourceFormat};
pub use error::ConfigError;
pub use resolver::resolve;
pub use serializer::{
    join_lines, render, render_with, serialize, serialize_value, serialize_with, ReportStyle,
    SerializeOptions,
};
pub use validator::{rules, validate, validate_with, Rule, ValidationError, ValidationMode};
pub use value::{ConfigValue, Mapping};
