//! Dotted-path lookup into a configuration tree.
//!
//! # Path syntax
//!
//! - `"Server"` -- the top-level `Server` value
//! - `"Logging.file.max_size"` -- descend through `Logging` and `file`
//!
//! Only mapping keys are traversed; sequences cannot be indexed. A missing
//! key or a non-mapping step ends the lookup with `None`.

use crate::value::ConfigValue;

/// Resolve `path` against `root`.
///
/// # Examples
///
/// ```
/// use cfgreport_core::{decode_yaml, resolve, ConfigValue};
///
/// let root = decode_yaml("a:\n  b:\n    c: 5\n").unwrap();
/// assert_eq!(resolve(&root, "a.b.c"), Some(&ConfigValue::Integer(5)));
/// assert_eq!(resolve(&root, "a.b.x"), None);
/// ```
pub fn resolve<'a>(root: &'a ConfigValue, path: &str) -> Option<&'a ConfigValue> {
    path.split('.')
        .try_fold(root, |current, key| current.as_mapping()?.get(key))
}
