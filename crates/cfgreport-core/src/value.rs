//! The generic, schema-less configuration tree.
//!
//! Decoders build a [`ConfigValue`] once; the validator, serializer and
//! resolver only ever borrow it. Integers and floats are kept apart because
//! the validator dispatches on that distinction (`Server.port` must be an
//! integer, not `8080.0`).

use std::fmt;

/// A configuration document value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Mapping(Mapping),
    /// Elements may be scalars, mappings or nested sequences.
    Sequence(Vec<ConfigValue>),
}

impl ConfigValue {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Mapping(_) => "mapping",
            ConfigValue::Sequence(_) => "sequence",
        }
    }

    /// True for every variant except `Mapping` and `Sequence`.
    pub fn is_scalar(&self) -> bool {
        match self {
            ConfigValue::Null
            | ConfigValue::Bool(_)
            | ConfigValue::Integer(_)
            | ConfigValue::Float(_)
            | ConfigValue::String(_) => true,
            ConfigValue::Mapping(_) | ConfigValue::Sequence(_) => false,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a child by mapping key. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Method form of [`crate::resolver::resolve`].
    pub fn get_path(&self, path: &str) -> Option<&ConfigValue> {
        crate::resolver::resolve(self, path)
    }
}

impl From<Mapping> for ConfigValue {
    fn from(map: Mapping) -> Self {
        ConfigValue::Mapping(map)
    }
}

/// Key-value pairs in insertion order with unique keys.
///
/// Backed by a `Vec` rather than a hash map: configuration mappings are
/// small and lookups are rare compared to in-order walks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, ConfigValue)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key. An existing key keeps its position and has its value
    /// replaced; the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) -> Option<ConfigValue> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Like [`Mapping::get`], but also returns the stored key.
    pub fn get_entry(&self, key: &str) -> Option<(&str, &ConfigValue)> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(entry_ref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(entry_ref)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ConfigValue)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, ConfigValue)>>(iter: I) -> Self {
        let mut map = Mapping::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

type EntryRef<'a> = (&'a str, &'a ConfigValue);
type EntryFn<'a> = fn(&'a (String, ConfigValue)) -> EntryRef<'a>;

fn entry_ref(entry: &(String, ConfigValue)) -> EntryRef<'_> {
    (entry.0.as_str(), &entry.1)
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = EntryRef<'a>;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (String, ConfigValue)>, EntryFn<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(entry_ref as EntryFn<'a>)
    }
}

/// Canonical scalar text, as written into reports.
///
/// - `null`
/// - booleans as `true` / `false`
/// - integers in decimal
/// - floats keep a `.0` when whole (`1.0`), otherwise shortest `Display`
///   form; non-finite values print as `NaN`, `inf`, `-inf`
/// - strings verbatim, unquoted
///
/// Mappings and sequences have no single-line form and write a short type
/// marker (`<mapping>` / `<sequence>`); the serializer never routes them here.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => f.write_str("null"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => f.write_str(&format_float(*x)),
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Mapping(_) => f.write_str("<mapping>"),
            ConfigValue::Sequence(_) => f.write_str("<sequence>"),
        }
    }
}

fn format_float(x: f64) -> String {
    // Normalize -0 to 0
    let x = if x == 0.0 { 0.0 } else { x };
    let mut out = format!("{}", x);
    // f64 `Display` never uses an exponent, so a finite value without a
    // decimal point is whole at any magnitude.
    if x.is_finite() && !out.contains('.') {
        out.push_str(".0");
    }
    out
}
