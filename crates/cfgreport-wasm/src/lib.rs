//! WASM bindings for cfgreport-core.
//!
//! Exposes report rendering, validation and path lookup as `#[wasm_bindgen]`
//! functions over YAML source strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p cfgreport-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/cfgreport_wasm.wasm
//! ```

use cfgreport_core::{ConfigValue, SerializeOptions};
use wasm_bindgen::prelude::*;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn load(yaml: &str) -> Result<ConfigValue, JsValue> {
    cfgreport_core::decode_yaml(yaml).map_err(to_js)
}

/// Render a YAML config as an indented report.
///
/// Throws a JS error if the YAML is malformed, the root is not a mapping, or
/// any field rule is violated (the message lists every violation).
#[wasm_bindgen]
pub fn report(yaml: &str) -> Result<String, JsValue> {
    let root = load(yaml)?;
    let errors = cfgreport_core::validate(&root).map_err(to_js)?;
    if !errors.is_empty() {
        let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(JsValue::from_str(&lines.join("\n")));
    }
    cfgreport_core::render(&root).map_err(to_js)
}

/// Validate a YAML config. Returns a JSON array of `{path, message}` objects;
/// an empty array means the config is valid.
#[wasm_bindgen]
pub fn validate(yaml: &str) -> Result<String, JsValue> {
    let root = load(yaml)?;
    let errors = cfgreport_core::validate(&root).map_err(to_js)?;
    serde_json::to_string(&errors).map_err(to_js)
}

/// Look up a dotted path. Returns `undefined` when the path does not exist;
/// otherwise the value's report fragment, every line terminated by `\n` (the
/// same text `cfgreport get` prints).
#[wasm_bindgen]
pub fn resolve(yaml: &str, path: &str) -> Result<Option<String>, JsValue> {
    let root = load(yaml)?;
    Ok(cfgreport_core::resolve(&root, path).map(|value| {
        cfgreport_core::join_lines(&cfgreport_core::serialize_value(
            value,
            &SerializeOptions::default(),
        ))
    }))
}
