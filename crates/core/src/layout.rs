//! Dashboard layout decoding, re-encoding, and the disabled-plugin filter.
//!
//! A layout is a JSON document describing ordered columns of widget
//! placements. Layouts written by older clients were stored with HTML-entity
//! encoding and escaped quotes accumulated over save/load round-trips, so
//! decoding first strips those artifacts. The canonical on-disk form is the
//! envelope `{"config":{"layout":"33-33-33"},"columns":[...]}`; bare-list
//! layouts (legacy format) are wrapped into it on re-encode.

use std::collections::HashSet;

use serde_json::{json, Value};

/// Column split used by the canonical envelope and every fallback layout.
pub const DEFAULT_COLUMN_LAYOUT: &str = "33-33-33";

/// Sentinel stored when a caller-supplied layout cannot be decoded.
pub const EMPTY_LAYOUT: &str = "[]";

// ---------------------------------------------------------------------------
// LayoutInput
// ---------------------------------------------------------------------------

/// A layout in either raw-string or already-parsed form.
///
/// Most call sites hold the raw `layout` column text; handlers that have
/// already decoded it can pass the parsed value straight through.
#[derive(Debug, Clone)]
pub enum LayoutInput {
    /// The stored layout text, possibly entity-encoded.
    Raw(String),
    /// An already-decoded layout document.
    Parsed(Value),
}

impl From<&str> for LayoutInput {
    fn from(raw: &str) -> Self {
        LayoutInput::Raw(raw.to_string())
    }
}

impl From<String> for LayoutInput {
    fn from(raw: String) -> Self {
        LayoutInput::Raw(raw)
    }
}

impl From<Value> for LayoutInput {
    fn from(parsed: Value) -> Self {
        LayoutInput::Parsed(parsed)
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode a stored layout into a JSON value.
///
/// Already-parsed input is returned unchanged, so the function is idempotent.
/// Raw input is unescaped (HTML entities, `\"` artifacts, embedded newlines)
/// and parsed; malformed JSON yields `None`, which callers treat as
/// "no layout" rather than an error.
pub fn decode_layout(input: impl Into<LayoutInput>) -> Option<Value> {
    match input.into() {
        LayoutInput::Parsed(value) => Some(value),
        LayoutInput::Raw(raw) => {
            let unescaped = unescape_stored_layout(&raw);
            serde_json::from_str(&unescaped).ok()
        }
    }
}

/// Serialize a layout document back to its canonical string form.
pub fn encode_layout(layout: &Value) -> String {
    layout.to_string()
}

/// Strip the encoding artifacts a layout string accumulates in storage:
/// HTML entities from input sanitization, backslash-escaped quotes from
/// double-encoding, and literal newlines from hand-edited defaults.
fn unescape_stored_layout(raw: &str) -> String {
    decode_html_entities(raw).replace("\\\"", "\"").replace('\n', "")
}

/// Reverse the HTML-entity encoding applied by the input sanitizer.
///
/// One decode pass for the entity set the sanitizer emits, matching its
/// single encode. `&amp;` is decoded last, so double-encoded input like
/// `&amp;quot;` yields the literal `&quot;`, not a bare quote.
fn decode_html_entities(input: &str) -> String {
    input
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Reverse the input-sanitizer encoding on a stored display string
/// (dashboard names are sanitized on the way in).
pub fn unsanitize_input_value(value: &str) -> String {
    decode_html_entities(value)
}

// ---------------------------------------------------------------------------
// Enabled-plugin oracle
// ---------------------------------------------------------------------------

/// Answers whether a widget's owning module is currently enabled.
///
/// The platform's plugin registry is the real implementation; tests and
/// callers without a registry can use a plain `HashSet<String>` or
/// [`AllPluginsEnabled`].
pub trait PluginOracle {
    fn is_enabled(&self, module: &str) -> bool;
}

impl PluginOracle for HashSet<String> {
    fn is_enabled(&self, module: &str) -> bool {
        self.contains(module)
    }
}

/// Oracle that treats every module as enabled.
pub struct AllPluginsEnabled;

impl PluginOracle for AllPluginsEnabled {
    fn is_enabled(&self, _module: &str) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Disabled-plugin filter
// ---------------------------------------------------------------------------

/// Re-encode a layout keeping only widgets from enabled modules.
///
/// - A bare JSON list (legacy format) is wrapped in the canonical envelope.
/// - Decode failure, or an envelope without columns, yields the
///   empty-columns envelope.
/// - Placements that reference a module (`parameters.module`) are dropped
///   when that module is disabled; placements with no module reference are
///   kept as-is.
///
/// The result is always a serialized JSON string, never a parsed structure.
pub fn remove_disabled_plugins(
    input: impl Into<LayoutInput>,
    plugins: &impl PluginOracle,
) -> String {
    let mut envelope = match decode_layout(input) {
        Some(Value::Array(columns)) => json!({
            "config": { "layout": DEFAULT_COLUMN_LAYOUT },
            "columns": columns,
        }),
        Some(value @ Value::Object(_)) => value,
        _ => empty_envelope(),
    };

    let has_columns = envelope
        .get("columns")
        .and_then(Value::as_array)
        .is_some_and(|columns| !columns.is_empty());

    if !has_columns {
        return encode_layout(&empty_envelope());
    }

    if envelope.get("config").is_none() {
        envelope["config"] = json!({ "layout": DEFAULT_COLUMN_LAYOUT });
    }

    if let Some(columns) = envelope
        .get_mut("columns")
        .and_then(Value::as_array_mut)
    {
        for column in columns.iter_mut() {
            if let Some(widgets) = column.as_array_mut() {
                widgets.retain(|widget| match widget_module(widget) {
                    Some(module) => plugins.is_enabled(module),
                    None => true,
                });
            }
        }
    }

    encode_layout(&envelope)
}

/// The canonical envelope with no widgets at all.
fn empty_envelope() -> Value {
    json!({
        "config": { "layout": DEFAULT_COLUMN_LAYOUT },
        "columns": [],
    })
}

/// Extract the owning module from a widget placement, if it has one.
fn widget_module(widget: &Value) -> Option<&str> {
    widget.get("parameters")?.get("module")?.as_str()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
