//! String shims
//!
//! - trim - strips the full ES5 whitespace class from both ends, wider
//!   than ASCII whitespace and wider than what older hosts strip
//!
//! Trimming is pure data-in data-out with no object identity, so it is
//! exposed as a JSON op.

use serde_json::Value as JsonValue;
use stoat_core::ShimError;
use stoat_runtime::{Op, OpResult, op_sync};

/// Get String ops for extension registration
pub fn ops() -> Vec<Op> {
    vec![op_sync("__String_trim", sync_string_trim)]
}

/// The ES5 whitespace class: ASCII whitespace, NEL, NBSP, the Unicode
/// space separators, the line and paragraph separators, and the BOM.
/// Older hosts miss several of these, which is why trim is shimmed at all.
fn is_trimmable_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\x0B'
            | '\x0C'
            | '\r'
            | ' '
            | '\u{85}'
            | '\u{A0}'
            | '\u{1680}'
            | '\u{180E}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// String.prototype.trim()
///
/// Args: [text]. Returns the text with every leading and trailing
/// character of the ES5 whitespace class removed.
fn sync_string_trim(args: &[JsonValue]) -> OpResult {
    let arg = args.first().unwrap_or(&JsonValue::Null);
    if arg.is_null() {
        return Ok(JsonValue::String(String::new()));
    }
    let text = arg
        .as_str()
        .ok_or_else(|| ShimError::type_error("String.trim: expected a string"))?;
    Ok(JsonValue::String(
        text.trim_matches(is_trimmable_whitespace).to_string(),
    ))
}
