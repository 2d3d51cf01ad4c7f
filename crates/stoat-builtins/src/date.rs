//! Date shims
//!
//! Provides the ES5 date surface a pre-ES5 host lacks:
//! - toISOString - fixed-width UTC encoding of a point in time
//! - toJSON - interchange hook, delegates to toISOString
//! - now - milliseconds since the epoch

use chrono::{DateTime, Utc};
use stoat_core::{ShimError, ShimResult, Value};
use stoat_runtime::{Op, op_native};

/// Get Date ops for extension registration
pub fn ops() -> Vec<Op> {
    vec![
        op_native("__Date_now", native_date_now),
        op_native("__Date_toISOString", native_date_to_iso_string),
        op_native("__Date_toJSON", native_date_to_json),
    ]
}

// =============================================================================
// Helper functions
// =============================================================================

/// Timestamp (ms since epoch) from the first argument; `None` unless finite
fn get_timestamp(args: &[Value]) -> Option<f64> {
    args.first().and_then(Value::as_number).filter(|n| n.is_finite())
}

fn timestamp_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    let secs = ts.div_euclid(1000);
    let nsecs = (ts.rem_euclid(1000) * 1_000_000) as u32;
    DateTime::from_timestamp(secs, nsecs)
}

// =============================================================================
// Formatting
// =============================================================================

/// Date.now() - returns current timestamp in milliseconds
fn native_date_now(_args: &[Value]) -> ShimResult<Value> {
    let now = Utc::now().timestamp_millis();
    Ok(Value::number(now as f64))
}

/// toISOString - e.g. "2011-10-05T14:48:00.000Z"
///
/// All fields zero-padded, exactly 3 millisecond digits, always UTC with
/// the "Z" suffix. A non-finite time value is a range error.
fn native_date_to_iso_string(args: &[Value]) -> ShimResult<Value> {
    let ts = get_timestamp(args).ok_or(ShimError::InvalidTemporalValue)?;
    let dt = timestamp_to_utc(ts as i64).ok_or(ShimError::InvalidTemporalValue)?;
    let s = dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
    Ok(Value::string(s))
}

/// toJSON - interchange-text hook, delegates to the ISO formatter
fn native_date_to_json(args: &[Value]) -> ShimResult<Value> {
    native_date_to_iso_string(args)
}
