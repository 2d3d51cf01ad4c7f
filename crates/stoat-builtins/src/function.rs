//! Function shims
//!
//! - bind - a new invocable with a fixed receiver and fixed leading
//!   arguments; constructing through it behaves as constructing the target
//! - apply - variable-arguments invocation adapter that accepts any
//!   indexable, length-bearing argument bundle

use std::sync::Arc;
use stoat_core::{JsFunction, ShimError, ShimResult, Value};
use stoat_runtime::{Op, op_native};

/// Get Function ops for extension registration
pub fn ops() -> Vec<Op> {
    vec![
        op_native("__Function_bind", native_function_bind),
        op_native("__Function_apply", native_function_apply),
    ]
}

// =============================================================================
// Helper functions
// =============================================================================

fn get_target(args: &[Value], primitive: &'static str) -> ShimResult<Arc<JsFunction>> {
    let val = args.first().cloned().unwrap_or(Value::undefined());
    val.as_function().ok_or(ShimError::NotCallable {
        primitive,
        found: val.type_of(),
    })
}

/// Normalize an argument bundle into an argument vector.
///
/// Accepts a sequence (holes become `undefined`), a plain object carrying
/// a numeric `length` and indexed properties, or null/undefined for no
/// arguments.
fn normalize_bundle(bundle: &Value) -> ShimResult<Vec<Value>> {
    if bundle.is_undefined() || bundle.is_null() {
        return Ok(Vec::new());
    }

    if let Some(seq) = bundle.as_sequence() {
        let len = seq.len();
        return Ok((0..len).map(|i| seq.get(i).unwrap_or(Value::undefined())).collect());
    }

    if let Some(obj) = bundle.as_object()
        && let Some(len) = obj.get_own_value("length").and_then(|v| v.as_number())
    {
        let len = if len.is_finite() && len > 0.0 { len as usize } else { 0 };
        return Ok((0..len)
            .map(|i| obj.get_own_value(&i.to_string()).unwrap_or(Value::undefined()))
            .collect());
    }

    Err(ShimError::type_error(format!(
        "Function.apply: {} is not an array-like argument bundle",
        bundle.type_of()
    )))
}

// =============================================================================
// Function methods
// =============================================================================

/// Function.prototype.bind(receiver, ...fixedArgs)
///
/// Args: [target, receiver, ...fixedArgs]. Returns a new function that
/// invokes `target` with the fixed receiver and the fixed arguments
/// prepended to call-time arguments.
fn native_function_bind(args: &[Value]) -> ShimResult<Value> {
    let target = get_target(args, "Function.bind")?;
    let receiver = args.get(1).cloned().unwrap_or(Value::null());
    let bound_args = if args.len() > 2 { args[2..].to_vec() } else { Vec::new() };

    Ok(Value::function(Arc::new(JsFunction::bound(
        target, receiver, bound_args,
    ))))
}

/// Function.prototype.apply(receiver, argBundle)
///
/// Args: [target, receiver, argBundle]. Normalizes the bundle and invokes
/// the target once.
fn native_function_apply(args: &[Value]) -> ShimResult<Value> {
    let target = get_target(args, "Function.apply")?;
    let receiver = args.get(1).cloned().unwrap_or(Value::null());
    let argv = normalize_bundle(args.get(2).unwrap_or(&Value::Undefined))?;

    target.call(&receiver, &argv)
}
