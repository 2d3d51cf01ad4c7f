//! Array shims
//!
//! Traversal and reduction over sparse sequences per ECMAScript 5:
//! - Search: indexOf
//! - Traversal: every, some, forEach, map, filter
//! - Reduction: reduce, reduceRight
//! - Static: isArray
//!
//! The traversal contract is uniform: the length is observed once at the
//! start, iteration is ascending (descending for reduceRight), and only
//! present indices are visited. A hole is skipped; an index explicitly
//! holding `undefined` is visited. Callbacks are invoked as
//! `f(element, index, sequence)` with the caller-supplied alternate
//! receiver (default null).

use std::sync::Arc;
use stoat_core::{JsFunction, Sequence, ShimError, ShimResult, Value};
use stoat_runtime::{Op, op_native};

/// Get Array ops for extension registration
pub fn ops() -> Vec<Op> {
    vec![
        // Static methods
        op_native("__Array_isArray", native_array_is_array),
        // Search methods
        op_native("__Array_indexOf", native_array_index_of),
        // Traversal methods
        op_native("__Array_every", native_array_every),
        op_native("__Array_some", native_array_some),
        op_native("__Array_forEach", native_array_for_each),
        op_native("__Array_map", native_array_map),
        op_native("__Array_filter", native_array_filter),
        // Reduction methods
        op_native("__Array_reduce", native_array_reduce),
        op_native("__Array_reduceRight", native_array_reduce_right),
    ]
}

// =============================================================================
// Helper functions
// =============================================================================

fn get_sequence(args: &[Value], primitive: &'static str) -> ShimResult<Arc<Sequence>> {
    args.first()
        .and_then(Value::as_sequence)
        .ok_or_else(|| ShimError::type_error(format!("{primitive} called on non-sequence")))
}

/// The callback argument is required to be invocable; anything else fails
/// with an error naming the primitive.
fn get_callback(args: &[Value], primitive: &'static str) -> ShimResult<Arc<JsFunction>> {
    args.get(1)
        .and_then(Value::as_function)
        .ok_or(ShimError::InvalidCallback { primitive })
}

/// Caller-supplied alternate receiver for the callback (default null)
fn this_arg(args: &[Value]) -> Value {
    args.get(2).cloned().unwrap_or(Value::null())
}

fn invoke(
    f: &JsFunction,
    this: &Value,
    element: Value,
    index: usize,
    seq: &Arc<Sequence>,
) -> ShimResult<Value> {
    f.call(
        this,
        &[element, Value::number(index as f64), Value::sequence(Arc::clone(seq))],
    )
}

// =============================================================================
// Static methods
// =============================================================================

fn native_array_is_array(args: &[Value]) -> ShimResult<Value> {
    let is_seq = args.first().map(|v| v.as_sequence().is_some()).unwrap_or(false);
    Ok(Value::boolean(is_seq))
}

// =============================================================================
// Search methods
// =============================================================================

/// Array.prototype.indexOf(searchElement, fromIndex)
///
/// Strict-equality scan from a resolved start offset. Negative offsets
/// count back from the end and round via ceiling; non-negative offsets
/// round via floor. Holes never match.
fn native_array_index_of(args: &[Value]) -> ShimResult<Value> {
    let seq = get_sequence(args, "Array.indexOf")?;
    let target = args.get(1).cloned().unwrap_or(Value::undefined());

    let len = seq.len();
    let from = args.get(2).and_then(Value::as_number).unwrap_or(0.0);
    let from = if from < 0.0 { from.ceil() } else { from.floor() };
    let start = if from < 0.0 {
        (len as f64 + from).max(0.0) as usize
    } else {
        (from as usize).min(len)
    };

    for i in start..len {
        if let Some(val) = seq.get(i)
            && val.strict_equals(&target)
        {
            return Ok(Value::number(i as f64));
        }
    }

    Ok(Value::number(-1.0))
}

// =============================================================================
// Traversal methods
// =============================================================================

/// Array.prototype.every(callback, thisArg)
///
/// True iff the callback is truthy for every present element;
/// short-circuits on the first falsy result.
fn native_array_every(args: &[Value]) -> ShimResult<Value> {
    let seq = get_sequence(args, "Array.every")?;
    let f = get_callback(args, "Array.every")?;
    let this = this_arg(args);

    let len = seq.len();
    for i in 0..len {
        if let Some(elem) = seq.get(i)
            && !invoke(&f, &this, elem, i, &seq)?.is_truthy()
        {
            return Ok(Value::boolean(false));
        }
    }
    Ok(Value::boolean(true))
}

/// Array.prototype.some(callback, thisArg)
///
/// True on the first present element for which the callback is truthy;
/// false if none (including the empty and fully-sparse cases).
fn native_array_some(args: &[Value]) -> ShimResult<Value> {
    let seq = get_sequence(args, "Array.some")?;
    let f = get_callback(args, "Array.some")?;
    let this = this_arg(args);

    let len = seq.len();
    for i in 0..len {
        if let Some(elem) = seq.get(i)
            && invoke(&f, &this, elem, i, &seq)?.is_truthy()
        {
            return Ok(Value::boolean(true));
        }
    }
    Ok(Value::boolean(false))
}

/// Array.prototype.forEach(callback, thisArg)
fn native_array_for_each(args: &[Value]) -> ShimResult<Value> {
    let seq = get_sequence(args, "Array.forEach")?;
    let f = get_callback(args, "Array.forEach")?;
    let this = this_arg(args);

    let len = seq.len();
    for i in 0..len {
        if let Some(elem) = seq.get(i) {
            invoke(&f, &this, elem, i, &seq)?;
        }
    }
    Ok(Value::undefined())
}

/// Array.prototype.map(callback, thisArg)
///
/// New sequence of the same length; the callback runs only on present
/// indices, and holes stay holes in the result.
fn native_array_map(args: &[Value]) -> ShimResult<Value> {
    let seq = get_sequence(args, "Array.map")?;
    let f = get_callback(args, "Array.map")?;
    let this = this_arg(args);

    let len = seq.len();
    let result = Arc::new(Sequence::with_length(len));
    for i in 0..len {
        if let Some(elem) = seq.get(i) {
            result.set(i, invoke(&f, &this, elem, i, &seq)?);
        }
    }
    Ok(Value::sequence(result))
}

/// Array.prototype.filter(callback, thisArg)
///
/// New dense sequence of the present elements the callback accepts,
/// in original order.
fn native_array_filter(args: &[Value]) -> ShimResult<Value> {
    let seq = get_sequence(args, "Array.filter")?;
    let f = get_callback(args, "Array.filter")?;
    let this = this_arg(args);

    let len = seq.len();
    let result = Arc::new(Sequence::new());
    for i in 0..len {
        if let Some(elem) = seq.get(i)
            && invoke(&f, &this, elem.clone(), i, &seq)?.is_truthy()
        {
            result.push(elem);
        }
    }
    Ok(Value::sequence(result))
}

// =============================================================================
// Reduction methods
// =============================================================================

/// Array.prototype.reduce(callback, initialValue)
///
/// Left fold. With no initial value the accumulator is seeded from the
/// first present element and folding resumes at the immediately following
/// index; the seeded index itself is not folded again.
fn native_array_reduce(args: &[Value]) -> ShimResult<Value> {
    let seq = get_sequence(args, "Array.reduce")?;
    let f = get_callback(args, "Array.reduce")?;

    let len = seq.len();
    let mut i = 0usize;
    let mut acc = if args.len() > 2 {
        args[2].clone()
    } else {
        let mut seed = None;
        while i < len {
            if let Some(elem) = seq.get(i) {
                seed = Some(elem);
                i += 1;
                break;
            }
            i += 1;
        }
        seed.ok_or(ShimError::EmptySequenceNoInitialValue)?
    };

    while i < len {
        if let Some(elem) = seq.get(i) {
            acc = f.call(
                &Value::null(),
                &[acc, elem, Value::number(i as f64), Value::sequence(Arc::clone(&seq))],
            )?;
        }
        i += 1;
    }
    Ok(acc)
}

/// Array.prototype.reduceRight(callback, initialValue)
///
/// Mirror image of reduce: descending scan, seed from the last present
/// element when no initial value is supplied.
fn native_array_reduce_right(args: &[Value]) -> ShimResult<Value> {
    let seq = get_sequence(args, "Array.reduceRight")?;
    let f = get_callback(args, "Array.reduceRight")?;

    let len = seq.len();
    let mut i = len as i64 - 1;
    let mut acc = if args.len() > 2 {
        args[2].clone()
    } else {
        let mut seed = None;
        while i >= 0 {
            if let Some(elem) = seq.get(i as usize) {
                seed = Some(elem);
                i -= 1;
                break;
            }
            i -= 1;
        }
        seed.ok_or(ShimError::EmptySequenceNoInitialValue)?
    };

    while i >= 0 {
        if let Some(elem) = seq.get(i as usize) {
            acc = f.call(
                &Value::null(),
                &[acc, elem, Value::number(i as f64), Value::sequence(Arc::clone(&seq))],
            )?;
        }
        i -= 1;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn num_seq(values: &[f64]) -> Value {
        Value::sequence(Arc::new(Sequence::from_values(
            values.iter().map(|n| Value::number(*n)),
        )))
    }

    fn is_even() -> Value {
        Value::native_function("isEven", |_this, args| {
            let n = args.first().and_then(Value::as_number).unwrap_or(f64::NAN);
            Ok(Value::boolean(n % 2.0 == 0.0))
        })
    }

    fn add() -> Value {
        Value::native_function("add", |_this, args| {
            let a = args.first().and_then(Value::as_number).unwrap_or(f64::NAN);
            let b = args.get(1).and_then(Value::as_number).unwrap_or(f64::NAN);
            Ok(Value::number(a + b))
        })
    }

    #[test]
    fn test_every_all_pass() {
        let out = native_array_every(&[num_seq(&[2.0, 4.0, 6.0]), is_even()]).unwrap();
        assert_eq!(out.as_boolean(), Some(true));
    }

    #[test]
    fn test_every_short_circuits() {
        let calls = Arc::new(Mutex::new(0usize));
        let counter = {
            let calls = Arc::clone(&calls);
            Value::native_function("count", move |_this, args| {
                *calls.lock().unwrap() += 1;
                let n = args.first().and_then(Value::as_number).unwrap();
                Ok(Value::boolean(n < 2.0))
            })
        };
        let out = native_array_every(&[num_seq(&[1.0, 5.0, 1.0, 1.0]), counter]).unwrap();
        assert_eq!(out.as_boolean(), Some(false));
        // 1 passes, 5 fails, remaining indices never visited
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_some_short_circuits() {
        let calls = Arc::new(Mutex::new(0usize));
        let counter = {
            let calls = Arc::clone(&calls);
            Value::native_function("count", move |_this, args| {
                *calls.lock().unwrap() += 1;
                let n = args.first().and_then(Value::as_number).unwrap();
                Ok(Value::boolean(n % 2.0 == 0.0))
            })
        };
        let out = native_array_some(&[num_seq(&[1.0, 2.0, 3.0, 4.0]), counter]).unwrap();
        assert_eq!(out.as_boolean(), Some(true));
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_every_some_de_morgan_duality() {
        // every(S, f) == !some(S, !f) over present elements
        let odd = Value::native_function("isOdd", |_this, args| {
            let n = args.first().and_then(Value::as_number).unwrap();
            Ok(Value::boolean(n % 2.0 != 0.0))
        });
        for values in [&[2.0, 4.0][..], &[2.0, 3.0][..], &[][..]] {
            let every = native_array_every(&[num_seq(values), is_even()]).unwrap();
            let some_odd = native_array_some(&[num_seq(values), odd.clone()]).unwrap();
            assert_eq!(every.as_boolean(), some_odd.as_boolean().map(|b| !b));
        }
    }

    #[test]
    fn test_empty_sequence_laws() {
        let empty = || Value::sequence(Arc::new(Sequence::new()));

        let out = native_array_every(&[empty(), is_even()]).unwrap();
        assert_eq!(out.as_boolean(), Some(true));

        let out = native_array_some(&[empty(), is_even()]).unwrap();
        assert_eq!(out.as_boolean(), Some(false));

        let out = native_array_index_of(&[empty(), Value::number(1.0)]).unwrap();
        assert_eq!(out.as_number(), Some(-1.0));

        let out = native_array_map(&[empty(), is_even()]).unwrap();
        assert_eq!(out.as_sequence().unwrap().len(), 0);

        let out = native_array_filter(&[empty(), is_even()]).unwrap();
        assert_eq!(out.as_sequence().unwrap().len(), 0);

        assert!(matches!(
            native_array_reduce(&[empty(), add()]),
            Err(ShimError::EmptySequenceNoInitialValue)
        ));

        let out = native_array_reduce(&[empty(), add(), Value::number(0.0)]).unwrap();
        assert_eq!(out.as_number(), Some(0.0));
    }

    #[test]
    fn test_for_each_sparse_law() {
        // length 3, only index 1 present holding 9: exactly one invocation
        // with (9, 1, seq)
        let seq = Arc::new(Sequence::with_length(3));
        seq.set(1, Value::number(9.0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let spy = {
            let seen = Arc::clone(&seen);
            let seq = Arc::clone(&seq);
            Value::native_function("spy", move |_this, args| {
                assert!(Arc::ptr_eq(&args[2].as_sequence().unwrap(), &seq));
                seen.lock()
                    .unwrap()
                    .push((args[0].as_number().unwrap(), args[1].as_number().unwrap()));
                Ok(Value::undefined())
            })
        };

        let out = native_array_for_each(&[Value::sequence(seq), spy]).unwrap();
        assert!(out.is_undefined());
        assert_eq!(*seen.lock().unwrap(), vec![(9.0, 1.0)]);
    }

    #[test]
    fn test_for_each_visits_explicit_undefined() {
        let seq = Arc::new(Sequence::with_length(2));
        seq.set(0, Value::undefined());
        let calls = Arc::new(Mutex::new(0usize));
        let counter = {
            let calls = Arc::clone(&calls);
            Value::native_function("count", move |_this, _args| {
                *calls.lock().unwrap() += 1;
                Ok(Value::undefined())
            })
        };

        native_array_for_each(&[Value::sequence(seq), counter]).unwrap();
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_map_doubles() {
        let double = Value::native_function("double", |_this, args| {
            let n = args.first().and_then(Value::as_number).unwrap();
            Ok(Value::number(n * 2.0))
        });
        let out = native_array_map(&[num_seq(&[1.0, 2.0, 3.0]), double]).unwrap();
        let result = out.as_sequence().unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.get(0).unwrap().as_number(), Some(2.0));
        assert_eq!(result.get(1).unwrap().as_number(), Some(4.0));
        assert_eq!(result.get(2).unwrap().as_number(), Some(6.0));
    }

    #[test]
    fn test_map_preserves_length_and_holes() {
        let seq = Arc::new(Sequence::with_length(4));
        seq.set(2, Value::number(5.0));
        let double = Value::native_function("double", |_this, args| {
            let n = args.first().and_then(Value::as_number).unwrap();
            Ok(Value::number(n * 2.0))
        });

        let out = native_array_map(&[Value::sequence(seq), double]).unwrap();
        let result = out.as_sequence().unwrap();
        assert_eq!(result.len(), 4);
        assert!(!result.is_present(0));
        assert!(!result.is_present(3));
        assert_eq!(result.get(2).unwrap().as_number(), Some(10.0));
    }

    #[test]
    fn test_filter_keeps_matching_dense() {
        let out = native_array_filter(&[num_seq(&[1.0, 2.0, 3.0, 4.0]), is_even()]).unwrap();
        let result = out.as_sequence().unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(0).unwrap().as_number(), Some(2.0));
        assert_eq!(result.get(1).unwrap().as_number(), Some(4.0));
    }

    #[test]
    fn test_filter_result_never_longer() {
        let any = Value::native_function("any", |_this, _| Ok(Value::boolean(true)));
        let seq = Arc::new(Sequence::with_length(5));
        seq.set(1, Value::number(1.0));
        seq.set(3, Value::number(2.0));
        let out = native_array_filter(&[Value::sequence(Arc::clone(&seq)), any]).unwrap();
        assert!(out.as_sequence().unwrap().len() <= seq.len());
        assert_eq!(out.as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn test_index_of_first_match() {
        let out =
            native_array_index_of(&[num_seq(&[1.0, 2.0, 3.0, 2.0]), Value::number(2.0)]).unwrap();
        assert_eq!(out.as_number(), Some(1.0));
    }

    #[test]
    fn test_index_of_strict_equality() {
        let seq = Value::sequence(Arc::new(Sequence::from_values([
            Value::string("2"),
            Value::number(2.0),
        ])));
        let out = native_array_index_of(&[seq, Value::number(2.0)]).unwrap();
        assert_eq!(out.as_number(), Some(1.0));
    }

    #[test]
    fn test_index_of_negative_offset_ceiling() {
        // length 5, from -3 resolves to ceil(-3) + 5 = 2; first 2 at or
        // after index 2 is at index 3
        let out = native_array_index_of(&[
            num_seq(&[1.0, 2.0, 3.0, 2.0, 1.0]),
            Value::number(2.0),
            Value::number(-3.0),
        ])
        .unwrap();
        assert_eq!(out.as_number(), Some(3.0));
    }

    #[test]
    fn test_index_of_fractional_offsets_round() {
        let seq = || num_seq(&[9.0, 9.0, 9.0]);
        // floor(1.9) = 1
        let out =
            native_array_index_of(&[seq(), Value::number(9.0), Value::number(1.9)]).unwrap();
        assert_eq!(out.as_number(), Some(1.0));
        // ceil(-1.5) = -1, resolves to index 2
        let out =
            native_array_index_of(&[seq(), Value::number(9.0), Value::number(-1.5)]).unwrap();
        assert_eq!(out.as_number(), Some(2.0));
    }

    #[test]
    fn test_index_of_skips_holes() {
        let seq = Arc::new(Sequence::with_length(3));
        seq.set(2, Value::undefined());
        // the holes at 0 and 1 must not match undefined
        let out =
            native_array_index_of(&[Value::sequence(seq), Value::undefined()]).unwrap();
        assert_eq!(out.as_number(), Some(2.0));
    }

    #[test]
    fn test_reduce_sums() {
        let out = native_array_reduce(&[num_seq(&[1.0, 2.0, 3.0, 4.0]), add()]).unwrap();
        assert_eq!(out.as_number(), Some(10.0));
    }

    #[test]
    fn test_reduce_seed_omission_equivalence() {
        // reduce([5,7,9], add) == reduce([7,9], add, 5)
        let no_seed = native_array_reduce(&[num_seq(&[5.0, 7.0, 9.0]), add()]).unwrap();
        let seeded =
            native_array_reduce(&[num_seq(&[7.0, 9.0]), add(), Value::number(5.0)]).unwrap();
        assert_eq!(no_seed.as_number(), seeded.as_number());
    }

    #[test]
    fn test_reduce_with_seed_starts_at_zero() {
        let out =
            native_array_reduce(&[num_seq(&[1.0, 2.0]), add(), Value::number(10.0)]).unwrap();
        assert_eq!(out.as_number(), Some(13.0));
    }

    #[test]
    fn test_reduce_seed_from_first_present() {
        // sparse: holes before the seed are skipped, the seed index is not
        // folded again
        let seq = Arc::new(Sequence::with_length(4));
        seq.set(2, Value::number(5.0));
        seq.set(3, Value::number(7.0));
        let out = native_array_reduce(&[Value::sequence(seq), add()]).unwrap();
        assert_eq!(out.as_number(), Some(12.0));
    }

    #[test]
    fn test_reduce_fully_sparse_fails_without_seed() {
        let seq = Value::sequence(Arc::new(Sequence::with_length(3)));
        assert!(matches!(
            native_array_reduce(&[seq, add()]),
            Err(ShimError::EmptySequenceNoInitialValue)
        ));
    }

    #[test]
    fn test_reduce_right_order() {
        let join = Value::native_function("join", |_this, args| {
            let a = args[0].clone();
            let b = args[1].clone();
            Ok(Value::string(format!("{}-{}", fmt(&a), fmt(&b))))
        });
        fn fmt(v: &Value) -> String {
            v.as_str()
                .map(str::to_string)
                .or_else(|| v.as_number().map(|n| format!("{n}")))
                .unwrap()
        }
        let out =
            native_array_reduce_right(&[num_seq(&[1.0, 2.0, 3.0, 4.0]), join]).unwrap();
        assert_eq!(out.as_str(), Some("4-3-2-1"));
    }

    #[test]
    fn test_reduce_right_seed_from_last_present() {
        let seq = Arc::new(Sequence::with_length(4));
        seq.set(0, Value::number(1.0));
        seq.set(2, Value::number(3.0));
        let sub = Value::native_function("sub", |_this, args| {
            let a = args[0].as_number().unwrap();
            let b = args[1].as_number().unwrap();
            Ok(Value::number(a - b))
        });
        // seed 3 (last present), then 3 - 1 = 2
        let out = native_array_reduce_right(&[Value::sequence(seq), sub]).unwrap();
        assert_eq!(out.as_number(), Some(2.0));
    }

    #[test]
    fn test_reduce_right_empty_fails_without_seed() {
        let empty = Value::sequence(Arc::new(Sequence::new()));
        assert!(matches!(
            native_array_reduce_right(&[empty, add()]),
            Err(ShimError::EmptySequenceNoInitialValue)
        ));
    }

    #[test]
    fn test_reduce_right_fully_sparse_fails_without_seed() {
        let seq = Value::sequence(Arc::new(Sequence::with_length(3)));
        assert!(matches!(
            native_array_reduce_right(&[seq, add()]),
            Err(ShimError::EmptySequenceNoInitialValue)
        ));
    }

    #[test]
    fn test_invalid_callback_names_primitive() {
        let err = native_array_every(&[num_seq(&[1.0]), Value::number(1.0)]).unwrap_err();
        assert!(matches!(
            err,
            ShimError::InvalidCallback {
                primitive: "Array.every"
            }
        ));

        let err = native_array_reduce(&[num_seq(&[1.0]), Value::undefined()]).unwrap_err();
        assert!(matches!(
            err,
            ShimError::InvalidCallback {
                primitive: "Array.reduce"
            }
        ));
    }

    #[test]
    fn test_this_arg_reaches_callback() {
        let probe = Value::native_function("probe", |this, _args| {
            Ok(Value::boolean(this.as_str() == Some("ctx")))
        });
        let out =
            native_array_every(&[num_seq(&[1.0, 2.0]), probe, Value::string("ctx")]).unwrap();
        assert_eq!(out.as_boolean(), Some(true));
    }

    #[test]
    fn test_length_snapshot_ignores_appended_indices() {
        let seq = Arc::new(Sequence::from_values([Value::number(1.0), Value::number(2.0)]));
        let calls = Arc::new(Mutex::new(0usize));
        let appender = {
            let seq = Arc::clone(&seq);
            let calls = Arc::clone(&calls);
            Value::native_function("appender", move |_this, _args| {
                *calls.lock().unwrap() += 1;
                seq.push(Value::number(99.0));
                Ok(Value::undefined())
            })
        };

        native_array_for_each(&[Value::sequence(Arc::clone(&seq)), appender]).unwrap();
        // appended indices are beyond the snapshot and never visited
        assert_eq!(*calls.lock().unwrap(), 2);
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_deleted_indices_are_skipped_mid_traversal() {
        let seq = Arc::new(Sequence::from_values([
            Value::number(0.0),
            Value::number(1.0),
            Value::number(2.0),
        ]));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let deleter = {
            let seq = Arc::clone(&seq);
            let seen = Arc::clone(&seen);
            Value::native_function("deleter", move |_this, args| {
                seen.lock().unwrap().push(args[0].as_number().unwrap());
                // delete the last index on the first visit
                seq.delete(2);
                Ok(Value::undefined())
            })
        };

        native_array_for_each(&[Value::sequence(seq), deleter]).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_is_array() {
        let out = native_array_is_array(&[num_seq(&[1.0])]).unwrap();
        assert_eq!(out.as_boolean(), Some(true));
        let out = native_array_is_array(&[Value::number(1.0)]).unwrap();
        assert_eq!(out.as_boolean(), Some(false));
        let out = native_array_is_array(&[]).unwrap();
        assert_eq!(out.as_boolean(), Some(false));
    }
}
