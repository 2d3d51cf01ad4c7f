//! ES5 shim operations for Stoat
//!
//! This crate provides the surfaces a pre-ES5 host is missing:
//! - `Array` - indexOf, every, some, forEach, map, filter, reduce,
//!   reduceRight, isArray over sparse sequences
//! - `Date` - toISOString, toJSON, now
//! - `Object` - getPrototypeOf, getOwnPropertyNames, keys, create,
//!   defineProperty, defineProperties
//! - `Function` - bind, apply
//! - `String` - trim with the full ES5 whitespace class
//!
//! Each op is installed through a [`ShimRegistry`](stoat_runtime::ShimRegistry)
//! seeded with the host's native op names, so a host that already provides
//! an operation keeps its own.

#![warn(clippy::all)]

pub mod array;
pub mod date;
pub mod function;
pub mod object;
pub mod string;

use stoat_runtime::Extension;

/// Create extension with all shim ops
pub fn create_shims_extension() -> Extension {
    let mut ops = Vec::new();

    ops.extend(array::ops());
    ops.extend(date::ops());
    ops.extend(function::ops());
    ops.extend(object::ops());
    ops.extend(string::ops());

    Extension::new("es5-shims").with_ops(ops)
}
