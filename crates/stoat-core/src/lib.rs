//! Core value model for the Stoat ES5 retrofit layer
//!
//! Provides the data model every shim operation works over:
//! - [`Value`] - dynamic values (primitives, objects, sequences, functions)
//! - [`Sequence`] - the sparse indexable sequence with explicit presence
//! - [`PlainObject`] - prototype-linked objects with property descriptors
//! - [`JsFunction`] - invocable capabilities (native or bound)
//! - [`ShimError`] - the error taxonomy shared by all primitives

#![warn(clippy::all)]

pub mod error;
pub mod object;
pub mod sequence;
pub mod value;

pub use error::{ShimError, ShimResult};
pub use object::{PlainObject, PropertyAttributes, PropertyDescriptor};
pub use sequence::Sequence;
pub use value::{JsFunction, NativeFn, Value};
