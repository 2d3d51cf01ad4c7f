//! Runtime layer for the Stoat ES5 retrofit shims
//!
//! Hosts declare the ops they already provide; extensions carry the shim
//! ops; the [`ShimRegistry`] installs only what is missing and dispatches
//! calls by name.

#![warn(clippy::all)]

pub mod extension;

pub use extension::{
    Extension, NativeOpResult, NativeSyncOpFn, Op, OpHandler, OpResult, ShimRegistry, SyncOpFn,
    op_native, op_sync,
};
