//! Extension system for registering shim ops
//!
//! Extensions bundle named operations. A registry seeded with the host's
//! native op names installs each shim op only when the host lacks it;
//! there is no unconditional replacement of anything the host already
//! provides.
//!
//! ## Operation Types
//!
//! - **JSON ops** (`op_sync`): work with `serde_json::Value`, good for
//!   simple data with no object identity (string trimming, say)
//! - **Native ops** (`op_native`): work with the shim `Value` directly,
//!   needed whenever callbacks, sequences, or object identity are involved

use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use stoat_core::{ShimError, Value};

/// Result type for JSON operations
pub type OpResult = Result<JsonValue, ShimError>;

/// Result type for native operations (works with shim Value)
pub type NativeOpResult = Result<Value, ShimError>;

/// Type for sync operation handler (JSON-based)
pub type SyncOpFn = Arc<dyn Fn(&[JsonValue]) -> OpResult + Send + Sync>;

/// Type for native operation handler (works with shim Value)
pub type NativeSyncOpFn = Arc<dyn Fn(&[Value]) -> NativeOpResult + Send + Sync>;

/// Operation handler type
#[derive(Clone)]
pub enum OpHandler {
    /// Synchronous JSON operation
    Sync(SyncOpFn),
    /// Native operation (works with shim Value directly)
    Native(NativeSyncOpFn),
}

impl OpHandler {
    /// Execute sync JSON operation (errors if native)
    pub fn call_sync(&self, args: &[JsonValue]) -> OpResult {
        match self {
            OpHandler::Sync(f) => f(args),
            OpHandler::Native(_) => Err(ShimError::type_error(
                "Cannot call native op with JSON args",
            )),
        }
    }

    /// Execute native operation (errors if JSON)
    pub fn call_native(&self, args: &[Value]) -> NativeOpResult {
        match self {
            OpHandler::Native(f) => f(args),
            OpHandler::Sync(_) => Err(ShimError::type_error(
                "Cannot call JSON op with native args",
            )),
        }
    }

    /// Check if this is a sync JSON operation
    pub fn is_sync(&self) -> bool {
        matches!(self, OpHandler::Sync(_))
    }

    /// Check if this is a native operation
    pub fn is_native(&self) -> bool {
        matches!(self, OpHandler::Native(_))
    }
}

/// A single operation definition
#[derive(Clone)]
pub struct Op {
    /// Operation name (the surface the host would otherwise provide)
    pub name: String,
    /// Handler function
    pub handler: OpHandler,
}

/// Helper to create a sync JSON operation
pub fn op_sync<F>(name: impl Into<String>, handler: F) -> Op
where
    F: Fn(&[JsonValue]) -> OpResult + Send + Sync + 'static,
{
    Op {
        name: name.into(),
        handler: OpHandler::Sync(Arc::new(handler)),
    }
}

/// Helper to create a native operation that works with shim Value directly
///
/// # Example
/// ```ignore
/// op_native("__Array_every", |args| {
///     let seq = args.first().ok_or("missing sequence")?;
///     // ...
///     Ok(Value::boolean(true))
/// })
/// ```
pub fn op_native<F>(name: impl Into<String>, handler: F) -> Op
where
    F: Fn(&[Value]) -> NativeOpResult + Send + Sync + 'static,
{
    Op {
        name: name.into(),
        handler: OpHandler::Native(Arc::new(handler)),
    }
}

/// Extension bundle
///
/// An extension groups related operations. Extensions can declare
/// dependencies on other extensions.
#[derive(Clone)]
pub struct Extension {
    /// Extension name (unique identifier)
    name: String,
    /// Operations provided by this extension
    ops: Vec<Op>,
    /// Dependencies (names of other extensions that must be loaded first)
    deps: Vec<String>,
}

impl Extension {
    /// Create a new extension with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ops: Vec::new(),
            deps: Vec::new(),
        }
    }

    /// Add operations to the extension (builder pattern)
    pub fn with_ops(mut self, ops: Vec<Op>) -> Self {
        self.ops = ops;
        self
    }

    /// Add dependencies (builder pattern)
    pub fn with_deps(mut self, deps: Vec<String>) -> Self {
        self.deps = deps;
        self
    }

    /// Get extension name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get operations
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Get dependencies
    pub fn deps(&self) -> &[String] {
        &self.deps
    }
}

/// Shim registry
///
/// Holds the host's native op names (feature detection) and the shim ops
/// actually installed. Registration skips any op the host already
/// provides, so shims never shadow native functionality.
pub struct ShimRegistry {
    /// Registered extensions by name
    extensions: HashMap<String, Extension>,
    /// Installed shim operations by name (for fast lookup)
    ops: HashMap<String, OpHandler>,
    /// Op names the host provides natively; these are never shimmed
    native_ops: HashSet<String>,
    /// Order in which extensions were registered
    load_order: Vec<String>,
}

impl ShimRegistry {
    /// Create a new empty registry (a host with no native ops)
    pub fn new() -> Self {
        Self {
            extensions: HashMap::new(),
            ops: HashMap::new(),
            native_ops: HashSet::new(),
            load_order: Vec::new(),
        }
    }

    /// Create a registry seeded with the host's native op names
    pub fn with_native_ops<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.native_ops.insert(name.into());
        }
        registry
    }

    /// Declare a single op as natively provided by the host
    pub fn mark_native(&mut self, name: impl Into<String>) {
        self.native_ops.insert(name.into());
    }

    /// Register an extension
    ///
    /// Ops the host provides natively are skipped. Returns error if:
    /// - A dependency is not yet registered
    /// - A shim op name conflicts with an already-installed shim op
    pub fn register(&mut self, ext: Extension) -> Result<(), String> {
        if self.extensions.contains_key(&ext.name) {
            return Err(format!("Extension already registered: {}", ext.name));
        }

        for dep in &ext.deps {
            if !self.extensions.contains_key(dep) {
                return Err(format!(
                    "Missing dependency '{}' for extension '{}'",
                    dep, ext.name
                ));
            }
        }

        for op in &ext.ops {
            if self.native_ops.contains(&op.name) {
                tracing::debug!(op = %op.name, ext = %ext.name, "host provides native op, skipping shim");
                continue;
            }
            if self.ops.contains_key(&op.name) {
                return Err(format!(
                    "Op '{}' already installed (extension '{}')",
                    op.name, ext.name
                ));
            }
            self.ops.insert(op.name.clone(), op.handler.clone());
        }

        tracing::debug!(ext = %ext.name, ops = ext.ops.len(), "registered extension");
        self.load_order.push(ext.name.clone());
        self.extensions.insert(ext.name.clone(), ext);
        Ok(())
    }

    /// Check whether an op is available, natively or via a shim
    pub fn has_op(&self, name: &str) -> bool {
        self.native_ops.contains(name) || self.ops.contains_key(name)
    }

    /// Check whether an op was installed by a shim (false for native ops)
    pub fn is_shimmed(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Get the handler for an installed shim op
    pub fn get_op(&self, name: &str) -> Option<&OpHandler> {
        self.ops.get(name)
    }

    /// Dispatch a native op by name
    pub fn call_native(&self, name: &str, args: &[Value]) -> NativeOpResult {
        match self.ops.get(name) {
            Some(handler) => handler.call_native(args),
            None => Err(ShimError::type_error(format!("Unknown op: {name}"))),
        }
    }

    /// Dispatch a sync JSON op by name
    pub fn call_sync(&self, name: &str, args: &[JsonValue]) -> OpResult {
        match self.ops.get(name) {
            Some(handler) => handler.call_sync(args),
            None => Err(ShimError::type_error(format!("Unknown op: {name}"))),
        }
    }

    /// Names of registered extensions, in load order
    pub fn load_order(&self) -> &[String] {
        &self.load_order
    }
}

impl Default for ShimRegistry {
    fn default() -> Self {
        Self::new()
    }
}
