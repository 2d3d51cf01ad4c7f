//! Dynamic values for the shim layer
//!
//! Every shim operation works over `Value`: the caller-supplied receiver,
//! the arguments, and the result are all values. Heap-shaped values
//! (strings, objects, sequences, functions) live behind `Arc`, so `Value`
//! is `Send + Sync` and cheap to clone.

use crate::error::{ShimError, ShimResult};
use crate::object::PlainObject;
use crate::sequence::Sequence;
use std::sync::Arc;

/// Native function handler type
///
/// The receiver is an explicit first parameter rather than any ambient
/// calling context; callers that want an alternate receiver simply pass it.
pub type NativeFn = Arc<dyn Fn(&Value, &[Value]) -> ShimResult<Value> + Send + Sync>;

/// A dynamic value
#[derive(Clone)]
pub enum Value {
    /// The undefined value (distinct from an absent sequence index)
    Undefined,
    /// The null value
    Null,
    /// Boolean value
    Boolean(bool),
    /// IEEE 754 double
    Number(f64),
    /// Immutable string
    String(Arc<str>),
    /// Plain object with prototype link and property descriptors
    Object(Arc<PlainObject>),
    /// Sparse indexable sequence
    Sequence(Arc<Sequence>),
    /// Invocable function (native or bound)
    Function(Arc<JsFunction>),
}

impl Value {
    /// Create undefined value
    pub const fn undefined() -> Self {
        Self::Undefined
    }

    /// Create null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create boolean value
    pub const fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    /// Create number value
    pub const fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// Create string value
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::String(s.into())
    }

    /// Create object value
    pub fn object(obj: Arc<PlainObject>) -> Self {
        Self::Object(obj)
    }

    /// Create sequence value
    pub fn sequence(seq: Arc<Sequence>) -> Self {
        Self::Sequence(seq)
    }

    /// Create function value
    pub fn function(f: Arc<JsFunction>) -> Self {
        Self::Function(f)
    }

    /// Wrap a native Rust closure as a function value
    pub fn native_function<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> ShimResult<Value> + Send + Sync + 'static,
    {
        Self::Function(Arc::new(JsFunction::native(name, f)))
    }

    /// Get number (f64), if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get boolean, if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get string slice, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get object reference, if this is an object
    pub fn as_object(&self) -> Option<Arc<PlainObject>> {
        match self {
            Self::Object(o) => Some(Arc::clone(o)),
            _ => None,
        }
    }

    /// Get sequence reference, if this is a sequence
    pub fn as_sequence(&self) -> Option<Arc<Sequence>> {
        match self {
            Self::Sequence(s) => Some(Arc::clone(s)),
            _ => None,
        }
    }

    /// Get function reference, if this is a function
    pub fn as_function(&self) -> Option<Arc<JsFunction>> {
        match self {
            Self::Function(f) => Some(Arc::clone(f)),
            _ => None,
        }
    }

    /// Check if undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if invocable
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Boolean coercion (falsy: undefined, null, false, 0, NaN, "")
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Object(_) | Self::Sequence(_) | Self::Function(_) => true,
        }
    }

    /// Strict equality: identity for heap values, value equality for
    /// primitives, IEEE semantics for numbers (`NaN != NaN`).
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Sequence(a), Self::Sequence(b)) => Arc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Type name for error messages
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Object(_) => "object",
            Self::Sequence(_) => "sequence",
            Self::Function(_) => "function",
        }
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Object(_) => write!(f, "[object]"),
            Self::Sequence(s) => write!(f, "[sequence {}]", s.len()),
            Self::Function(func) => write!(f, "[function {}]", func.name()),
        }
    }
}

/// How a function invokes its target
enum FnKind {
    /// Implemented as a Rust closure
    Native(NativeFn),
    /// Bound adapter over another function: fixed receiver and fixed
    /// leading arguments prepended to call-time arguments
    Bound {
        target: Arc<JsFunction>,
        receiver: Value,
        bound_args: Vec<Value>,
    },
}

/// An invocable function with an attached object for properties
/// (`prototype` in particular, which `construct` consults).
pub struct JsFunction {
    name: String,
    kind: FnKind,
    object: Arc<PlainObject>,
}

impl JsFunction {
    /// Create a native function from a Rust closure
    pub fn native<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> ShimResult<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: FnKind::Native(Arc::new(f)),
            object: Arc::new(PlainObject::new(None)),
        }
    }

    /// Create a bound adapter over `target`.
    ///
    /// Calling the result invokes `target` with `receiver` and
    /// `bound_args` prepended to call-time arguments. Constructing through
    /// the result ignores `receiver` entirely.
    pub fn bound(target: Arc<JsFunction>, receiver: Value, bound_args: Vec<Value>) -> Self {
        let name = format!("bound {}", target.name);
        Self {
            name,
            kind: FnKind::Bound {
                target,
                receiver,
                bound_args,
            },
            object: Arc::new(PlainObject::new(None)),
        }
    }

    /// Function name (diagnostic only)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attached property object
    pub fn object(&self) -> &Arc<PlainObject> {
        &self.object
    }

    /// Check whether this is a bound adapter
    pub fn is_bound(&self) -> bool {
        matches!(self.kind, FnKind::Bound { .. })
    }

    /// Invoke with an explicit receiver
    pub fn call(&self, this: &Value, args: &[Value]) -> ShimResult<Value> {
        match &self.kind {
            FnKind::Native(f) => f(this, args),
            FnKind::Bound {
                target,
                receiver,
                bound_args,
            } => {
                // The caller-supplied receiver is discarded; the fixed one wins.
                let _ = this;
                let mut all = bound_args.clone();
                all.extend_from_slice(args);
                target.call(receiver, &all)
            }
        }
    }

    /// Construct an instance through this function.
    ///
    /// The instance delegates to the function's `prototype` property. For a
    /// bound adapter, construction behaves as if constructing the target
    /// directly: the fixed receiver is ignored, the fixed arguments are
    /// still prepended, and the prototype comes from the target.
    pub fn construct(&self, args: &[Value]) -> ShimResult<Value> {
        match &self.kind {
            FnKind::Bound {
                target, bound_args, ..
            } => {
                let mut all = bound_args.clone();
                all.extend_from_slice(args);
                target.construct(&all)
            }
            FnKind::Native(f) => {
                let proto = self
                    .object
                    .get_own_value("prototype")
                    .and_then(|v| v.as_object());
                let instance = Arc::new(PlainObject::new(proto));
                let this = Value::object(Arc::clone(&instance));
                let ret = f(&this, args)?;
                // A constructor returning a non-object yields the instance.
                if ret.as_object().is_some() {
                    Ok(ret)
                } else {
                    Ok(this)
                }
            }
        }
    }
}

impl std::fmt::Debug for JsFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JsFunction({})", self.name)
    }
}
