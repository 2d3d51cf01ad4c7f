//! Sparse indexable sequences
//!
//! The one entity of the shim layer: an ordered collection addressed by
//! non-negative index, where any index in `[0, length)` may be absent.
//! Absence (a "hole") is distinct from holding `Value::Undefined`; the
//! traversal primitives skip the former and visit the latter.
//!
//! Interior mutability matters here: a traversal callback is allowed to
//! mutate the very sequence it is traversing (the traversal snapshots the
//! length once up front and re-checks presence at every index).

use crate::value::Value;
use parking_lot::RwLock;

/// A sparse, length-bearing sequence of values
pub struct Sequence {
    slots: RwLock<Vec<Option<Value>>>,
}

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(Vec::new()),
        }
    }

    /// Create a sequence of `length` holes
    pub fn with_length(length: usize) -> Self {
        Self {
            slots: RwLock::new(vec![None; length]),
        }
    }

    /// Create a dense sequence from values
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            slots: RwLock::new(values.into_iter().map(Some).collect()),
        }
    }

    /// Current length
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Check for zero length
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    /// Value at `index`, or `None` for a hole or out-of-range index
    pub fn get(&self, index: usize) -> Option<Value> {
        self.slots.read().get(index).cloned().flatten()
    }

    /// Check whether `index` holds a value (presence, not truthiness)
    pub fn is_present(&self, index: usize) -> bool {
        matches!(self.slots.read().get(index), Some(Some(_)))
    }

    /// Set the value at `index`, growing the sequence with holes if needed
    pub fn set(&self, index: usize, value: Value) {
        let mut slots = self.slots.write();
        if index >= slots.len() {
            slots.resize(index + 1, None);
        }
        slots[index] = Some(value);
    }

    /// Punch a hole at `index`; the length is unchanged
    pub fn delete(&self, index: usize) {
        let mut slots = self.slots.write();
        if index < slots.len() {
            slots[index] = None;
        }
    }

    /// Append a value at the end
    pub fn push(&self, value: Value) {
        self.slots.write().push(Some(value));
    }

    /// Clone the present values in order, skipping holes
    pub fn present_values(&self) -> Vec<Value> {
        self.slots.read().iter().flatten().cloned().collect()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = self.slots.read();
        write!(f, "Sequence[len={}]", slots.len())
    }
}
