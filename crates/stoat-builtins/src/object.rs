//! Object reflection shims
//!
//! Provides the ES5 reflection surface over plain objects:
//! - getPrototypeOf - the delegate reference
//! - getOwnPropertyNames / keys - own name listing
//! - create - new object delegating to a given object, with an optional
//!   descriptor batch
//! - defineProperty / defineProperties - descriptor application with the
//!   accessor-definition fallback of the original shim
//!
//! Every object-shaped input is validated; violations fail with an error
//! naming the offending primitive.

use std::sync::Arc;
use stoat_core::{
    PlainObject, PropertyAttributes, PropertyDescriptor, Sequence, ShimError, ShimResult, Value,
};
use stoat_runtime::{Op, op_native};

/// Get Object ops for extension registration
pub fn ops() -> Vec<Op> {
    vec![
        op_native("__Object_getPrototypeOf", native_object_get_prototype_of),
        op_native("__Object_getOwnPropertyNames", native_object_get_own_property_names),
        op_native("__Object_keys", native_object_keys),
        op_native("__Object_create", native_object_create),
        op_native("__Object_defineProperty", native_object_define_property),
        op_native("__Object_defineProperties", native_object_define_properties),
    ]
}

// =============================================================================
// Helper functions
// =============================================================================

fn get_object(
    args: &[Value],
    idx: usize,
    primitive: &'static str,
) -> ShimResult<Arc<PlainObject>> {
    let val = args.get(idx).cloned().unwrap_or(Value::undefined());
    val.as_object().ok_or(ShimError::NotAnObject {
        primitive,
        found: val.type_of(),
    })
}

fn names_to_sequence(names: Vec<String>) -> Value {
    Value::sequence(Arc::new(Sequence::from_values(
        names.into_iter().map(Value::string),
    )))
}

fn parse_attributes(desc: &PlainObject) -> PropertyAttributes {
    // Absent attributes default to false
    let flag = |name: &str| {
        desc.get_own_value(name)
            .map(|v| v.is_truthy())
            .unwrap_or(false)
    };
    PropertyAttributes {
        writable: flag("writable"),
        enumerable: flag("enumerable"),
        configurable: flag("configurable"),
    }
}

/// Apply one descriptor object to a named property.
///
/// A `value` descriptor is applied only when no accessor is already
/// installed for that name anywhere on the chain (the original shim's
/// `__lookupGetter__` guard); otherwise the existing accessor stands.
/// A descriptor without `value` installs whichever of `get`/`set` it
/// carries.
fn apply_descriptor(obj: &Arc<PlainObject>, name: &str, desc: &Arc<PlainObject>) {
    let attributes = parse_attributes(desc);

    if desc.has_own("value") {
        if obj.lookup_getter(name).is_none() && obj.lookup_setter(name).is_none() {
            let value = desc.get_own_value("value").unwrap_or(Value::undefined());
            obj.define_property(name, PropertyDescriptor::data_with_attrs(value, attributes));
        }
        return;
    }

    let get = desc.get_own_value("get").filter(Value::is_callable);
    let set = desc.get_own_value("set").filter(Value::is_callable);
    if get.is_some() || set.is_some() {
        obj.define_property(name, PropertyDescriptor::accessor(get, set, attributes));
    }
}

/// Apply a batch of descriptors by repeated single application, in the
/// batch object's own-key order.
fn apply_descriptor_batch(
    obj: &Arc<PlainObject>,
    props: &Arc<PlainObject>,
    primitive: &'static str,
) -> ShimResult<()> {
    for name in props.own_keys() {
        let desc_val = props.get_own_value(&name).unwrap_or(Value::undefined());
        let desc = desc_val.as_object().ok_or(ShimError::NotAnObject {
            primitive,
            found: desc_val.type_of(),
        })?;
        apply_descriptor(obj, &name, &desc);
    }
    Ok(())
}

// =============================================================================
// Reflection methods
// =============================================================================

/// Object.getPrototypeOf(obj) - the delegate reference, or null
fn native_object_get_prototype_of(args: &[Value]) -> ShimResult<Value> {
    let obj = get_object(args, 0, "Object.getPrototypeOf")?;
    Ok(match obj.prototype() {
        Some(proto) => Value::object(proto),
        None => Value::null(),
    })
}

/// Object.getOwnPropertyNames(obj) - all own names, insertion order
fn native_object_get_own_property_names(args: &[Value]) -> ShimResult<Value> {
    let obj = get_object(args, 0, "Object.getOwnPropertyNames")?;
    Ok(names_to_sequence(obj.own_property_names()))
}

/// Object.keys(obj) - own enumerable names, insertion order
fn native_object_keys(args: &[Value]) -> ShimResult<Value> {
    let obj = get_object(args, 0, "Object.keys")?;
    Ok(names_to_sequence(obj.own_keys()))
}

/// Object.create(proto, props?) - new object delegating to proto
fn native_object_create(args: &[Value]) -> ShimResult<Value> {
    let proto = get_object(args, 0, "Object.create")?;
    let obj = Arc::new(PlainObject::new(Some(proto)));

    if let Some(props_val) = args.get(1)
        && !props_val.is_undefined()
    {
        let props = props_val.as_object().ok_or(ShimError::NotAnObject {
            primitive: "Object.create",
            found: props_val.type_of(),
        })?;
        apply_descriptor_batch(&obj, &props, "Object.create")?;
    }

    Ok(Value::object(obj))
}

/// Object.defineProperty(obj, name, descriptor)
fn native_object_define_property(args: &[Value]) -> ShimResult<Value> {
    let obj = get_object(args, 0, "Object.defineProperty")?;
    let name = args
        .get(1)
        .and_then(Value::as_str)
        .ok_or("Object.defineProperty: property name must be a string")?
        .to_string();
    let desc = get_object(args, 2, "Object.defineProperty")?;

    apply_descriptor(&obj, &name, &desc);
    Ok(Value::object(obj))
}

/// Object.defineProperties(obj, props)
fn native_object_define_properties(args: &[Value]) -> ShimResult<Value> {
    let obj = get_object(args, 0, "Object.defineProperties")?;
    let props = get_object(args, 1, "Object.defineProperties")?;

    apply_descriptor_batch(&obj, &props, "Object.defineProperties")?;
    Ok(Value::object(obj))
}
