use crate::SchemaBuildError;
use crate::types::TypeMap;
use crate::types::TypeRef;

/// Whether two type references denote exactly the same type: identical
/// wrapper stacks over the same named-type definition.
pub fn is_equal_type(a: &TypeRef, b: &TypeRef) -> bool {
    match (a, b) {
        (TypeRef::Named(a), TypeRef::Named(b)) => a.same_definition(b),
        (TypeRef::List(a), TypeRef::List(b)) => is_equal_type(a, b),
        (TypeRef::NonNull(a), TypeRef::NonNull(b)) => is_equal_type(a, b),
        _ => false,
    }
}

/// Whether `maybe_subtype` is usable anywhere `super_type` is expected.
///
/// Equal types are subtypes of each other. Non-null and list wrappers are
/// covariant in their inner type, and a non-null type is a subtype of its
/// nullable form. At the named level, an object type is a subtype of any
/// abstract type it is a possible type of.
pub fn is_subtype_of(
    type_map: &TypeMap,
    maybe_subtype: &TypeRef,
    super_type: &TypeRef,
) -> Result<bool, SchemaBuildError> {
    if is_equal_type(maybe_subtype, super_type) {
        return Ok(true);
    }

    if let TypeRef::NonNull(super_inner) = super_type {
        return match maybe_subtype {
            TypeRef::NonNull(sub_inner) => is_subtype_of(type_map, sub_inner, super_inner),
            _ => Ok(false),
        };
    }
    if let TypeRef::NonNull(sub_inner) = maybe_subtype {
        return is_subtype_of(type_map, sub_inner, super_type);
    }

    if let TypeRef::List(super_inner) = super_type {
        return match maybe_subtype {
            TypeRef::List(sub_inner) => is_subtype_of(type_map, sub_inner, super_inner),
            _ => Ok(false),
        };
    }
    if matches!(maybe_subtype, TypeRef::List(_)) {
        return Ok(false);
    }

    if let (TypeRef::Named(sub), TypeRef::Named(sup)) = (maybe_subtype, super_type)
        && sup.is_abstract_type()
        && sub.as_object().is_some()
    {
        return type_map.is_possible_type(sup, sub);
    }

    Ok(false)
}
