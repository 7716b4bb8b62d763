//! The five built-in scalar types.
//!
//! Each constructor returns a fresh definition. Because the type map
//! identifies types by definition (not by name), a schema should create
//! each built-in scalar once and share that value everywhere it is used.

use crate::types::NamedType;
use crate::types::ScalarType;
use std::sync::Arc;

pub fn int() -> NamedType {
    NamedType::Scalar(Arc::new(ScalarType::with_description(
        "Int",
        "The `Int` scalar type represents non-fractional signed whole \
         numeric values.",
    )))
}

pub fn float() -> NamedType {
    NamedType::Scalar(Arc::new(ScalarType::with_description(
        "Float",
        "The `Float` scalar type represents signed double-precision \
         fractional values as specified by IEEE 754.",
    )))
}

pub fn string() -> NamedType {
    NamedType::Scalar(Arc::new(ScalarType::with_description(
        "String",
        "The `String` scalar type represents textual data, represented as \
         UTF-8 character sequences.",
    )))
}

pub fn boolean() -> NamedType {
    NamedType::Scalar(Arc::new(ScalarType::with_description(
        "Boolean",
        "The `Boolean` scalar type represents `true` or `false`.",
    )))
}

pub fn id() -> NamedType {
    NamedType::Scalar(Arc::new(ScalarType::with_description(
        "ID",
        "The `ID` scalar type represents a unique identifier, often used to \
         refetch an object or as key for a cache.",
    )))
}
