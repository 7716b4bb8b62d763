use crate::types::NamedType;
use crate::types::ScalarType;
use crate::types::TypeRef;
use std::sync::Arc;

mod builtins_tests;
mod type_map_tests;

fn scalar(name: &str) -> NamedType {
    NamedType::Scalar(Arc::new(ScalarType::new(name)))
}

fn named(named_type: &NamedType) -> TypeRef {
    TypeRef::Named(named_type.clone())
}
