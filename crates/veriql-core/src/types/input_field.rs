use crate::types::TypeRef;

/// A field of an input-object type.
///
/// Unlike output [`Field`](crate::types::Field)s, input fields declare no
/// arguments; their type must be an input type, which
/// [`TypeMap`](crate::types::TypeMap) construction enforces.
#[derive(Debug)]
pub struct InputField {
    type_ref: TypeRef,
}

impl InputField {
    pub fn new(type_ref: TypeRef) -> Self {
        Self { type_ref }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
