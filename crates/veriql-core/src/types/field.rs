use crate::types::TypeRef;
use indexmap::IndexMap;

/// An output field of an object or interface type.
///
/// Fields are keyed by name in their parent's field map, so the name lives
/// on the map entry rather than here.
#[derive(Debug)]
pub struct Field {
    type_ref: TypeRef,
    arguments: IndexMap<String, Argument>,
}

impl Field {
    /// A field with no arguments.
    pub fn new(type_ref: TypeRef) -> Self {
        Self {
            type_ref,
            arguments: IndexMap::new(),
        }
    }

    pub fn with_arguments(
        type_ref: TypeRef,
        arguments: impl IntoIterator<Item = (impl Into<String>, Argument)>,
    ) -> Self {
        Self {
            type_ref,
            arguments: arguments
                .into_iter()
                .map(|(name, arg)| (name.into(), arg))
                .collect(),
        }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    /// Arguments in declaration order.
    pub fn arguments(&self) -> &IndexMap<String, Argument> {
        &self.arguments
    }
}

/// An argument declared by an output field.
#[derive(Debug)]
pub struct Argument {
    type_ref: TypeRef,
}

impl Argument {
    pub fn new(type_ref: TypeRef) -> Self {
        Self { type_ref }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
