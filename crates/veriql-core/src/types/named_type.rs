use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use std::sync::Arc;

/// Any type with a unique schema-wide name.
///
/// This is the closed sum over GraphQL's six named-type categories. Cloning
/// is cheap (`Arc` bump) and clones share one definition: two `NamedType`s
/// are the *same definition* only when their `Arc`s point at the same
/// allocation, which [`same_definition`](NamedType::same_definition) tests.
/// Name equality alone is never identity; the type map treats two distinct
/// definitions with one name as a fatal error.
#[derive(Clone)]
pub enum NamedType {
    Scalar(Arc<ScalarType>),
    Object(Arc<ObjectType>),
    Interface(Arc<InterfaceType>),
    Union(Arc<UnionType>),
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Scalar(t) => t.name(),
            NamedType::Object(t) => t.name(),
            NamedType::Interface(t) => t.name(),
            NamedType::Union(t) => t.name(),
            NamedType::Enum(t) => t.name(),
            NamedType::InputObject(t) => t.name(),
        }
    }

    /// Whether `self` and `other` are the same type definition (pointer
    /// identity), as opposed to merely sharing a name.
    pub fn same_definition(&self, other: &NamedType) -> bool {
        match (self, other) {
            (NamedType::Scalar(a), NamedType::Scalar(b)) => Arc::ptr_eq(a, b),
            (NamedType::Object(a), NamedType::Object(b)) => Arc::ptr_eq(a, b),
            (NamedType::Interface(a), NamedType::Interface(b)) => Arc::ptr_eq(a, b),
            (NamedType::Union(a), NamedType::Union(b)) => Arc::ptr_eq(a, b),
            (NamedType::Enum(a), NamedType::Enum(b)) => Arc::ptr_eq(a, b),
            (NamedType::InputObject(a), NamedType::InputObject(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Input types are legal for arguments and input-object fields:
    /// scalars, enums, and input objects.
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            NamedType::Scalar(_) | NamedType::Enum(_) | NamedType::InputObject(_),
        )
    }

    /// Output types are legal for object/interface fields: everything
    /// except input objects.
    pub fn is_output_type(&self) -> bool {
        matches!(
            self,
            NamedType::Scalar(_)
                | NamedType::Object(_)
                | NamedType::Interface(_)
                | NamedType::Union(_)
                | NamedType::Enum(_),
        )
    }

    /// Abstract types have no direct instances, only possible concrete
    /// member/implementer types.
    pub fn is_abstract_type(&self) -> bool {
        matches!(self, NamedType::Interface(_) | NamedType::Union(_))
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        match self {
            NamedType::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&Arc<InterfaceType>> {
        match self {
            NamedType::Interface(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&Arc<UnionType>> {
        match self {
            NamedType::Union(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Arc<ScalarType>> for NamedType {
    fn from(t: Arc<ScalarType>) -> Self {
        NamedType::Scalar(t)
    }
}

impl From<Arc<ObjectType>> for NamedType {
    fn from(t: Arc<ObjectType>) -> Self {
        NamedType::Object(t)
    }
}

impl From<Arc<InterfaceType>> for NamedType {
    fn from(t: Arc<InterfaceType>) -> Self {
        NamedType::Interface(t)
    }
}

impl From<Arc<UnionType>> for NamedType {
    fn from(t: Arc<UnionType>) -> Self {
        NamedType::Union(t)
    }
}

impl From<Arc<EnumType>> for NamedType {
    fn from(t: Arc<EnumType>) -> Self {
        NamedType::Enum(t)
    }
}

impl From<Arc<InputObjectType>> for NamedType {
    fn from(t: Arc<InputObjectType>) -> Self {
        NamedType::InputObject(t)
    }
}

impl std::fmt::Display for NamedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Type graphs are frequently cyclic, so Debug prints only the category and
// name rather than descending into the definition.
impl std::fmt::Debug for NamedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let category = match self {
            NamedType::Scalar(_) => "Scalar",
            NamedType::Object(_) => "Object",
            NamedType::Interface(_) => "Interface",
            NamedType::Union(_) => "Union",
            NamedType::Enum(_) => "Enum",
            NamedType::InputObject(_) => "InputObject",
        };
        write!(f, "{}({})", category, self.name())
    }
}
