use crate::types::NamedType;

/// A use of a type at a position in the schema: either a named type
/// directly, or a named type under some stack of list / non-null wrappers.
#[derive(Clone, Debug)]
pub enum TypeRef {
    Named(NamedType),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn list(inner: TypeRef) -> TypeRef {
        TypeRef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> TypeRef {
        TypeRef::NonNull(Box::new(inner))
    }

    /// The named type at the bottom of the wrapper stack.
    pub fn innermost_named(&self) -> &NamedType {
        match self {
            TypeRef::Named(named) => named,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.innermost_named(),
        }
    }

    /// Wrappers never change input/output-ness; only the innermost named
    /// type decides.
    pub fn is_input_type(&self) -> bool {
        self.innermost_named().is_input_type()
    }

    pub fn is_output_type(&self) -> bool {
        self.innermost_named().is_output_type()
    }
}

impl From<NamedType> for TypeRef {
    fn from(named: NamedType) -> Self {
        TypeRef::Named(named)
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Named(named) => write!(f, "{named}"),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
