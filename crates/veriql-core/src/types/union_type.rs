use crate::types::NamedType;
use std::sync::Arc;

/// A union type definition: an abstract type whose possible types are
/// exactly its declared member list, in declaration order.
#[derive(Debug)]
pub struct UnionType {
    name: String,
    members: Vec<NamedType>,
}

impl UnionType {
    pub fn new(
        name: impl Into<String>,
        members: impl IntoIterator<Item = NamedType>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            members: members.into_iter().collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member types in declaration order.
    pub fn members(&self) -> &[NamedType] {
        &self.members
    }
}
