use crate::SchemaBuildError;
use crate::types::Field;
use crate::types::NamedType;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::OnceLock;

/// An object type definition.
///
/// The interface list is fixed at construction; the field map is bound
/// exactly once afterwards via [`set_fields`](ObjectType::set_fields).
/// Splitting the two steps is what allows cyclic references: create the
/// definitions first, then wire fields that point back at already-created
/// types.
#[derive(Debug)]
pub struct ObjectType {
    name: String,
    interfaces: Vec<NamedType>,
    fields: OnceLock<IndexMap<String, Field>>,
}

impl ObjectType {
    pub fn new(
        name: impl Into<String>,
        interfaces: impl IntoIterator<Item = NamedType>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            interfaces: interfaces.into_iter().collect(),
            fields: OnceLock::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The interfaces this object declares, in declaration order.
    pub fn interfaces(&self) -> &[NamedType] {
        &self.interfaces
    }

    /// Binds the field map. Callable exactly once.
    pub fn set_fields(
        &self,
        fields: impl IntoIterator<Item = (impl Into<String>, Field)>,
    ) -> Result<(), SchemaBuildError> {
        let fields = fields
            .into_iter()
            .map(|(name, field)| (name.into(), field))
            .collect();
        self.fields
            .set(fields)
            .map_err(|_| SchemaBuildError::FieldsAlreadyDefined {
                type_name: self.name.clone(),
            })
    }

    /// Fields in declaration order; empty if never bound.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get_or_init(IndexMap::new)
    }
}
