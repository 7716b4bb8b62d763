use crate::SchemaBuildError;
use crate::types::Field;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::OnceLock;

/// An interface type definition: an abstract type whose concrete possible
/// types are the object types that declare it.
///
/// Field binding follows the same once-only protocol as
/// [`ObjectType`](crate::types::ObjectType).
#[derive(Debug)]
pub struct InterfaceType {
    name: String,
    fields: OnceLock<IndexMap<String, Field>>,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            fields: OnceLock::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
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
