use crate::SchemaBuildError;
use crate::types::InputField;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::OnceLock;

/// An input-object type definition.
///
/// Field binding follows the same once-only protocol as
/// [`ObjectType`](crate::types::ObjectType); input-object cycles are legal
/// type graphs and must not prevent construction.
#[derive(Debug)]
pub struct InputObjectType {
    name: String,
    fields: OnceLock<IndexMap<String, InputField>>,
}

impl InputObjectType {
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
        fields: impl IntoIterator<Item = (impl Into<String>, InputField)>,
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
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        self.fields.get_or_init(IndexMap::new)
    }
}
