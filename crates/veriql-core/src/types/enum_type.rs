/// An enum type definition: a leaf type with a fixed, ordered set of value
/// names.
#[derive(Debug)]
pub struct EnumType {
    name: String,
    values: Vec<String>,
}

impl EnumType {
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value names in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
