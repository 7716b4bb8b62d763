use crate::validation::ValidationError;

/// The shared error sink for one validation pass.
///
/// All rules report into the same context, so the final error list reflects
/// document order regardless of which rule produced which entry.
#[derive(Debug, Default)]
pub struct ValidationContext {
    errors: Vec<ValidationError>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
