use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use crate::validation::VisitAction;
use indexmap::IndexMap;
use veriql_parser::SourceLocation;

/// Rejects documents that define two fragments with the same name.
///
/// The first definition of each name wins; every later definition of that
/// name is reported, carrying both the original and the duplicate location.
#[derive(Debug, Default)]
pub struct UniqueFragmentNamesRule {
    known_fragment_names: IndexMap<String, SourceLocation>,
}

impl UniqueFragmentNamesRule {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValidationRule for UniqueFragmentNamesRule {
    fn enter_operation_definition(
        &mut self,
        _context: &mut ValidationContext,
        _operation: &OperationDefinition,
    ) -> VisitAction {
        // Fragment definitions only appear at the top level.
        VisitAction::SkipChildren
    }

    fn enter_fragment_definition(
        &mut self,
        context: &mut ValidationContext,
        fragment: &FragmentDefinition,
    ) -> VisitAction {
        let name = &fragment.name;
        match self.known_fragment_names.get(&name.value) {
            Some(previous_location) => {
                context.report_error(ValidationError::new(
                    format!("There can only be one fragment named '{}'.", name.value),
                    vec![previous_location.clone(), name.loc.clone()],
                ));
            }
            None => {
                self.known_fragment_names
                    .insert(name.value.clone(), name.loc.clone());
            }
        }
        VisitAction::SkipChildren
    }
}
