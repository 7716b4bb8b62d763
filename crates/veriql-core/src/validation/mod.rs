//! Document validation.
//!
//! Rules implement [`ValidationRule`] and get driven over the document in a
//! single walk, all in parallel: each node is offered to every rule that is
//! still descending at that point, and a rule returning
//! [`VisitAction::SkipChildren`] opts itself (and only itself) out of that
//! node's subtree. Errors accumulate in the shared [`ValidationContext`];
//! validation never fails fast.

mod validation_context;
mod validation_error;

pub mod rules;

pub use validation_context::ValidationContext;
pub use validation_error::ValidationError;

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;

#[cfg(test)]
mod tests;

/// What a rule wants done with the current node's children.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitAction {
    Continue,
    SkipChildren,
}

/// One validation rule. Every hook defaults to descending; override only
/// the node kinds the rule cares about.
pub trait ValidationRule {
    fn enter_operation_definition(
        &mut self,
        _context: &mut ValidationContext,
        _operation: &OperationDefinition,
    ) -> VisitAction {
        VisitAction::Continue
    }

    fn enter_fragment_definition(
        &mut self,
        _context: &mut ValidationContext,
        _fragment: &FragmentDefinition,
    ) -> VisitAction {
        VisitAction::Continue
    }

    fn enter_field(&mut self, _context: &mut ValidationContext, _field: &Field) -> VisitAction {
        VisitAction::Continue
    }

    fn enter_fragment_spread(
        &mut self,
        _context: &mut ValidationContext,
        _spread: &FragmentSpread,
    ) -> VisitAction {
        VisitAction::Continue
    }

    fn enter_inline_fragment(
        &mut self,
        _context: &mut ValidationContext,
        _inline: &InlineFragment,
    ) -> VisitAction {
        VisitAction::Continue
    }
}

/// Runs every rule over the document in one walk and returns the collected
/// errors, in report order.
pub fn validate(
    document: &Document,
    mut rules: Vec<Box<dyn ValidationRule>>,
) -> Vec<ValidationError> {
    let mut context = ValidationContext::new();
    let all_active = vec![true; rules.len()];

    for definition in &document.definitions {
        match definition {
            Definition::Operation(operation) => {
                let active = enter_each(&mut rules, &all_active, &mut context, |rule, context| {
                    rule.enter_operation_definition(context, operation)
                });
                walk_selection_set(&mut rules, &active, &mut context, &operation.selection_set);
            }
            Definition::Fragment(fragment) => {
                let active = enter_each(&mut rules, &all_active, &mut context, |rule, context| {
                    rule.enter_fragment_definition(context, fragment)
                });
                walk_selection_set(&mut rules, &active, &mut context, &fragment.selection_set);
            }
        }
    }

    context.into_errors()
}

/// Offers the current node to each still-active rule and returns the
/// activity mask for the node's children.
fn enter_each(
    rules: &mut [Box<dyn ValidationRule>],
    active: &[bool],
    context: &mut ValidationContext,
    mut enter: impl FnMut(&mut dyn ValidationRule, &mut ValidationContext) -> VisitAction,
) -> Vec<bool> {
    rules
        .iter_mut()
        .zip(active)
        .map(|(rule, rule_active)| {
            *rule_active && enter(rule.as_mut(), context) == VisitAction::Continue
        })
        .collect()
}

fn walk_selection_set(
    rules: &mut [Box<dyn ValidationRule>],
    active: &[bool],
    context: &mut ValidationContext,
    selection_set: &SelectionSet,
) {
    if !active.iter().any(|rule_active| *rule_active) {
        return;
    }
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => {
                let child_active = enter_each(rules, active, context, |rule, context| {
                    rule.enter_field(context, field)
                });
                if let Some(nested) = &field.selection_set {
                    walk_selection_set(rules, &child_active, context, nested);
                }
            }
            Selection::FragmentSpread(spread) => {
                // Spreads have no children; the returned mask is unused.
                enter_each(rules, active, context, |rule, context| {
                    rule.enter_fragment_spread(context, spread)
                });
            }
            Selection::InlineFragment(inline) => {
                let child_active = enter_each(rules, active, context, |rule, context| {
                    rule.enter_inline_fragment(context, inline)
                });
                walk_selection_set(rules, &child_active, context, &inline.selection_set);
            }
        }
    }
}
