use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::Name;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use veriql_parser::SourceLocation;


fn name_at(value: &str, line: usize, column: usize) -> Name {
    Name::new(value, SourceLocation::new(line, column))
}

fn leaf_field(value: &str) -> Selection {
    Selection::Field(Field {
        name: name_at(value, 1, 1),
        selection_set: None,
    })
}

fn selections(selections: impl IntoIterator<Item = Selection>) -> SelectionSet {
    SelectionSet {
        selections: selections.into_iter().collect(),
    }
}

fn query(selection_set: SelectionSet) -> Definition {
    Definition::Operation(OperationDefinition {
        kind: OperationKind::Query,
        name: None,
        selection_set,
    })
}

fn fragment(name: Name, type_condition: &str, selection_set: SelectionSet) -> Definition {
    Definition::Fragment(FragmentDefinition {
        name,
        type_condition: name_at(type_condition, 1, 1),
        selection_set,
    })
}

fn document(definitions: impl IntoIterator<Item = Definition>) -> Document {
    Document {
        definitions: definitions.into_iter().collect(),
    }
}
