//! A minimal executable-document AST.
//!
//! Just enough structure to drive the validation visitor: documents hold
//! operation and fragment definitions, selection sets hold fields, spreads,
//! and inline fragments. Every node a rule might want to report against
//! carries a [`Name`] with its source location.

use serde::Deserialize;
use serde::Serialize;
use veriql_parser::SourceLocation;

/// A name as it appeared in the document, with where it appeared.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Name {
    pub value: String,
    pub loc: SourceLocation,
}

impl Name {
    pub fn new(value: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            value: value.into(),
            loc,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<Name>,
    pub selection_set: SelectionSet,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: Name,
    pub selection_set: SelectionSet,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: Name,
    pub selection_set: Option<SelectionSet>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FragmentSpread {
    pub name: Name,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<Name>,
    pub selection_set: SelectionSet,
}
