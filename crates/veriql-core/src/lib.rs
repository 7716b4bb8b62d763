//! Schema type registry and document validation for a GraphQL engine.
//!
//! Two independent pieces live here:
//!
//! - [`types`] — the schema-side type model: a closed sum over the GraphQL
//!   type categories, and [`TypeMap`](types::TypeMap), the registry of every
//!   named type transitively reachable from a schema's root types. The map
//!   is built once, eagerly, at schema-construction time; construction fails
//!   fast on duplicate names, misplaced input/output types, and interface
//!   conformance violations. After construction it serves the executor's
//!   abstract-type resolution queries
//!   ([`get_possible_types`](types::TypeMap::get_possible_types) /
//!   [`is_possible_type`](types::TypeMap::is_possible_type)) and is safe to
//!   share read-only across concurrent query executions.
//! - [`validation`] — the document-side rule layer: a visitor protocol over
//!   the executable-document [`ast`], a shared context that accumulates
//!   (rather than raises) [`ValidationError`](validation::ValidationError)s,
//!   and the rules themselves.

pub mod ast;
mod schema_build_error;
pub mod types;
pub mod validation;

pub use schema_build_error::SchemaBuildError;
