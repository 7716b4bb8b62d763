//! The schema-side type model.
//!
//! GraphQL's type categories are modeled as a closed sum: the six named-type
//! categories live in [`NamedType`], and the two wrapping modifiers (List,
//! Non-Null) in [`TypeRef`]. Every closure and validation site matches on
//! these exhaustively, so a new category cannot be silently mishandled.
//!
//! Named-type definitions are shared via `Arc`; the field maps of object,
//! interface, and input-object types are set exactly once after
//! construction (through `set_fields`), which is what makes cyclic type
//! graphs (`A` referencing `B` referencing `A`) constructible.

pub mod builtins;
mod enum_type;
mod field;
mod input_field;
mod input_object_type;
mod interface_type;
mod named_type;
mod object_type;
mod scalar_type;
mod type_comparators;
mod type_map;
mod type_ref;
mod union_type;

pub use enum_type::EnumType;
pub use field::Argument;
pub use field::Field;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use named_type::NamedType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_comparators::is_equal_type;
pub use type_comparators::is_subtype_of;
pub use type_map::TypeMap;
pub use type_ref::TypeRef;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
