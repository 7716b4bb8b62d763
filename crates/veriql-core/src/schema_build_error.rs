use thiserror::Error;

/// A fatal schema-construction error.
///
/// All of these halt [`TypeMap`](crate::types::TypeMap) construction
/// immediately: a schema that fails any of these checks must not become
/// usable, and there is no partial or degraded schema. The one exception is
/// [`NoPossibleTypes`](SchemaBuildError::NoPossibleTypes), which surfaces at
/// the first abstract-type query against a misconfigured schema.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "Schema must contain unique named types but contains multiple types \
        named \"{type_name}\"."
    )]
    DuplicateTypeName { type_name: String },

    #[error("{type_name}.{field_name} field type must be Input Type but got: {field_type}.")]
    InvalidInputFieldType {
        type_name: String,
        field_name: String,
        field_type: String,
    },

    #[error("{type_name}.{field_name} field type must be Output Type but got: {field_type}.")]
    InvalidOutputFieldType {
        type_name: String,
        field_name: String,
        field_type: String,
    },

    #[error(
        "{type_name}.{field_name}({argument_name}:) argument type must be \
        Input Type but got: {argument_type}."
    )]
    InvalidArgumentType {
        type_name: String,
        field_name: String,
        argument_name: String,
        argument_type: String,
    },

    #[error(
        "\"{type_name}\" may only implement interface types, but \
        \"{non_interface_name}\" is not an interface."
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_name: String,
    },

    #[error(
        "\"{interface_name}\" expects field \"{field_name}\" but \
        \"{type_name}\" does not provide it."
    )]
    MissingInterfaceField {
        interface_name: String,
        type_name: String,
        field_name: String,
    },

    #[error(
        "{interface_name}.{field_name} expects type \"{expected_type}\" but \
        {type_name}.{field_name} provides type \"{provided_type}\"."
    )]
    InvalidInterfaceFieldType {
        interface_name: String,
        type_name: String,
        field_name: String,
        expected_type: String,
        provided_type: String,
    },

    #[error(
        "{interface_name}.{field_name} expects argument \"{argument_name}\" \
        but {type_name}.{field_name} does not provide it."
    )]
    MissingInterfaceFieldArgument {
        interface_name: String,
        type_name: String,
        field_name: String,
        argument_name: String,
    },

    #[error(
        "{interface_name}.{field_name}({argument_name}:) expects type \
        \"{expected_type}\" but {type_name}.{field_name}({argument_name}:) \
        provides type \"{provided_type}\"."
    )]
    InvalidInterfaceFieldArgumentType {
        interface_name: String,
        type_name: String,
        field_name: String,
        argument_name: String,
        expected_type: String,
        provided_type: String,
    },

    #[error(
        "{type_name}.{field_name}({argument_name}:) is of required type \
        \"{argument_type}\" but is not also provided by the interface \
        {interface_name}.{field_name}."
    )]
    RequiredArgumentNotProvidedByInterface {
        interface_name: String,
        type_name: String,
        field_name: String,
        argument_name: String,
        argument_type: String,
    },

    #[error(
        "Could not find possible implementing types for \
        \"{abstract_type_name}\" in schema. Check that the schema's root \
        types reach every possible type."
    )]
    NoPossibleTypes { abstract_type_name: String },

    #[error("Fields of type \"{type_name}\" were already defined.")]
    FieldsAlreadyDefined { type_name: String },
}
