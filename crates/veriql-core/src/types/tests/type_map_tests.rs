use super::named;
use super::scalar;
use crate::SchemaBuildError;
use crate::types::Argument;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::TypeMap;
use crate::types::TypeRef;
use crate::types::UnionType;
use std::sync::Arc;

#[test]
fn empty_roots_build_an_empty_map() {
    let type_map = TypeMap::build([]).unwrap();
    assert!(type_map.is_empty());
    assert_eq!(type_map.len(), 0);
}

#[test]
fn none_roots_are_skipped() {
    let string = scalar("String");
    let query = ObjectType::new("Query", []);
    query
        .set_fields([("greeting", Field::new(named(&string)))])
        .unwrap();

    let type_map = TypeMap::build([
        None,
        Some(named(&NamedType::from(query))),
        None,
    ])
    .unwrap();

    assert_eq!(type_map.len(), 2);
    assert!(type_map.contains("Query"));
    assert!(type_map.contains("String"));
}

#[test]
fn collects_types_in_depth_first_preorder() {
    let string = scalar("String");

    let character = InterfaceType::new("Character");
    character
        .set_fields([("name", Field::new(named(&string)))])
        .unwrap();
    let character = NamedType::from(character);

    let human = ObjectType::new("Human", [character.clone()]);
    human
        .set_fields([
            ("name", Field::new(named(&string))),
            ("friend", Field::new(named(&character))),
        ])
        .unwrap();
    let human = NamedType::from(human);

    let droid = ObjectType::new("Droid", [character.clone()]);
    droid
        .set_fields([
            ("name", Field::new(named(&string))),
            ("primaryFunction", Field::new(named(&string))),
        ])
        .unwrap();
    let droid = NamedType::from(droid);

    let search_result = NamedType::from(UnionType::new(
        "SearchResult",
        [human.clone(), droid.clone()],
    ));

    let human_input = InputObjectType::new("HumanInput");
    human_input
        .set_fields([("name", InputField::new(TypeRef::non_null(named(&string))))])
        .unwrap();
    let human_input = NamedType::from(human_input);

    let query = ObjectType::new("Query", []);
    query
        .set_fields([
            ("hero", Field::new(named(&character))),
            ("search", Field::new(named(&search_result))),
            (
                "findHuman",
                Field::with_arguments(
                    named(&human),
                    [("input", Argument::new(TypeRef::non_null(named(&human_input))))],
                ),
            ),
        ])
        .unwrap();

    let type_map = TypeMap::build([Some(named(&NamedType::from(query)))]).unwrap();

    let names: Vec<&str> = type_map.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        [
            "Query",
            "Character",
            "String",
            "SearchResult",
            "Human",
            "Droid",
            "HumanInput",
        ],
    );
}

#[test]
fn same_definition_reachable_twice_is_fine() {
    let string = scalar("String");
    let query = ObjectType::new("Query", []);
    query
        .set_fields([
            ("first", Field::new(named(&string))),
            ("second", Field::new(named(&string))),
        ])
        .unwrap();

    let type_map = TypeMap::build([Some(named(&NamedType::from(query)))]).unwrap();
    assert_eq!(type_map.len(), 2);
}

#[test]
fn two_definitions_with_one_name_are_rejected() {
    let string_a = scalar("String");
    let string_b = scalar("String");
    let query = ObjectType::new("Query", []);
    query
        .set_fields([
            ("a", Field::new(named(&string_a))),
            ("b", Field::new(named(&string_b))),
        ])
        .unwrap();

    let err = TypeMap::build([Some(named(&NamedType::from(query)))]).unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::DuplicateTypeName {
            type_name: "String".to_string(),
        },
    );
    assert_eq!(
        err.to_string(),
        "Schema must contain unique named types but contains multiple types \
         named \"String\".",
    );
}

#[test]
fn cyclic_field_references_build() {
    let a = ObjectType::new("A", []);
    let b = ObjectType::new("B", []);
    let a_named = NamedType::from(a.clone());
    let b_named = NamedType::from(b.clone());
    a.set_fields([("b", Field::new(named(&b_named)))]).unwrap();
    b.set_fields([("a", Field::new(named(&a_named)))]).unwrap();

    let type_map = TypeMap::build([Some(named(&a_named))]).unwrap();
    assert_eq!(type_map.len(), 2);
    assert!(type_map.contains("A"));
    assert!(type_map.contains("B"));
}

#[test]
fn enums_are_legal_in_both_input_and_output_positions() {
    let episode_def = Arc::new(EnumType::new("Episode", ["NEWHOPE", "EMPIRE", "JEDI"]));
    assert_eq!(episode_def.values(), ["NEWHOPE", "EMPIRE", "JEDI"]);
    let episode = NamedType::from(episode_def);

    let filter = InputObjectType::new("HeroFilter");
    filter
        .set_fields([("episode", InputField::new(named(&episode)))])
        .unwrap();
    let filter = NamedType::from(filter);

    let query = ObjectType::new("Query", []);
    query
        .set_fields([(
            "heroEpisode",
            Field::with_arguments(
                named(&episode),
                [
                    ("episode", Argument::new(TypeRef::non_null(named(&episode)))),
                    ("filter", Argument::new(named(&filter))),
                ],
            ),
        )])
        .unwrap();

    let type_map = TypeMap::build([Some(named(&NamedType::from(query)))]).unwrap();

    // The enum reached the map through the argument, the input-object
    // field, and the field type, and all three positions accepted it.
    let found = type_map.get("Episode").expect("enum should be in the map");
    assert!(found.same_definition(&episode));
    assert_eq!(
        type_map.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        ["Query", "Episode", "HeroFilter"],
    );
}

#[test]
fn self_referential_input_object_builds() {
    let filter = InputObjectType::new("Filter");
    let filter_named = NamedType::from(filter.clone());
    filter
        .set_fields([("and", InputField::new(TypeRef::list(named(&filter_named))))])
        .unwrap();

    let type_map = TypeMap::build([Some(named(&filter_named))]).unwrap();
    assert_eq!(type_map.len(), 1);
}

#[test]
fn input_object_field_must_be_input_type() {
    let pet = ObjectType::new("Pet", []);
    pet.set_fields([("name", Field::new(named(&scalar("String"))))])
        .unwrap();
    let pet = NamedType::from(pet);

    let input = InputObjectType::new("PetInput");
    input
        .set_fields([("pet", InputField::new(named(&pet)))])
        .unwrap();

    let err = TypeMap::build([Some(named(&NamedType::from(input)))]).unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::InvalidInputFieldType {
            type_name: "PetInput".to_string(),
            field_name: "pet".to_string(),
            field_type: "Pet".to_string(),
        },
    );
    assert_eq!(
        err.to_string(),
        "PetInput.pet field type must be Input Type but got: Pet.",
    );
}

#[test]
fn object_field_must_be_output_type() {
    let input = InputObjectType::new("Filter");
    input
        .set_fields([("q", InputField::new(named(&scalar("String"))))])
        .unwrap();
    let input = NamedType::from(input);

    let query = ObjectType::new("Query", []);
    query
        .set_fields([("filter", Field::new(TypeRef::list(named(&input))))])
        .unwrap();

    let err = TypeMap::build([Some(named(&NamedType::from(query)))]).unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::InvalidOutputFieldType {
            type_name: "Query".to_string(),
            field_name: "filter".to_string(),
            field_type: "[Filter]".to_string(),
        },
    );
}

#[test]
fn argument_must_be_input_type() {
    let pet = ObjectType::new("Pet", []);
    pet.set_fields([("name", Field::new(named(&scalar("String"))))])
        .unwrap();
    let pet = NamedType::from(pet);

    let query = ObjectType::new("Query", []);
    query
        .set_fields([(
            "find",
            Field::with_arguments(named(&pet), [("like", Argument::new(named(&pet)))]),
        )])
        .unwrap();

    let err = TypeMap::build([Some(named(&NamedType::from(query)))]).unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::InvalidArgumentType {
            type_name: "Query".to_string(),
            field_name: "find".to_string(),
            argument_name: "like".to_string(),
            argument_type: "Pet".to_string(),
        },
    );
}

#[test]
fn implementing_a_non_interface_is_rejected() {
    let string = scalar("String");
    let object = ObjectType::new("Oops", [string.clone()]);
    object
        .set_fields([("name", Field::new(named(&string)))])
        .unwrap();

    let err = TypeMap::build([Some(named(&NamedType::from(object)))]).unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::ImplementsNonInterfaceType {
            type_name: "Oops".to_string(),
            non_interface_name: "String".to_string(),
        },
    );
}

#[test]
fn fields_can_only_be_set_once() {
    let string = scalar("String");
    let object = ObjectType::new("Thing", []);
    object
        .set_fields([("name", Field::new(named(&string)))])
        .unwrap();
    let err = object
        .set_fields([("name", Field::new(named(&string)))])
        .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::FieldsAlreadyDefined {
            type_name: "Thing".to_string(),
        },
    );
}

#[test]
fn unbound_fields_read_as_empty() {
    let object = ObjectType::new("Bare", []);
    assert!(object.fields().is_empty());
}
