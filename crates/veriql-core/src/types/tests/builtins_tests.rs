use super::named;
use crate::types::Field;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::TypeMap;
use crate::types::builtins;

#[test]
fn provides_the_five_standard_scalars() {
    let scalars = [
        (builtins::int(), "Int"),
        (builtins::float(), "Float"),
        (builtins::string(), "String"),
        (builtins::boolean(), "Boolean"),
        (builtins::id(), "ID"),
    ];
    for (scalar, expected_name) in scalars {
        assert_eq!(scalar.name(), expected_name);
        assert!(scalar.is_input_type());
        assert!(scalar.is_output_type());
        let NamedType::Scalar(definition) = &scalar else {
            panic!("{expected_name} should be a scalar");
        };
        let description = definition
            .description()
            .unwrap_or_else(|| panic!("{expected_name} should carry a description"));
        assert!(
            description.contains(&format!("`{expected_name}`")),
            "description of {expected_name} should name the type: {description:?}",
        );
    }
}

#[test]
fn each_call_returns_a_fresh_definition() {
    // Same name, different definitions; sharing is the caller's job.
    assert!(!builtins::string().same_definition(&builtins::string()));
}

#[test]
fn builtin_scalars_flow_through_the_type_map() {
    let int = builtins::int();
    let string = builtins::string();
    let query = ObjectType::new("Query", []);
    query
        .set_fields([
            ("count", Field::new(named(&int))),
            ("label", Field::new(named(&string))),
        ])
        .unwrap();

    let type_map = TypeMap::build([Some(named(&NamedType::from(query)))]).unwrap();
    assert_eq!(
        type_map.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        ["Query", "Int", "String"],
    );
    assert!(type_map.get("Int").expect("Int in map").same_definition(&int));
}
