use crate::SchemaBuildError;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::types::is_equal_type;
use crate::types::is_subtype_of;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::PoisonError;
use std::sync::RwLock;

/// The complete set of named types reachable from a schema's root types,
/// keyed by name, in first-encounter order.
///
/// Construction walks the type graph depth-first from the roots, collecting
/// every referenced type and rejecting structurally broken schemas (two
/// distinct definitions sharing one name, output types in input positions
/// and vice versa, objects that violate an interface they declare). Once
/// built, a `TypeMap` is immutable apart from an internal cache of
/// possible-type name sets for abstract types.
#[derive(Debug)]
pub struct TypeMap {
    types: IndexMap<String, NamedType>,
    implementations: IndexMap<String, Vec<NamedType>>,
    possible_type_names: RwLock<HashMap<String, HashSet<String>>>,
}

impl TypeMap {
    /// Builds the map from the schema's root types. `None` entries (absent
    /// optional roots) are skipped.
    pub fn build(
        roots: impl IntoIterator<Item = Option<TypeRef>>,
    ) -> Result<Self, SchemaBuildError> {
        let mut types = IndexMap::new();

        let mut pending: Vec<NamedType> = roots
            .into_iter()
            .flatten()
            .map(|type_ref| type_ref.innermost_named().clone())
            .collect();
        pending.reverse();

        while let Some(named) = pending.pop() {
            if let Some(existing) = types.get(named.name()) {
                if !named.same_definition(existing) {
                    return Err(SchemaBuildError::DuplicateTypeName {
                        type_name: named.name().to_string(),
                    });
                }
                continue;
            }
            types.insert(named.name().to_string(), named.clone());

            let children = Self::collect_children(&named)?;
            // Reversed so the first-encountered child is visited (and its
            // subtree fully expanded) before the next one.
            pending.extend(children.into_iter().rev());
        }

        let implementations = Self::index_implementations(&types)?;

        let type_map = Self {
            types,
            implementations,
            possible_type_names: RwLock::new(HashMap::new()),
        };
        type_map.assert_interface_conformance()?;
        Ok(type_map)
    }

    /// The named types a visited type refers to directly, in encounter
    /// order, with the input/output placement checks applied on the way.
    fn collect_children(named: &NamedType) -> Result<Vec<NamedType>, SchemaBuildError> {
        let mut children = Vec::new();

        if let Some(union_type) = named.as_union() {
            children.extend(union_type.members().iter().cloned());
        }
        if let Some(object_type) = named.as_object() {
            children.extend(object_type.interfaces().iter().cloned());
        }

        let output_fields = match named {
            NamedType::Object(t) => Some(t.fields()),
            NamedType::Interface(t) => Some(t.fields()),
            _ => None,
        };
        if let Some(fields) = output_fields {
            for (field_name, field) in fields {
                if !field.type_ref().is_output_type() {
                    return Err(SchemaBuildError::InvalidOutputFieldType {
                        type_name: named.name().to_string(),
                        field_name: field_name.clone(),
                        field_type: field.type_ref().to_string(),
                    });
                }
                for (argument_name, argument) in field.arguments() {
                    if !argument.type_ref().is_input_type() {
                        return Err(SchemaBuildError::InvalidArgumentType {
                            type_name: named.name().to_string(),
                            field_name: field_name.clone(),
                            argument_name: argument_name.clone(),
                            argument_type: argument.type_ref().to_string(),
                        });
                    }
                    children.push(argument.type_ref().innermost_named().clone());
                }
                children.push(field.type_ref().innermost_named().clone());
            }
        }

        if let NamedType::InputObject(input_object) = named {
            for (field_name, field) in input_object.fields() {
                if !field.type_ref().is_input_type() {
                    return Err(SchemaBuildError::InvalidInputFieldType {
                        type_name: named.name().to_string(),
                        field_name: field_name.clone(),
                        field_type: field.type_ref().to_string(),
                    });
                }
                children.push(field.type_ref().innermost_named().clone());
            }
        }

        Ok(children)
    }

    /// Object types grouped by the name of each interface they declare, in
    /// map insertion order.
    fn index_implementations(
        types: &IndexMap<String, NamedType>,
    ) -> Result<IndexMap<String, Vec<NamedType>>, SchemaBuildError> {
        let mut implementations: IndexMap<String, Vec<NamedType>> = IndexMap::new();
        for named in types.values() {
            let Some(object_type) = named.as_object() else {
                continue;
            };
            for interface in object_type.interfaces() {
                if interface.as_interface().is_none() {
                    return Err(SchemaBuildError::ImplementsNonInterfaceType {
                        type_name: object_type.name().to_string(),
                        non_interface_name: interface.name().to_string(),
                    });
                }
                implementations
                    .entry(interface.name().to_string())
                    .or_default()
                    .push(named.clone());
            }
        }
        Ok(implementations)
    }

    fn assert_interface_conformance(&self) -> Result<(), SchemaBuildError> {
        for named in self.types.values() {
            let Some(object_type) = named.as_object() else {
                continue;
            };
            for interface in object_type.interfaces() {
                if let Some(interface_type) = interface.as_interface() {
                    self.assert_object_implements_interface(object_type, interface_type)?;
                }
            }
        }
        Ok(())
    }

    fn assert_object_implements_interface(
        &self,
        object_type: &ObjectType,
        interface_type: &InterfaceType,
    ) -> Result<(), SchemaBuildError> {
        let object_fields = object_type.fields();
        for (field_name, interface_field) in interface_type.fields() {
            let Some(object_field) = object_fields.get(field_name) else {
                return Err(SchemaBuildError::MissingInterfaceField {
                    interface_name: interface_type.name().to_string(),
                    type_name: object_type.name().to_string(),
                    field_name: field_name.clone(),
                });
            };

            // The object's field type may be more specific than the
            // interface's (covariance), but no further.
            if !is_subtype_of(self, object_field.type_ref(), interface_field.type_ref())? {
                return Err(SchemaBuildError::InvalidInterfaceFieldType {
                    interface_name: interface_type.name().to_string(),
                    type_name: object_type.name().to_string(),
                    field_name: field_name.clone(),
                    expected_type: interface_field.type_ref().to_string(),
                    provided_type: object_field.type_ref().to_string(),
                });
            }

            // Argument types must match the interface exactly, not merely
            // be compatible.
            for (argument_name, interface_argument) in interface_field.arguments() {
                let Some(object_argument) = object_field.arguments().get(argument_name) else {
                    return Err(SchemaBuildError::MissingInterfaceFieldArgument {
                        interface_name: interface_type.name().to_string(),
                        type_name: object_type.name().to_string(),
                        field_name: field_name.clone(),
                        argument_name: argument_name.clone(),
                    });
                };
                if !is_equal_type(interface_argument.type_ref(), object_argument.type_ref()) {
                    return Err(SchemaBuildError::InvalidInterfaceFieldArgumentType {
                        interface_name: interface_type.name().to_string(),
                        type_name: object_type.name().to_string(),
                        field_name: field_name.clone(),
                        argument_name: argument_name.clone(),
                        expected_type: interface_argument.type_ref().to_string(),
                        provided_type: object_argument.type_ref().to_string(),
                    });
                }
            }

            // Extra arguments beyond the interface are fine as long as the
            // object does not make them required.
            for (argument_name, object_argument) in object_field.arguments() {
                if interface_field.arguments().contains_key(argument_name) {
                    continue;
                }
                if matches!(object_argument.type_ref(), TypeRef::NonNull(_)) {
                    return Err(SchemaBuildError::RequiredArgumentNotProvidedByInterface {
                        interface_name: interface_type.name().to_string(),
                        type_name: object_type.name().to_string(),
                        field_name: field_name.clone(),
                        argument_name: argument_name.clone(),
                        argument_type: object_argument.type_ref().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All named types in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NamedType)> {
        self.types.iter().map(|(name, named)| (name.as_str(), named))
    }

    /// The concrete types an abstract type can resolve to: a union's member
    /// list, or the object types implementing an interface, in
    /// first-encounter order. Empty for non-abstract types.
    pub fn get_possible_types<'a>(&'a self, abstract_type: &'a NamedType) -> &'a [NamedType] {
        if let Some(union_type) = abstract_type.as_union() {
            return union_type.members();
        }
        if let NamedType::Interface(interface_type) = abstract_type {
            return self
                .implementations
                .get(interface_type.name())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
        }
        &[]
    }

    /// Whether `possible_type` is one of `abstract_type`'s possible types.
    ///
    /// An abstract type with no possible types at all is a schema
    /// misconfiguration, reported as
    /// [`NoPossibleTypes`](SchemaBuildError::NoPossibleTypes). The name set
    /// is computed once per abstract type and cached.
    pub fn is_possible_type(
        &self,
        abstract_type: &NamedType,
        possible_type: &NamedType,
    ) -> Result<bool, SchemaBuildError> {
        {
            let cache = self
                .possible_type_names
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(names) = cache.get(abstract_type.name()) {
                return Ok(names.contains(possible_type.name()));
            }
        }

        let possible_types = self.get_possible_types(abstract_type);
        if possible_types.is_empty() {
            return Err(SchemaBuildError::NoPossibleTypes {
                abstract_type_name: abstract_type.name().to_string(),
            });
        }
        let names: HashSet<String> = possible_types
            .iter()
            .map(|named| named.name().to_string())
            .collect();
        let contained = names.contains(possible_type.name());

        let mut cache = self
            .possible_type_names
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        cache.entry(abstract_type.name().to_string()).or_insert(names);
        Ok(contained)
    }
}
