//! Tests for default-tree synthesis from schema nodes

use nbt_schema::{SchemaNode, SchemaOptions, Tag, Value, verify, verify_all};

#[test]
fn test_scalar_defaults_are_zero() {
    assert_eq!(SchemaNode::byte("a").build_default_tree(), Value::Byte(0));
    assert_eq!(SchemaNode::short("a").build_default_tree(), Value::Short(0));
    assert_eq!(SchemaNode::int("a").build_default_tree(), Value::Int(0));
    assert_eq!(SchemaNode::long("a").build_default_tree(), Value::Long(0));
    assert_eq!(SchemaNode::float("a").build_default_tree(), Value::Float(0.0));
    assert_eq!(
        SchemaNode::double("a").build_default_tree(),
        Value::Double(0.0)
    );
    assert_eq!(
        SchemaNode::string("a").build_default_tree(),
        Value::String(String::new())
    );
}

#[test]
fn test_array_defaults_are_zero_filled_to_expected_length() {
    let value = SchemaNode::double_array("pos", 3).build_default_tree();
    assert_eq!(value.as_double_array().unwrap().as_slice(), &[0.0, 0.0, 0.0]);

    let value = SchemaNode::byte_array("data", 4).build_default_tree();
    assert_eq!(value.as_byte_array().unwrap().as_slice(), &[0, 0, 0, 0]);

    let value = SchemaNode::int_array("ids", 2).build_default_tree();
    assert_eq!(value.as_int_array().unwrap().as_slice(), &[0, 0]);

    let value = SchemaNode::long_array("seeds", 1).build_default_tree();
    assert_eq!(value.as_long_array().unwrap().as_slice(), &[0]);
}

#[test]
fn test_unconstrained_array_defaults_to_empty() {
    let value = SchemaNode::int_array("ids", 0).build_default_tree();
    assert!(value.as_int_array().unwrap().is_empty());
}

#[test]
fn test_list_defaults_to_empty_with_element_tag() {
    let schema = SchemaNode::list("items", SchemaNode::int(""));
    let value = schema.build_default_tree();
    let list = value.as_list().unwrap();
    assert!(list.is_empty());
    assert_eq!(list.element_tag(), Tag::Int);
}

#[test]
fn test_required_nonempty_list_gets_one_default_element() {
    let schema = SchemaNode::list("items", SchemaNode::string(""))
        .with_options(SchemaOptions::new().require_nonempty())
        .unwrap();
    let value = schema.build_default_tree();
    let list = value.as_list().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap().as_str().unwrap(), "");
}

#[test]
fn test_compound_default_has_one_entry_per_field() {
    let schema = SchemaNode::compound(
        "entity",
        vec![
            SchemaNode::string("id"),
            SchemaNode::double_array("pos", 3),
            SchemaNode::short("hp"),
        ],
    )
    .unwrap();

    let value = schema.build_default_tree();
    let compound = value.as_compound().unwrap();
    assert_eq!(compound.len(), 3);
    assert_eq!(compound.get("id").unwrap().as_str().unwrap(), "");
    assert_eq!(
        compound.get("pos").unwrap().as_double_array().unwrap().len(),
        3
    );
    assert_eq!(compound.get("hp"), Some(&Value::Short(0)));

    // field order is preserved
    let keys: Vec<&str> = compound.keys().collect();
    assert_eq!(keys, vec!["id", "pos", "hp"]);
}

#[test]
fn test_optional_fields_are_still_built() {
    let schema = SchemaNode::compound(
        "root",
        vec![
            SchemaNode::int("ttl")
                .with_options(SchemaOptions::new().optional())
                .unwrap(),
        ],
    )
    .unwrap();
    let value = schema.build_default_tree();
    assert_eq!(value.get("ttl"), Some(&Value::Int(0)));
}

fn deep_schema() -> SchemaNode {
    SchemaNode::compound(
        "level",
        vec![
            SchemaNode::string("name"),
            SchemaNode::double_array("spawn", 3),
            SchemaNode::byte_array("unconstrained", 0),
            SchemaNode::list(
                "entities",
                SchemaNode::compound(
                    "",
                    vec![
                        SchemaNode::string("id"),
                        SchemaNode::double_array("pos", 3),
                        SchemaNode::list("tags", SchemaNode::string("")),
                    ],
                )
                .unwrap(),
            )
            .with_options(SchemaOptions::new().require_nonempty())
            .unwrap(),
            SchemaNode::compound(
                "meta",
                vec![SchemaNode::long("seed"), SchemaNode::byte("hardcore")],
            )
            .unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn test_default_tree_satisfies_its_own_schema() {
    let schema = deep_schema();
    let value = schema.build_default_tree();
    assert!(verify(&value, &schema).is_ok());
    assert!(verify_all(&value, &schema).is_empty());
}

#[test]
fn test_build_is_pure() {
    let schema = deep_schema();
    assert_eq!(schema.build_default_tree(), schema.build_default_tree());
}
