use pretty_assertions::assert_eq;
use relata_core::schema::app::{Field, Model, OnEmpty};
use relata_core::schema::db::SqlType;
use relata_core::schema::*;
use relata_core::stmt::Type;
use std_util::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Schema:
///   Person { id, firstName, nickname?, version, scores: [[i32]], address: Address (embedded "home_") }
///   Address { street, city }
fn context() -> MappingContext {
    init_logging();

    assert_ok!(MappingContext::builder()
        .model(
            Model::new("Person")
                .field(Field::new("id", Type::I64).id())
                .field(Field::new("firstName", Type::String))
                .field(Field::new("nickname", Type::String).nullable())
                .field(Field::new("version", Type::I32).version())
                .field(Field::new("scores", Type::list(Type::list(Type::I32))))
                .field(Field::new("address", Type::model("Address")).embedded("home_")),
        )
        .model(
            Model::new("Address")
                .field(Field::new("street", Type::String))
                .field(Field::new("city", Type::String)),
        )
        .build())
}

#[test]
fn entity_names_and_lookup() {
    let cx = context();

    let person = cx.entity_by_name("Person").unwrap();
    assert_eq!(person.id, EntityId(0));
    assert_eq!(person.table_name, "person");
    assert_eq!(person.qualified_table_name, "person");
    assert!(person.has_id_property());
    assert_eq!(person.id_property().unwrap().name, "id");
    assert_eq!(person.version_property().unwrap().name, "version");

    let address = cx.entity(EntityId(1));
    assert_eq!(address.name, "Address");
    assert!(!address.has_id_property());
    assert_none!(cx.entity_by_name("Missing"));
    assert_none!(cx.get_entity(EntityId(7)));
}

#[test]
fn simple_property() {
    let cx = context();
    let person = cx.entity_by_name("Person").unwrap();
    let first_name = person.property_by_name("firstName").unwrap();

    assert_eq!(first_name.column_name(), "first_name");
    assert_eq!(first_name.column_type(), &Type::String);
    assert_eq!(first_name.sql_type(), SqlType::VARCHAR);
    assert_eq!(first_name.reverse_column_name(), "person");
    assert_none!(first_name.key_column());
    assert_none!(first_name.qualifier_column_type());
    assert!(!first_name.is_reference());
    assert!(!first_name.is_qualified());
    assert!(!first_name.is_ordered());
    assert!(!first_name.is_embedded());
    assert!(!first_name.is_entity());
    assert!(!first_name.is_nullable());
    assert_eq!(cx.owner_of(first_name).name, "Person");

    assert!(person.property_by_name("nickname").unwrap().is_nullable());
    assert!(person.property_by_name("id").unwrap().is_id_property());
    assert!(person
        .property_by_name("version")
        .unwrap()
        .is_version_property());
}

#[test]
fn nested_collections_collapse_to_one_dimension() {
    let cx = context();
    let scores = cx
        .entity_by_name("Person")
        .unwrap()
        .property_by_name("scores")
        .unwrap();

    assert!(scores.is_collection_like());
    assert_eq!(scores.actual_ty(), &Type::list(Type::I32));
    assert_eq!(scores.column_type(), &Type::array(Type::I32));
    assert_eq!(scores.sql_type(), SqlType::ARRAY);
    assert!(!scores.is_qualified());
    assert!(!scores.is_ordered());
    assert_none!(scores.key_column());
}

#[test]
fn simple_value_list_is_not_qualified() {
    init_logging();

    let mut builder = MappingContext::builder();
    builder.model(
        Model::new("Reading")
            .field(Field::new("id", Type::I64).id())
            .field(Field::new("samples", Type::list(Type::I32))),
    );

    let cx = assert_ok!(builder.build());
    let samples = cx
        .entity_by_name("Reading")
        .unwrap()
        .property_by_name("samples")
        .unwrap();

    assert!(samples.is_collection_like());
    assert!(!samples.is_qualified());
    assert!(!samples.is_ordered());
    assert_none!(samples.qualifier_column_type());
    assert_eq!(samples.column_type(), &Type::array(Type::I32));
}

#[test]
fn embedded_property() {
    let cx = context();
    let address = cx
        .entity_by_name("Person")
        .unwrap()
        .property_by_name("address")
        .unwrap();

    assert!(address.is_embedded());
    assert!(address.is_entity());
    assert!(!address.is_reference());
    assert_eq!(address.embedded_prefix(), Some("home_"));
    assert_eq!(address.column_type(), &Type::model("Address"));
    assert_eq!(address.target(), Some(EntityId(1)));
}

#[test]
fn columns_flatten_embedded_values() {
    let cx = context();
    let person = cx.entity_by_name("Person").unwrap();
    let columns = person.columns();

    assert_eq!(
        columns.column_names().collect::<Vec<_>>(),
        ["id", "first_name", "nickname", "version", "scores", "home_street", "home_city"]
    );

    assert_eq!(columns.id_column().unwrap().name, "id");
    assert_eq!(columns.column("version").unwrap().kind, ColumnKind::Version);
    assert_eq!(columns.column("first_name").unwrap().kind, ColumnKind::Scalar);

    let city = columns.column_for_path("address.city").unwrap();
    assert_eq!(city.name, "home_city");
    assert_eq!(city.path.len(), 2);
    assert!(city.nullable);
    assert!(columns.children.is_empty());
}

#[test]
fn embedded_use_empty_keeps_columns_required() {
    init_logging();

    let cx = assert_ok!(MappingContext::builder()
        .model(
            Model::new("Person")
                .field(Field::new("id", Type::I64).id())
                .field(
                    Field::new("address", Type::model("Address"))
                        .embedded_with("", OnEmpty::UseEmpty),
                ),
        )
        .model(
            Model::new("Address")
                .field(Field::new("street", Type::String))
                .field(Field::new("zip", Type::String).nullable()),
        )
        .build());

    let columns = cx.entity(EntityId(0)).columns();
    assert!(!columns.column("street").unwrap().nullable);
    assert!(columns.column("zip").unwrap().nullable);
}

#[test]
fn prefixes_accumulate_through_nested_embedding() {
    init_logging();

    let cx = assert_ok!(MappingContext::builder()
        .model(
            Model::new("Customer")
                .field(Field::new("id", Type::I64).id())
                .field(Field::new("contact", Type::model("Contact")).embedded("contact_")),
        )
        .model(
            Model::new("Contact")
                .field(Field::new("email", Type::String))
                .field(Field::new("address", Type::model("Address")).embedded("addr_")),
        )
        .model(Model::new("Address").field(Field::new("city", Type::String)))
        .build());

    let columns = cx.entity(EntityId(0)).columns();
    assert_eq!(
        columns.column_names().collect::<Vec<_>>(),
        ["id", "contact_email", "contact_addr_city"]
    );

    // Embedded types still get a layout of their own
    assert_eq!(
        cx.entity(EntityId(1)).columns().column_names().collect::<Vec<_>>(),
        ["email", "addr_city"]
    );
}

#[test]
fn explicit_column_name() {
    init_logging();

    let cx = assert_ok!(MappingContext::builder()
        .model(
            Model::new("Person")
                .table("people")
                .field(Field::new("id", Type::Uuid).id().column("person_id"))
                .field(Field::new("firstName", Type::String).column("given_name")),
        )
        .build());

    let person = cx.entity(EntityId(0));
    assert_eq!(person.table_name, "people");
    assert_eq!(person.id_property().unwrap().column_name(), "person_id");
    assert_eq!(person.id_property().unwrap().sql_type(), SqlType::OTHER);
    assert_eq!(
        person.property_by_name("firstName").unwrap().column_name(),
        "given_name"
    );
}

#[test]
fn resolve_dotted_paths() {
    let cx = context();

    let city = cx.resolve_path(EntityId(0), "address.city").unwrap();
    assert_eq!(city.name, "city");
    assert_eq!(cx.owner_of(city).name, "Address");

    assert_eq!(cx.resolve_path(EntityId(0), "firstName").unwrap().name, "firstName");
    assert_none!(cx.resolve_path(EntityId(0), "firstName.length"));
    assert_none!(cx.resolve_path(EntityId(0), "address.country"));
}

#[test]
fn property_lookup_by_id() {
    let cx = context();
    let person = cx.entity(EntityId(0));

    for property in person.properties() {
        assert_eq!(cx.property(property.id), property);
        assert_eq!(property.owner(), person.id);
    }
}

#[test]
fn building_twice_is_deterministic() {
    init_logging();

    let mut builder = MappingContext::builder();
    builder
        .model(
            Model::new("Person")
                .field(Field::new("id", Type::I64).id())
                .field(Field::new("tags", Type::set(Type::String))),
        )
        .table_name_prefix("app_");

    let first = assert_ok!(builder.build());
    let second = assert_ok!(builder.build());

    assert_eq!(
        first.entities().collect::<Vec<_>>(),
        second.entities().collect::<Vec<_>>()
    );
    assert_eq!(first.entity(EntityId(0)).table_name, "app_person");
}

#[test]
fn hand_built_descriptive_types() {
    init_logging();

    let mut builder = MappingContext::builder();
    builder.model(
        Model::new("Invoice")
            .field(Field::new("id", Type::I64).id())
            .field(Field::new("total", Type::Decimal))
            .field(Field::new("issuedOn", Type::Date))
            .field(Field::new("sentAt", Type::ZonedDateTime))
            .field(Field::new("status", Type::Enum("InvoiceStatus".into()))),
    );

    let cx = assert_ok!(builder.build());
    let invoice = cx.entity_by_name("Invoice").unwrap();

    let types = ["total", "issuedOn", "sentAt", "status"].map(|name| {
        let property = invoice.property_by_name(name).unwrap();
        (property.column_type().clone(), property.sql_type())
    });

    assert_eq!(
        types,
        [
            (Type::Decimal, SqlType::DECIMAL),
            (Type::Date, SqlType::DATE),
            (Type::String, SqlType::VARCHAR),
            (Type::String, SqlType::VARCHAR),
        ]
    );
}
