use pretty_assertions::assert_eq;
use relata_core::schema::app::{Field, Model};
use relata_core::schema::db::SqlType;
use relata_core::schema::*;
use relata_core::stmt::Type;
use std_util::prelude::*;

const ORDER: EntityId = EntityId(0);
const LINE_ITEM: EntityId = EntityId(1);
const TAG: EntityId = EntityId(2);
const LABEL: EntityId = EntityId(3);
const CUSTOMER: EntityId = EntityId(4);
const PRODUCT: EntityId = EntityId(5);

/// Schema:
///   PurchaseOrder {
///     id, lines: [LineItem], tags: {String: Tag}, labels: Set<Label>,
///     customer: Ref<Customer>, favourites: [Ref<Product>], note: LineItem
///   }
///   LineItem { id, product }
///   Tag { id: String }
///   Label { text }        (no id)
///   Customer { id: Uuid }
///   Product { id }
fn context() -> MappingContext {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_ok!(MappingContext::builder()
        .model(
            Model::new("PurchaseOrder")
                .field(Field::new("id", Type::I64).id())
                .field(Field::new("lines", Type::list(Type::model("LineItem"))))
                .field(Field::new("tags", Type::map(Type::String, Type::model("Tag"))))
                .field(Field::new("labels", Type::set(Type::model("Label"))))
                .field(Field::new("customer", Type::reference("Customer")).nullable())
                .field(Field::new("favourites", Type::list(Type::reference("Product"))))
                .field(Field::new("note", Type::model("LineItem")).nullable()),
        )
        .model(
            Model::new("LineItem")
                .field(Field::new("id", Type::I64).id())
                .field(Field::new("product", Type::String)),
        )
        .model(Model::new("Tag").field(Field::new("id", Type::String).id()))
        .model(Model::new("Label").field(Field::new("text", Type::String)))
        .model(Model::new("Customer").field(Field::new("id", Type::Uuid).id()))
        .model(Model::new("Product").field(Field::new("id", Type::I32).id()))
        .build())
}

fn property<'a>(cx: &'a MappingContext, name: &str) -> &'a RelationalProperty {
    cx.entity(ORDER).property_by_name(name).unwrap()
}

#[test]
fn list_of_entities_is_qualified_and_ordered() {
    let cx = context();
    let lines = property(&cx, "lines");

    assert!(lines.is_entity());
    assert!(lines.is_collection_like());
    assert!(lines.is_qualified());
    assert!(lines.is_ordered());
    assert!(!lines.is_reference());
    assert_eq!(lines.reverse_column_name(), "purchase_order");
    assert_eq!(lines.key_column(), Some("purchase_order_key"));
    assert_eq!(lines.qualifier_column_type(), Some(&Type::I32));
    assert_eq!(lines.column_type(), &Type::I64);
    assert_eq!(lines.sql_type(), SqlType::BIGINT);
    assert_eq!(lines.target(), Some(LINE_ITEM));
}

#[test]
fn map_of_entities_is_qualified_by_key() {
    let cx = context();
    let tags = property(&cx, "tags");

    assert!(tags.is_map());
    assert!(tags.is_qualified());
    assert!(!tags.is_ordered());
    assert_eq!(tags.component_ty(), Some(&Type::String));
    assert_eq!(tags.map_value_ty(), Some(&Type::model("Tag")));
    assert_eq!(tags.key_column(), Some("purchase_order_key"));
    assert_eq!(tags.qualifier_column_type(), Some(&Type::String));
    assert_eq!(tags.target(), Some(TAG));
}

#[test]
fn set_of_entities_is_not_qualified() {
    let cx = context();
    let labels = property(&cx, "labels");

    assert!(labels.is_entity());
    assert!(labels.is_collection_like());
    assert!(!labels.is_qualified());
    assert!(!labels.is_ordered());
    assert_none!(labels.key_column());
    assert_none!(labels.qualifier_column_type());

    // Label has no id, so there is no id column type to borrow
    assert_eq!(labels.column_type(), &Type::model("Label"));
    assert_eq!(labels.sql_type(), SqlType::UNKNOWN);
    assert_eq!(labels.target(), Some(LABEL));
}

#[test]
fn single_reference_is_stored_as_target_id() {
    let cx = context();
    let customer = property(&cx, "customer");

    assert!(customer.is_reference());
    assert!(!customer.is_entity());
    assert!(!customer.is_qualified());
    assert_eq!(customer.column_type(), &Type::Uuid);
    assert_eq!(customer.sql_type(), SqlType::OTHER);

    let column = cx.entity(ORDER).columns().column("customer").unwrap();
    assert_eq!(column.kind, ColumnKind::Reference(CUSTOMER));
    assert!(column.nullable);
}

#[test]
fn list_of_references_is_qualified_reference() {
    let cx = context();
    let favourites = property(&cx, "favourites");

    assert!(favourites.is_reference());
    assert!(favourites.is_qualified());
    assert!(favourites.is_ordered());
    assert_eq!(favourites.column_type(), &Type::I32);
    assert_eq!(favourites.key_column(), Some("purchase_order_key"));

    let child = cx.entity(ORDER).columns().child("favourites").unwrap();
    assert_eq!(child.table, "purchase_order_favourites");
    assert_eq!(
        child.target,
        ChildTarget::Reference {
            target: PRODUCT,
            column: "favourites".to_string(),
        }
    );
    assert!(child.ordered);
}

#[test]
fn single_entity_is_a_child_without_key() {
    let cx = context();
    let note = property(&cx, "note");

    assert!(note.is_entity());
    assert!(!note.is_qualified());
    assert_none!(note.key_column());
    assert_eq!(note.column_type(), &Type::I64);
}

#[test]
fn relations_live_outside_the_owner_table() {
    let cx = context();
    let columns = cx.entity(ORDER).columns();

    assert_eq!(
        columns.column_names().collect::<Vec<_>>(),
        ["id", "customer"]
    );

    let paths: Vec<_> = columns
        .children
        .iter()
        .map(|child| (child.path.dot_path(), &child.table[..]))
        .collect();

    assert_eq!(
        paths,
        [
            ("lines", "line_item"),
            ("tags", "tag"),
            ("labels", "label"),
            ("favourites", "purchase_order_favourites"),
            ("note", "line_item"),
        ]
    );

    let lines = columns.child("lines").unwrap();
    assert_eq!(lines.target, ChildTarget::Entity(LINE_ITEM));
    assert_eq!(lines.reverse_column, "purchase_order");
    assert_eq!(lines.key_column.as_deref(), Some("purchase_order_key"));
    assert_eq!(lines.key_ty, Some(Type::I32));
}

#[test]
fn explicit_reverse_and_key_columns() {
    let _ = env_logger::builder().is_test(true).try_init();

    let cx = assert_ok!(MappingContext::builder()
        .model(
            Model::new("PurchaseOrder")
                .field(Field::new("id", Type::I64).id())
                .field(
                    Field::new("lines", Type::list(Type::model("LineItem")))
                        .reverse_column("order_id")
                        .key_column("position"),
                ),
        )
        .model(Model::new("LineItem").field(Field::new("product", Type::String)))
        .build());

    let lines = cx.entity(ORDER).property_by_name("lines").unwrap();
    assert_eq!(lines.reverse_column_name(), "order_id");
    assert_eq!(lines.key_column(), Some("position"));
}

#[test]
fn default_key_column_follows_reverse_column_override() {
    let _ = env_logger::builder().is_test(true).try_init();

    let cx = assert_ok!(MappingContext::builder()
        .model(
            Model::new("PurchaseOrder")
                .field(Field::new("id", Type::I64).id())
                .field(
                    Field::new("lines", Type::list(Type::model("LineItem")))
                        .reverse_column("order_id"),
                ),
        )
        .model(Model::new("LineItem").field(Field::new("product", Type::String)))
        .build());

    let lines = cx.entity(ORDER).property_by_name("lines").unwrap();
    assert_eq!(lines.key_column(), Some("order_id_key"));
}

#[test]
fn self_referencing_children() {
    let _ = env_logger::builder().is_test(true).try_init();

    let cx = assert_ok!(MappingContext::builder()
        .model(
            Model::new("Category")
                .field(Field::new("id", Type::I64).id())
                .field(Field::new("children", Type::list(Type::model("Category")))),
        )
        .build());

    let children = cx.entity(EntityId(0)).columns().child("children").unwrap();
    assert_eq!(children.table, "category");
    assert_eq!(children.reverse_column, "category");
    assert_eq!(children.key_column.as_deref(), Some("category_key"));
}
