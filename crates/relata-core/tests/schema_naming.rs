use pretty_assertions::assert_eq;
use relata_core::schema::app::{Field, Model};
use relata_core::schema::*;
use relata_core::stmt::Type;
use std_util::prelude::*;

fn order() -> Model {
    Model::new("PurchaseOrder")
        .field(Field::new("id", Type::I64).id())
        .field(Field::new("orderDate", Type::Date))
        .field(Field::new("lines", Type::list(Type::model("LineItem"))))
        .field(Field::new("related", Type::set(Type::reference("PurchaseOrder"))))
}

fn line_item() -> Model {
    Model::new("LineItem").field(Field::new("productName", Type::String))
}

/// Upper-cases everything and links children through `<TABLE>_ID`.
#[derive(Debug)]
struct Shouting;

impl NamingStrategy for Shouting {
    fn table_name(&self, entity_name: &str) -> String {
        std_util::str::upper_snake_case(entity_name)
    }

    fn column_name(&self, property_name: &str) -> String {
        std_util::str::upper_snake_case(property_name)
    }

    fn reverse_column_name(&self, owner_table: &str) -> String {
        format!("{owner_table}_ID")
    }

    fn key_column(&self, reverse_column: &str) -> String {
        format!("{reverse_column}_IDX")
    }
}

#[test]
fn schema_qualifies_table_names() {
    let _ = env_logger::builder().is_test(true).try_init();

    let cx = assert_ok!(MappingContext::builder()
        .schema("sales")
        .model(order())
        .model(line_item())
        .build());

    let order = cx.entity_by_name("PurchaseOrder").unwrap();
    assert_eq!(cx.naming_strategy().schema(), "sales");
    assert_eq!(order.table_name, "purchase_order");
    assert_eq!(order.qualified_table_name, "sales.purchase_order");

    let children = &order.columns().children;
    assert_eq!(children[0].table, "sales.line_item");
    assert_eq!(children[1].table, "sales.purchase_order_related");
}

#[test]
fn custom_naming_strategy() {
    let _ = env_logger::builder().is_test(true).try_init();

    let cx = assert_ok!(MappingContext::builder()
        .naming_strategy(Shouting)
        .model(order())
        .model(line_item())
        .build());

    let order = cx.entity_by_name("PurchaseOrder").unwrap();
    assert_eq!(order.table_name, "PURCHASE_ORDER");
    assert_eq!(
        order.columns().column_names().collect::<Vec<_>>(),
        ["ID", "ORDER_DATE"]
    );

    let lines = order.property_by_name("lines").unwrap();
    assert_eq!(lines.reverse_column_name(), "PURCHASE_ORDER_ID");
    assert_eq!(lines.key_column(), Some("PURCHASE_ORDER_ID_IDX"));

    let related = order.columns().child("related").unwrap();
    assert_eq!(related.table, "PURCHASE_ORDER_RELATED");
    assert_none!(&related.key_column);

    assert_eq!(
        cx.entity_by_name("LineItem")
            .unwrap()
            .columns()
            .column_names()
            .collect::<Vec<_>>(),
        ["PRODUCT_NAME"]
    );
}

#[test]
fn explicit_names_bypass_the_strategy() {
    let _ = env_logger::builder().is_test(true).try_init();

    let cx = assert_ok!(MappingContext::builder()
        .naming_strategy(Shouting)
        .table_name_prefix("t_")
        .model(
            Model::new("Person")
                .table("people")
                .field(Field::new("id", Type::I64).id().column("pk")),
        )
        .build());

    let person = cx.entity(EntityId(0));
    assert_eq!(person.table_name, "t_people");
    assert_eq!(person.columns().column_names().collect::<Vec<_>>(), ["pk"]);
}
