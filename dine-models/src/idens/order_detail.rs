use super::{menu_item::MenuItem, order::Order};
use crate::initializer::DineInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum OrderDetail {
    #[sea_orm(iden = "order_details")]
    Table,
    Id,
    OrderId,
    MenuItemId,
    Amount,
}

impl DineInitializer for OrderDetail {
    fn order(&self) -> i32 {
        super::INIT_ORDER_DETAIL_ORDER
    }

    fn name(&self) -> &'static str {
        "order_details"
    }

    fn to_create_table_stmt(&self, _: DatabaseBackend) -> TableCreateStatement {
        Table::create()
            .table(OrderDetail::Table)
            .if_not_exists()
            .col(pk_auto(OrderDetail::Id))
            .col(
                ColumnDef::new(OrderDetail::OrderId)
                    .integer()
                    .not_null()
                    .comment("FK: orders.id"),
            )
            .col(
                ColumnDef::new(OrderDetail::MenuItemId)
                    .integer()
                    .not_null()
                    .comment("FK: menu_items.id"),
            )
            .col(
                ColumnDef::new(OrderDetail::Amount)
                    .integer()
                    .not_null()
                    .comment("Quantity"),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_order_detail_order")
                    .from(OrderDetail::Table, OrderDetail::OrderId)
                    .to(Order::Table, Order::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_order_detail_menu_item")
                    .from(OrderDetail::Table, OrderDetail::MenuItemId)
                    .to(MenuItem::Table, MenuItem::Id),
            )
            .to_owned()
    }

    // Lookup index for the merge-on-create path. Not unique: uniqueness of
    // (order_id, menu_item_id) is kept by the controller.
    fn to_create_indexes_stmt(&self, _: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
        Some(vec![Index::create()
            .name("idx_order_detail_order_menu_item")
            .table(OrderDetail::Table)
            .col(OrderDetail::OrderId)
            .col(OrderDetail::MenuItemId)
            .if_not_exists()
            .to_owned()])
    }
}
