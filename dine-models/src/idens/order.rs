use crate::initializer::DineInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    CustomerName,
    Description,
    CreatedAt,
}

impl DineInitializer for Order {
    fn order(&self) -> i32 {
        super::INIT_ORDER_ORDER
    }

    fn name(&self) -> &'static str {
        "orders"
    }

    fn to_create_table_stmt(&self, _: DatabaseBackend) -> TableCreateStatement {
        Table::create()
            .table(Order::Table)
            .if_not_exists()
            .col(pk_auto(Order::Id))
            .col(
                ColumnDef::new(Order::CustomerName)
                    .string()
                    .not_null()
                    .comment("Customer name"),
            )
            .col(ColumnDef::new(Order::Description).text().comment("Description"))
            .col(
                ColumnDef::new(Order::CreatedAt)
                    .timestamp_with_time_zone()
                    .default(Expr::current_timestamp())
                    .comment("Creation time"),
            )
            .to_owned()
    }
}
