use crate::initializer::DineInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum MenuItem {
    #[sea_orm(iden = "menu_items")]
    Table,
    Id,
    Name,
    Price,
    Description,
}

impl DineInitializer for MenuItem {
    fn order(&self) -> i32 {
        super::INIT_MENU_ITEM_ORDER
    }

    fn name(&self) -> &'static str {
        "menu_items"
    }

    fn to_create_table_stmt(&self, _: DatabaseBackend) -> TableCreateStatement {
        Table::create()
            .table(MenuItem::Table)
            .if_not_exists()
            .col(pk_auto(MenuItem::Id))
            .col(
                ColumnDef::new(MenuItem::Name)
                    .string()
                    .not_null()
                    .comment("Dish name"),
            )
            .col(
                ColumnDef::new(MenuItem::Price)
                    .double()
                    .not_null()
                    .default(0.0)
                    .comment("Unit price"),
            )
            .col(ColumnDef::new(MenuItem::Description).text().comment("Description"))
            .to_owned()
    }
}
