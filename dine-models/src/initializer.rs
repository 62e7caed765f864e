//! Ordered table initializers consumed by the schema migration.

use crate::idens;
use sea_orm::{
    sea_query::{Alias, IndexCreateStatement, Table, TableCreateStatement, TableDropStatement},
    DatabaseBackend,
};

pub trait DineInitializer: Send + Sync {
    /// Creation order; referenced tables come first.
    fn order(&self) -> i32;

    fn name(&self) -> &'static str;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_create_indexes_stmt(
        &self,
        _backend: DatabaseBackend,
    ) -> Option<Vec<IndexCreateStatement>> {
        None
    }

    fn to_drop_table_stmt(&self, _backend: DatabaseBackend) -> TableDropStatement {
        Table::drop()
            .table(Alias::new(self.name()))
            .if_exists()
            .to_owned()
    }
}

/// All table initializers sorted by creation order.
pub fn initializers() -> Vec<Box<dyn DineInitializer>> {
    let mut initializers: Vec<Box<dyn DineInitializer>> = vec![
        Box::new(idens::order_detail::OrderDetail::Table),
        Box::new(idens::menu_item::MenuItem::Table),
        Box::new(idens::order::Order::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}
