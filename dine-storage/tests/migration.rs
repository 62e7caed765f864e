use dine_models::{
    settings::{Db, Inner, Settings, Sqlite},
    DbManager,
};
use dine_storage::DineDbManager;
use sea_orm::{ConnectionTrait, DbBackend, Statement};

fn memory_settings() -> Settings {
    Settings::from(Inner {
        db: Db {
            sqlite: Sqlite {
                path: ":memory:".into(),
                ..Default::default()
            },
        },
        ..Default::default()
    })
}

#[tokio::test]
async fn migration_creates_all_tables() {
    let manager = DineDbManager::init(&memory_settings()).await.unwrap();
    let db = manager.get_connection().unwrap();

    let rows = db
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        ))
        .await
        .unwrap();
    let tables: Vec<String> = rows
        .iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect();

    for table in ["orders", "menu_items", "order_details"] {
        assert!(tables.iter().any(|t| t == table), "missing table {table}");
    }

    manager.close().await.unwrap();
}

#[tokio::test]
async fn lookup_index_is_not_unique() {
    let manager = DineDbManager::init(&memory_settings()).await.unwrap();
    let db = manager.get_connection().unwrap();

    let row = db
        .query_one(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT sql FROM sqlite_master WHERE type = 'index' \
             AND name = 'idx_order_detail_order_menu_item'",
        ))
        .await
        .unwrap()
        .expect("lookup index exists");
    let sql: String = row.try_get("", "sql").unwrap();
    assert!(!sql.to_uppercase().contains("UNIQUE"));
}
