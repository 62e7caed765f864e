#![allow(dead_code)]

use dine_models::{
    entities::prelude::{MenuItemActiveModel, OrderActiveModel},
    settings::{Db, Inner, Settings, Sqlite},
    DbManager,
};
use dine_storage::DineDbManager;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub const ORDER_ID: i32 = 1;
pub const OTHER_ORDER_ID: i32 = 2;
pub const MENU_ITEM_ID: i32 = 5;
pub const OTHER_MENU_ITEM_ID: i32 = 3;
pub const MISSING_ID: i32 = 999;

/// Fresh in-memory database holding two orders and five menu items.
pub async fn setup_db() -> DatabaseConnection {
    setup_db_with(Sqlite {
        path: ":memory:".into(),
        ..Default::default()
    })
    .await
}

/// Migrated and seeded database at the location described by `sqlite`.
pub async fn setup_db_with(sqlite: Sqlite) -> DatabaseConnection {
    let settings = Settings::from(Inner {
        db: Db { sqlite },
        ..Default::default()
    });
    let db = DineDbManager::init(&settings)
        .await
        .expect("database init")
        .get_connection()
        .expect("database connection");

    for customer in ["alice", "bob"] {
        OrderActiveModel {
            customer_name: Set(customer.into()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("seed order");
    }
    for (name, price) in [
        ("tomato soup", 5.5),
        ("caesar salad", 8.0),
        ("garlic bread", 3.25),
        ("lemonade", 2.0),
        ("margherita", 11.0),
    ] {
        MenuItemActiveModel {
            name: Set(name.into()),
            price: Set(price),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("seed menu item");
    }
    db
}
