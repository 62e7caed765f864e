use dine_error::StorageResult;
use dine_models::entities::prelude::MenuItem;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

/// Read-only access to the menu catalog
pub struct MenuItemRepository;

impl MenuItemRepository {
    pub async fn exists_by_id<C>(id: i32, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        Ok(MenuItem::find_by_id(id).count(db).await? > 0)
    }
}
