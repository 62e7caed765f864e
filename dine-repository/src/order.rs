use dine_error::StorageResult;
use dine_models::entities::prelude::Order;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

/// Read-only access to orders
pub struct OrderRepository;

impl OrderRepository {
    /// Check if order exists by ID
    pub async fn exists_by_id<C>(id: i32, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        Ok(Order::find_by_id(id).count(db).await? > 0)
    }
}
