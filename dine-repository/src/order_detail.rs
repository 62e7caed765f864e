use dine_error::StorageResult;
use dine_models::{
    domain::prelude::{OrderDetailPageParams, PageResult},
    entities::prelude::{OrderDetail, OrderDetailActiveModel, OrderDetailColumn, OrderDetailModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

/// Repository for order details (line items)
pub struct OrderDetailRepository;

impl OrderDetailRepository {
    /// Insert a new order detail
    pub async fn create<C>(
        detail: OrderDetailActiveModel,
        db: &C,
    ) -> StorageResult<OrderDetailModel>
    where
        C: ConnectionTrait,
    {
        Ok(detail.insert(db).await?)
    }

    /// Persist the changed columns of an existing order detail
    pub async fn update<C>(
        detail: OrderDetailActiveModel,
        db: &C,
    ) -> StorageResult<OrderDetailModel>
    where
        C: ConnectionTrait,
    {
        Ok(detail.update(db).await?)
    }

    /// Delete order detail by ID, returning the number of removed rows
    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(OrderDetail::delete_by_id(id).exec(db).await?.rows_affected)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<OrderDetailModel>>
    where
        C: ConnectionTrait,
    {
        Ok(OrderDetail::find_by_id(id).one(db).await?)
    }

    /// All order details, by ascending id
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<OrderDetailModel>>
    where
        C: ConnectionTrait,
    {
        Ok(OrderDetail::find()
            .order_by_asc(OrderDetailColumn::Id)
            .all(db)
            .await?)
    }

    /// The line of `order_id` holding `menu_item_id`, if any
    pub async fn find_by_order_and_menu_item<C>(
        order_id: i32,
        menu_item_id: i32,
        db: &C,
    ) -> StorageResult<Option<OrderDetailModel>>
    where
        C: ConnectionTrait,
    {
        Ok(OrderDetail::find()
            .filter(OrderDetailColumn::OrderId.eq(order_id))
            .filter(OrderDetailColumn::MenuItemId.eq(menu_item_id))
            .order_by_asc(OrderDetailColumn::Id)
            .one(db)
            .await?)
    }

    /// Paginate order details, optionally restricted to one order
    pub async fn page<C>(
        params: OrderDetailPageParams,
        db: &C,
    ) -> StorageResult<PageResult<OrderDetailModel>>
    where
        C: ConnectionTrait,
    {
        let query = OrderDetail::find()
            .apply_if(params.order_id, |q, order_id| {
                q.filter(OrderDetailColumn::OrderId.eq(order_id))
            })
            .order_by(OrderDetailColumn::Id, Order::Asc);

        let page = params.page.page.unwrap_or(1).max(1);
        let page_size = params.page.page_size.unwrap_or(10).max(1);
        let total = query.clone().count(db).await?;
        let records = query
            .paginate(db, page_size as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(PageResult {
            records,
            total,
            pages: ((total as f64) / (page_size as f64)).ceil() as u32,
            page,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dine_models::{
        domain::prelude::PageParams,
        entities::prelude::{MenuItemActiveModel, OrderActiveModel},
        settings::{Db, Inner, Settings, Sqlite},
        DbManager,
    };
    use dine_storage::DineDbManager;
    use sea_orm::{DatabaseConnection, Set};

    async fn setup() -> DatabaseConnection {
        let settings = Settings::from(Inner {
            db: Db {
                sqlite: Sqlite {
                    path: ":memory:".into(),
                    ..Default::default()
                },
            },
            ..Default::default()
        });
        let db = DineDbManager::init(&settings)
            .await
            .unwrap()
            .get_connection()
            .unwrap();
        for name in ["alice", "bob"] {
            OrderActiveModel {
                customer_name: Set(name.into()),
                ..Default::default()
            }
            .insert(&db)
            .await
            .unwrap();
        }
        for name in ["soup", "salad", "bread"] {
            MenuItemActiveModel {
                name: Set(name.into()),
                price: Set(4.5),
                ..Default::default()
            }
            .insert(&db)
            .await
            .unwrap();
        }
        db
    }

    fn line(order_id: i32, menu_item_id: i32, amount: i32) -> OrderDetailActiveModel {
        OrderDetailActiveModel {
            order_id: Set(order_id),
            menu_item_id: Set(menu_item_id),
            amount: Set(amount),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn finds_line_by_order_and_menu_item() {
        let db = setup().await;
        let created = OrderDetailRepository::create(line(1, 2, 3), &db).await.unwrap();

        let found = OrderDetailRepository::find_by_order_and_menu_item(1, 2, &db)
            .await
            .unwrap();
        assert_eq!(found, Some(created));
        assert!(OrderDetailRepository::find_by_order_and_menu_item(2, 2, &db)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_reports_affected_rows() {
        let db = setup().await;
        let created = OrderDetailRepository::create(line(1, 1, 1), &db).await.unwrap();

        assert_eq!(OrderDetailRepository::delete(created.id, &db).await.unwrap(), 1);
        assert_eq!(OrderDetailRepository::delete(created.id, &db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn page_filters_by_order() {
        let db = setup().await;
        for menu_item_id in 1..=3 {
            OrderDetailRepository::create(line(1, menu_item_id, 1), &db)
                .await
                .unwrap();
        }
        OrderDetailRepository::create(line(2, 1, 1), &db).await.unwrap();

        let result = OrderDetailRepository::page(
            OrderDetailPageParams {
                order_id: Some(1),
                page: PageParams {
                    page: Some(2),
                    page_size: Some(2),
                },
            },
            &db,
        )
        .await
        .unwrap();

        assert_eq!(result.total, 3);
        assert_eq!(result.pages, 2);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].menu_item_id, 3);
    }
}
