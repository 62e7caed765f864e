use dine_error::{storage::StorageError, web::WebError, WebResult};
use dine_models::{
    domain::prelude::{NewOrderDetail, OrderDetailPageParams, PageResult, UpdateOrderDetail},
    entities::prelude::OrderDetailModel,
};
use dine_repository::{MenuItemRepository, OrderDetailRepository, OrderRepository};
use sea_orm::{DatabaseTransaction, IntoActiveModel, Set};
use tracing::{debug, info, instrument};

fn detail_not_found(id: i32) -> WebError {
    WebError::NotFound(format!("Order detail with id {id} not found"))
}

async fn commit(txn: DatabaseTransaction) -> WebResult<()> {
    txn.commit().await.map_err(StorageError::from)?;
    Ok(())
}

/// Add a menu item to an order.
///
/// Both the order and the menu item must exist. If the order already holds
/// the menu item, `amount` is added to that line and the updated line is
/// returned; otherwise a new line is inserted.
#[instrument(name = "order-detail-create", skip(txn))]
pub async fn create(
    txn: DatabaseTransaction,
    request: NewOrderDetail,
) -> WebResult<OrderDetailModel> {
    if !OrderRepository::exists_by_id(request.order_id, &txn).await? {
        return Err(WebError::NotFound(format!(
            "Order with id {} not found",
            request.order_id
        )));
    }

    if !MenuItemRepository::exists_by_id(request.menu_item_id, &txn).await? {
        return Err(WebError::NotFound(format!(
            "Menu item with id {} not found",
            request.menu_item_id
        )));
    }

    let existing = OrderDetailRepository::find_by_order_and_menu_item(
        request.order_id,
        request.menu_item_id,
        &txn,
    )
    .await?;

    let detail = match existing {
        Some(existing) => {
            let amount = existing.amount.checked_add(request.amount).ok_or_else(|| {
                WebError::BadRequest(format!(
                    "amount overflow: {} + {}",
                    existing.amount, request.amount
                ))
            })?;
            info!(id = existing.id, amount, "merging into existing order detail");
            let mut active = existing.into_active_model();
            active.amount = Set(amount);
            OrderDetailRepository::update(active, &txn).await?
        }
        None => OrderDetailRepository::create(request.into_active_model(), &txn).await?,
    };

    commit(txn).await?;
    Ok(detail)
}

/// All order details.
pub async fn read_all(txn: DatabaseTransaction) -> WebResult<Vec<OrderDetailModel>> {
    let details = OrderDetailRepository::find_all(&txn).await?;
    commit(txn).await?;
    Ok(details)
}

/// One page of order details, optionally restricted to one order.
pub async fn page(
    txn: DatabaseTransaction,
    params: OrderDetailPageParams,
) -> WebResult<PageResult<OrderDetailModel>> {
    let page = OrderDetailRepository::page(params, &txn).await?;
    commit(txn).await?;
    Ok(page)
}

pub async fn read_one(txn: DatabaseTransaction, id: i32) -> WebResult<OrderDetailModel> {
    let detail = OrderDetailRepository::find_by_id(id, &txn)
        .await?
        .ok_or_else(|| detail_not_found(id))?;
    commit(txn).await?;
    Ok(detail)
}

/// Apply the fields present in `request` to order detail `id`.
#[instrument(name = "order-detail-update", skip(txn))]
pub async fn update(
    txn: DatabaseTransaction,
    id: i32,
    request: UpdateOrderDetail,
) -> WebResult<OrderDetailModel> {
    let existing = OrderDetailRepository::find_by_id(id, &txn)
        .await?
        .ok_or_else(|| detail_not_found(id))?;

    if request.is_empty() {
        debug!(id, "empty update payload, nothing to persist");
        commit(txn).await?;
        return Ok(existing);
    }

    let mut active = existing.into_active_model();
    request.apply(&mut active);
    let detail = OrderDetailRepository::update(active, &txn).await?;

    commit(txn).await?;
    Ok(detail)
}

#[instrument(name = "order-detail-delete", skip(txn))]
pub async fn delete(txn: DatabaseTransaction, id: i32) -> WebResult<()> {
    if OrderDetailRepository::find_by_id(id, &txn).await?.is_none() {
        return Err(detail_not_found(id));
    }

    OrderDetailRepository::delete(id, &txn).await?;
    commit(txn).await?;
    Ok(())
}
