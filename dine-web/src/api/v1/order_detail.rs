use std::sync::Arc;

use actix_web::{web, HttpResponse};
use actix_web_validator::{Json, Path, Query};
use dine_error::WebResult;
use dine_models::{
    domain::prelude::{
        NewOrderDetail, OrderDetailPageParams, PageResult, PathId, UpdateOrderDetail,
    },
    entities::prelude::OrderDetailModel,
    web::WebResponse,
};

use crate::{controller::order_detail as controller, AppState};

pub(super) const ROUTER_PREFIX: &str = "/order-details";

/// Configure order detail routes
///
/// # Routes
/// - POST ``: Add a menu item to an order (merges into an existing line)
/// - GET ``: Retrieve all order details
/// - GET `/page`: Retrieve paginated order details
/// - GET `/{id}`: Retrieve one order detail
/// - PUT `/{id}`: Partially update an order detail
/// - DELETE `/{id}`: Delete an order detail
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("", web::get().to(list))
        .route("/page", web::get().to(page))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

async fn create(
    payload: Json<NewOrderDetail>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<OrderDetailModel>> {
    let (_writer, txn) = state.begin_write().await?;
    Ok(WebResponse::ok(
        controller::create(txn, payload.into_inner()).await?,
    ))
}

async fn list(
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<Vec<OrderDetailModel>>> {
    let txn = state.begin().await?;
    Ok(WebResponse::ok(controller::read_all(txn).await?))
}

async fn page(
    params: Query<OrderDetailPageParams>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<PageResult<OrderDetailModel>>> {
    let txn = state.begin().await?;
    Ok(WebResponse::ok(
        controller::page(txn, params.into_inner()).await?,
    ))
}

async fn get_by_id(
    req: Path<PathId>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<OrderDetailModel>> {
    let txn = state.begin().await?;
    Ok(WebResponse::ok(controller::read_one(txn, req.id).await?))
}

async fn update(
    req: Path<PathId>,
    payload: Json<UpdateOrderDetail>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<WebResponse<OrderDetailModel>> {
    let (_writer, txn) = state.begin_write().await?;
    Ok(WebResponse::ok(
        controller::update(txn, req.id, payload.into_inner()).await?,
    ))
}

async fn delete(req: Path<PathId>, state: web::Data<Arc<AppState>>) -> WebResult<HttpResponse> {
    let (_writer, txn) = state.begin_write().await?;
    controller::delete(txn, req.id).await?;
    Ok(HttpResponse::NoContent().finish())
}
