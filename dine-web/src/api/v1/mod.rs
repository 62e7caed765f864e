//! V1 version API routes
mod order_detail;

use actix_web::web;

/// Configure all v1 routes
pub fn configure_v1_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(order_detail::ROUTER_PREFIX).configure(order_detail::configure_routes),
    );
}
