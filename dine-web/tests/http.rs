mod common;

use actix_web::{
    http::StatusCode,
    test::{self, TestRequest},
    web::Data,
    App,
};
use common::{setup_db, MENU_ITEM_ID, MISSING_ID, ORDER_ID};
use dine_web::{configure, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

macro_rules! init_app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new(Arc::new(AppState::new($db))))
                .configure(|cfg| configure(cfg, "/api")),
        )
        .await
    };
}

#[actix_web::test]
async fn health_is_served_at_the_root() {
    let app = init_app!(setup_db().await);

    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn create_then_merge_over_http() {
    let app = init_app!(setup_db().await);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::post()
            .uri("/api/order-details")
            .set_json(json!({"order_id": ORDER_ID, "menu_item_id": MENU_ITEM_ID, "amount": 2}))
            .to_request(),
    )
    .await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["amount"], 2);
    let id = body["data"]["id"].as_i64().unwrap();

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::post()
            .uri("/api/order-details")
            .set_json(json!({"order_id": ORDER_ID, "menu_item_id": MENU_ITEM_ID, "amount": 3}))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["id"].as_i64(), Some(id));
    assert_eq!(body["data"]["amount"], 5);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/order-details").to_request(),
    )
    .await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn create_with_missing_order_is_404() {
    let app = init_app!(setup_db().await);

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/order-details")
            .set_json(json!({"order_id": MISSING_ID, "menu_item_id": MENU_ITEM_ID, "amount": 1}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].as_str().unwrap().contains("999"));
}

#[actix_web::test]
async fn invalid_payload_is_400() {
    let app = init_app!(setup_db().await);

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/order-details")
            .set_json(json!({"order_id": ORDER_ID, "menu_item_id": MENU_ITEM_ID, "amount": 0}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/order-details")
            .set_json(json!({"order_id": ORDER_ID}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn read_update_delete_lifecycle() {
    let app = init_app!(setup_db().await);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::post()
            .uri("/api/order-details")
            .set_json(json!({"order_id": ORDER_ID, "menu_item_id": MENU_ITEM_ID, "amount": 1}))
            .to_request(),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/order-details/{id}");

    let resp = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::put()
            .uri(&uri)
            .set_json(json!({"amount": 4}))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["amount"], 4);
    assert_eq!(body["data"]["order_id"], ORDER_ID);
    assert_eq!(body["data"]["menu_item_id"], MENU_ITEM_ID);

    let resp = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_to_missing_order_is_400() {
    let app = init_app!(setup_db().await);

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::post()
            .uri("/api/order-details")
            .set_json(json!({"order_id": ORDER_ID, "menu_item_id": MENU_ITEM_ID, "amount": 1}))
            .to_request(),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let resp = test::call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/api/order-details/{id}"))
            .set_json(json!({"order_id": MISSING_ID}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Bad Request");
}

#[actix_web::test]
async fn page_over_http() {
    let app = init_app!(setup_db().await);

    for menu_item_id in 1..=3 {
        let resp = test::call_service(
            &app,
            TestRequest::post()
                .uri("/api/order-details")
                .set_json(json!({"order_id": ORDER_ID, "menu_item_id": menu_item_id, "amount": 1}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let body: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get()
            .uri("/api/order-details/page?page=1&page_size=2&order_id=1")
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["pages"], 2);
    assert_eq!(body["data"]["records"].as_array().map(Vec::len), Some(2));

    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/api/order-details/page?page=0&page_size=2")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn non_positive_id_is_400() {
    let app = init_app!(setup_db().await);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/order-details/0").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
