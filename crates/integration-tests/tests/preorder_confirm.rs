//! End-to-end tests for pre-order confirmation.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use farmstand_integration_tests::MockConfirmServer;
use farmstand_storefront::CartManager;
use farmstand_storefront::banners::BannerCategory;
use farmstand_storefront::confirm::ConfirmClient;
use farmstand_storefront::events::UiEvent;
use farmstand_storefront::page::{Dataset, PageModel};
use farmstand_storefront::storage::MemoryStorage;

fn manager_for(server: &MockConfirmServer) -> CartManager<MemoryStorage> {
    let confirm = ConfirmClient::new(server.url.clone());
    CartManager::new(MemoryStorage::new(), PageModel::default(), confirm)
}

fn add_honey(cart: &mut CartManager<MemoryStorage>) {
    cart.dispatch(UiEvent::Click {
        dataset: Dataset::from_pairs([
            ("preorder-btn", ""),
            ("product-id", "7"),
            ("product-name", "Honey"),
            ("product-price", "250"),
        ]),
    })
    .unwrap();
}

#[tokio::test]
async fn confirm_success_clears_basket() {
    let server = MockConfirmServer::spawn(StatusCode::OK, json!({"ok": true})).await;
    let mut cart = manager_for(&server);
    add_honey(&mut cart);
    cart.page_mut().pickup_time = "Saturday 10:00".to_string();
    cart.page_mut().comment = "Back entrance, please".to_string();

    cart.confirm_preorder().await.unwrap();

    assert_eq!(server.hits(), 1);
    assert!(cart.preorders().is_empty());
    let banner = cart.page().banners.iter().next().unwrap();
    assert_eq!(banner.category, BannerCategory::Success);
    assert!(
        cart.page()
            .preorder
            .as_ref()
            .unwrap()
            .html
            .contains("pre-order list is empty")
    );
}

#[tokio::test]
async fn confirm_submits_normalized_items_and_inputs() {
    let server = MockConfirmServer::spawn(StatusCode::OK, json!({"ok": true})).await;
    let mut cart = manager_for(&server);
    add_honey(&mut cart);
    cart.page_mut().pickup_time = "tomorrow".to_string();
    cart.page_mut().comment = "no substitutions".to_string();

    cart.confirm_preorder().await.unwrap();

    let body = server.last_request().unwrap();
    assert_eq!(body["time"], "tomorrow");
    assert_eq!(body["comment"], "no substitutions");
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 7);
    assert_eq!(items[0]["quantity"], 1.0);
}

#[tokio::test]
async fn confirm_rejection_preserves_basket_and_surfaces_message() {
    let server = MockConfirmServer::spawn(
        StatusCode::OK,
        json!({"ok": false, "error": "out of stock"}),
    )
    .await;
    let mut cart = manager_for(&server);
    add_honey(&mut cart);

    cart.confirm_preorder().await.unwrap();

    assert_eq!(cart.preorders().len(), 1);
    let banner = cart.page().banners.iter().next().unwrap();
    assert_eq!(banner.category, BannerCategory::Danger);
    assert!(banner.message.contains("out of stock"));
}

#[tokio::test]
async fn confirm_http_failure_uses_server_message_when_present() {
    let server = MockConfirmServer::spawn(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"ok": false, "error": "market closed"}),
    )
    .await;
    let mut cart = manager_for(&server);
    add_honey(&mut cart);

    cart.confirm_preorder().await.unwrap();

    assert_eq!(cart.preorders().len(), 1);
    let banner = cart.page().banners.iter().next().unwrap();
    assert_eq!(banner.category, BannerCategory::Danger);
    assert!(banner.message.contains("market closed"));
}

#[tokio::test]
async fn confirm_empty_basket_never_calls_endpoint() {
    let server = MockConfirmServer::spawn(StatusCode::OK, json!({"ok": true})).await;
    let mut cart = manager_for(&server);

    cart.confirm_preorder().await.unwrap();

    assert_eq!(server.hits(), 0);
    assert!(cart.preorders().is_empty());
    let banner = cart.page().banners.iter().next().unwrap();
    assert_eq!(banner.category, BannerCategory::Warning);
}

#[tokio::test]
async fn failed_confirm_can_be_retried() {
    let failing = MockConfirmServer::spawn(
        StatusCode::OK,
        json!({"ok": false, "error": "out of stock"}),
    )
    .await;
    let mut cart = manager_for(&failing);
    add_honey(&mut cart);
    cart.confirm_preorder().await.unwrap();
    assert_eq!(cart.preorders().len(), 1);

    // Same basket, healthy endpoint: the retry succeeds and clears it.
    let healthy = MockConfirmServer::spawn(StatusCode::OK, json!({"ok": true})).await;
    let mut cart = CartManager::new(
        {
            let mut storage = MemoryStorage::new();
            storage.insert(
                "preorder",
                serde_json::to_string(&cart.preorders()).unwrap(),
            );
            storage
        },
        PageModel::default(),
        ConfirmClient::new(healthy.url.clone()),
    );
    cart.confirm_preorder().await.unwrap();
    assert_eq!(healthy.hits(), 1);
    assert!(cart.preorders().is_empty());
}
