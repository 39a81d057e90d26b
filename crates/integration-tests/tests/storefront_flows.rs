//! End-to-end flows across likes, the pre-order basket, and rendering.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use farmstand_core::ProductId;
use farmstand_integration_tests::MockConfirmServer;
use farmstand_storefront::CartManager;
use farmstand_storefront::confirm::ConfirmClient;
use farmstand_storefront::events::UiEvent;
use farmstand_storefront::extract::{dataset_from_product, product_from_dataset};
use farmstand_storefront::page::{Dataset, LikeControl, PageModel};
use farmstand_storefront::storage::MemoryStorage;

async fn manager() -> (MockConfirmServer, CartManager<MemoryStorage>) {
    let server = MockConfirmServer::spawn(StatusCode::OK, json!({"ok": true})).await;
    let confirm = ConfirmClient::new(server.url.clone());
    let cart = CartManager::new(MemoryStorage::new(), PageModel::default(), confirm);
    (server, cart)
}

fn raspberry_like() -> Dataset {
    Dataset::from_pairs([
        ("like-btn", ""),
        ("product-id", "9"),
        ("product-name", "Raspberries"),
        ("product-price", "420"),
        ("product-supplier", "Berry Hollow"),
        ("product-is-weight-based", "1"),
    ])
}

#[tokio::test]
async fn liked_card_round_trips_into_the_basket() {
    let (_server, mut cart) = manager().await;
    cart.init().unwrap();

    cart.dispatch(UiEvent::Click {
        dataset: raspberry_like(),
    })
    .unwrap();
    let html = &cart.page().favorites.as_ref().unwrap().html;
    assert!(html.contains("Raspberries"));
    assert!(html.contains(r#"data-product-is-weight-based="1""#));

    // The rendered card's pre-order control carries the full attribute
    // set; extraction round-trips the entry without a storage lookup.
    let liked = cart.likes().into_iter().next().unwrap();
    let mut rendered_control = dataset_from_product(&liked);
    rendered_control.set("preorder-btn", "");
    let extracted = product_from_dataset(&rendered_control).unwrap();
    assert_eq!(extracted.supplier_name, "Berry Hollow");

    cart.dispatch(UiEvent::Click {
        dataset: rendered_control,
    })
    .unwrap();
    let items = cart.preorders();
    assert_eq!(items.len(), 1);
    // Weight-based default quantity.
    assert_eq!(items[0].quantity, Some(0.5));
    assert!(
        cart.page()
            .preorder
            .as_ref()
            .unwrap()
            .html
            .contains("kg (approx.)")
    );
}

#[tokio::test]
async fn quantity_edit_clamps_and_rerenders() {
    let (_server, mut cart) = manager().await;
    let mut ds = raspberry_like();
    ds.set("preorder-btn", "");
    cart.dispatch(UiEvent::Click { dataset: ds }).unwrap();

    cart.dispatch(UiEvent::Change {
        dataset: Dataset::from_pairs([("preorder-qty", ""), ("product-id", "9")]),
        value: "0".to_string(),
    })
    .unwrap();

    assert_eq!(cart.preorders()[0].quantity, Some(0.1));
    assert!(
        cart.page()
            .preorder
            .as_ref()
            .unwrap()
            .html
            .contains(r#"value="0.1""#)
    );
}

#[tokio::test]
async fn like_undo_round_trip_keeps_controls_in_sync() {
    let (_server, mut cart) = manager().await;
    cart.page_mut()
        .like_controls
        .push(LikeControl::new(Dataset::from_pairs([("product-id", "9")])));
    cart.init().unwrap();

    cart.dispatch(UiEvent::Click {
        dataset: raspberry_like(),
    })
    .unwrap();
    assert!(cart.is_liked(ProductId::new(9)));
    assert_eq!(cart.page().like_controls[0].appearance.css_class, "btn-danger");

    cart.dispatch(UiEvent::Click {
        dataset: raspberry_like(),
    })
    .unwrap();
    assert!(!cart.is_liked(ProductId::new(9)));
    assert_eq!(
        cart.page().like_controls[0].appearance.css_class,
        "btn-outline-danger"
    );

    let banner_id = cart.page().banners.iter().next().unwrap().id;
    cart.invoke_banner_action(banner_id, 0).unwrap();
    assert!(cart.is_liked(ProductId::new(9)));
    assert_eq!(cart.page().like_controls[0].appearance.css_class, "btn-danger");
    assert!(cart.page().banners.get(banner_id).is_none());
}
