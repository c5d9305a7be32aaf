mod common;

use common::TestApp;
use partner_orders::{
    entities::{order, order_item, product},
    errors::ServiceError,
    services::{AddItemInput, CatalogService, DraftItem, OrderDraft, OrderService},
};
use rust_decimal_macros::dec;
use sea_orm::{EntityTrait, PaginatorTrait};
use std::sync::Arc;

fn order_service(app: &TestApp) -> OrderService {
    OrderService::new(app.db.clone(), Some(Arc::new(app.event_sender.clone())))
}

fn draft_item(product: &product::Model, quantity: i32) -> AddItemInput {
    AddItemInput {
        product_id: product.id,
        product_name: product.name.clone(),
        unit_price: product.min_partner_price,
        quantity,
    }
}

async fn count_rows(app: &TestApp) -> (u64, u64) {
    let orders = order::Entity::find()
        .count(&*app.db)
        .await
        .expect("count orders");
    let items = order_item::Entity::find()
        .count(&*app.db)
        .await
        .expect("count order items");
    (orders, items)
}

#[tokio::test]
async fn commit_persists_header_and_all_lines() {
    let app = TestApp::new().await;
    let service = order_service(&app);

    let partner = app.seed_partner("Construct Plus", 85).await;
    let laminate = app.seed_product("Laminate A", dec!(1500.00)).await;
    let veneer = app.seed_product("Veneer B", dec!(990.50)).await;

    let mut draft = OrderDraft::new();
    draft.add_item(draft_item(&laminate, 3)).unwrap();
    draft.add_item(draft_item(&veneer, 2)).unwrap();

    let header = service
        .create_order(partner.id, draft.items())
        .await
        .expect("commit order");

    assert_eq!(header.partner_id, partner.id);
    // 3 * 1500.00 + 2 * 990.50
    assert_eq!(header.total_amount, dec!(6481.00));

    let stored = service
        .get_order_with_items(header.id)
        .await
        .expect("read back committed order");
    assert_eq!(stored.order.id, header.id);
    assert_eq!(stored.items.len(), 2);
    assert_eq!(stored.items[0].product_id, laminate.id);
    assert_eq!(stored.items[0].quantity, 3);
    assert_eq!(stored.items[0].unit_price, dec!(1500.00));
    assert_eq!(stored.items[0].total_price, dec!(4500.00));
    assert_eq!(stored.items[1].product_id, veneer.id);
    assert_eq!(stored.items[1].total_price, dec!(1981.00));
}

#[tokio::test]
async fn merged_draft_lines_commit_as_one_row() {
    let app = TestApp::new().await;
    let service = order_service(&app);

    let partner = app.seed_partner("Construct Plus", 60).await;
    let laminate = app.seed_product("Laminate A", dec!(10.00)).await;

    let mut draft = OrderDraft::new();
    draft.add_item(draft_item(&laminate, 2)).unwrap();
    draft.add_item(draft_item(&laminate, 3)).unwrap();

    let header = service
        .create_order(partner.id, draft.items())
        .await
        .expect("commit order");
    assert_eq!(header.total_amount, dec!(50.00));

    let stored = service.get_order_with_items(header.id).await.unwrap();
    assert_eq!(stored.items.len(), 1);
    assert_eq!(stored.items[0].quantity, 5);
}

#[tokio::test]
async fn empty_draft_is_rejected_without_writes() {
    let app = TestApp::new().await;
    let service = order_service(&app);

    let partner = app.seed_partner("Construct Plus", 85).await;

    let result = service.create_order(partner.id, &[]).await;
    assert!(matches!(result, Err(ServiceError::EmptyOrder)));

    assert_eq!(count_rows(&app).await, (0, 0));
}

#[tokio::test]
async fn missing_partner_is_rejected_without_writes() {
    let app = TestApp::new().await;
    let service = order_service(&app);

    let laminate = app.seed_product("Laminate A", dec!(10.00)).await;
    let mut draft = OrderDraft::new();
    draft.add_item(draft_item(&laminate, 1)).unwrap();

    let result = service.create_order(9999, draft.items()).await;
    assert!(matches!(result, Err(ServiceError::PartnerNotFound(9999))));

    assert_eq!(count_rows(&app).await, (0, 0));
}

#[tokio::test]
async fn failed_line_insert_rolls_back_everything() {
    let app = TestApp::new().await;
    let service = order_service(&app);

    let partner = app.seed_partner("Construct Plus", 85).await;
    let laminate = app.seed_product("Laminate A", dec!(10.00)).await;

    // One valid line followed by a line whose product id violates the
    // foreign key, so the failure happens after the header and the first
    // line were already inserted.
    let items = vec![
        DraftItem {
            product_id: laminate.id,
            product_name: laminate.name.clone(),
            quantity: 2,
            unit_price: dec!(10.00),
            total_price: dec!(20.00),
        },
        DraftItem {
            product_id: 424_242,
            product_name: "Ghost product".to_string(),
            quantity: 1,
            unit_price: dec!(5.00),
            total_price: dec!(5.00),
        },
    ];

    let result = service.create_order(partner.id, &items).await;
    assert!(matches!(result, Err(ServiceError::DatabaseError(_))));

    // No partial header or line rows may remain.
    assert_eq!(count_rows(&app).await, (0, 0));
}

#[tokio::test]
async fn generated_order_ids_are_distinct() {
    let app = TestApp::new().await;
    let service = order_service(&app);

    let partner = app.seed_partner("Construct Plus", 85).await;
    let laminate = app.seed_product("Laminate A", dec!(10.00)).await;

    let mut draft = OrderDraft::new();
    draft.add_item(draft_item(&laminate, 1)).unwrap();

    let first = service
        .create_order(partner.id, draft.items())
        .await
        .unwrap();
    let second = service
        .create_order(partner.id, draft.items())
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(count_rows(&app).await, (2, 2));
}

#[tokio::test]
async fn reading_an_unknown_order_is_not_found() {
    let app = TestApp::new().await;
    let service = order_service(&app);

    let result = service.get_order_with_items(12345).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn catalog_lists_products_ordered_by_name() {
    let app = TestApp::new().await;
    let catalog = CatalogService::new(app.db.clone());

    app.seed_product("Veneer", dec!(5.00)).await;
    app.seed_product("Chipboard", dec!(3.00)).await;
    app.seed_product("Laminate", dec!(4.00)).await;

    let products = catalog.list_products().await.expect("list products");
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Chipboard", "Laminate", "Veneer"]);
}

#[tokio::test]
async fn catalog_reads_partner_rating() {
    let app = TestApp::new().await;
    let catalog = CatalogService::new(app.db.clone());

    let partner = app.seed_partner("Construct Plus", 72).await;

    let found = catalog
        .get_partner(partner.id)
        .await
        .expect("get partner")
        .expect("partner exists");
    assert_eq!(found.rating, 72);

    let missing = catalog.get_partner(9999).await.expect("query runs");
    assert!(missing.is_none());
}
