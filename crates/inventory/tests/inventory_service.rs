use stockroom_core::{DomainError, Money, ProductId};
use stockroom_inventory::{
    AdjustmentForm, AlertId, AlertKind, InventoryConfig, InventoryService, MovementKind,
    NoticeLevel, ProductQuery, RecordingNotifier, SortKey, SortOrder, StatusFilter,
    StockAdjustment,
};
use stockroom_products::seed::mock_catalog;
use stockroom_products::{InMemoryProductRegistry, NewProduct, ProductPatch};

type Service = InventoryService<InMemoryProductRegistry, RecordingNotifier>;

fn pid(s: &str) -> ProductId {
    ProductId::new(s).unwrap()
}

fn service() -> Service {
    let registry = InMemoryProductRegistry::with_products(mock_catalog().unwrap()).unwrap();
    InventoryService::new(registry, InventoryConfig::default(), RecordingNotifier::new())
}

fn stock(service: &Service, id: &str) -> u64 {
    service.product(&pid(id)).unwrap().inventory()
}

fn alert_ids(service: &Service) -> Vec<String> {
    service.alerts().iter().map(|a| a.id.to_string()).collect()
}

#[test]
fn seeded_catalog_has_no_alerts_at_default_threshold() {
    let service = service();
    assert!(service.alerts().is_empty());

    let metrics = service.metrics();
    assert_eq!(metrics.total_products, 3);
    assert_eq!(
        metrics.total_stock_value,
        Money::from_cents(19_999 * 25 + 2_999 * 50 + 4_999 * 15)
    );
    assert_eq!(metrics.average_stock_level, 30.0);
}

#[test]
fn adjustment_updates_product_log_alerts_and_notifies_once() {
    let mut service = service();

    let movement = service
        .adjust_stock(StockAdjustment::new(pid("prod-3"), -7, "Product sold"))
        .unwrap();

    assert_eq!(movement.new_stock, 8);
    assert_eq!(stock(&service, "prod-3"), 8);
    assert_eq!(service.movements().latest(), Some(&movement));
    assert_eq!(alert_ids(&service), vec!["low-stock-prod-3"]);

    let notices = service.notifier_mut().take();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].message, "Stock decreased successfully");
}

#[test]
fn unknown_product_fails_with_one_error_notice_and_no_changes() {
    let mut service = service();

    let err = service
        .adjust_stock(StockAdjustment::new(pid("ghost"), 1, "Product returned"))
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_)));
    assert!(service.movements().is_empty());
    let notices = service.notifier().notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, "Failed to adjust stock");
}

#[test]
fn draining_a_product_raises_danger_alert() {
    let mut service = service();
    service
        .adjust_stock(StockAdjustment::new(pid("prod-1"), -100, "Lost/stolen inventory"))
        .unwrap();

    assert_eq!(stock(&service, "prod-1"), 0);
    let alerts = service.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Danger);
    assert_eq!(alerts[0].product.id_typed(), &pid("prod-1"));
    assert_eq!(service.out_of_stock_products().len(), 1);
}

#[test]
fn bulk_adjustment_is_partial_on_failure() {
    let mut service = service();

    let err = service
        .bulk_adjust_stock(vec![
            StockAdjustment::new(pid("prod-1"), -1, "Product sold"),
            StockAdjustment::new(pid("badId"), 1, "Product returned"),
            StockAdjustment::new(pid("prod-2"), -1, "Product sold"),
        ])
        .unwrap_err();

    assert_eq!(err.index, 1);
    assert_eq!(err.applied.len(), 1);
    assert_eq!(stock(&service, "prod-1"), 24);
    assert_eq!(stock(&service, "prod-2"), 50);

    let notices = service.notifier().notices();
    assert_eq!(notices.len(), 1, "one notice for the whole batch");
    assert_eq!(notices[0].message, "Failed to complete bulk stock adjustment");
}

#[test]
fn bulk_adjustment_success_reports_batch_size() {
    let mut service = service();
    let movements = service
        .bulk_adjust_stock(vec![
            StockAdjustment::new(pid("prod-1"), 5, "Received new shipment"),
            StockAdjustment::new(pid("prod-2"), -45, "Product sold"),
        ])
        .unwrap();

    assert_eq!(movements.len(), 2);
    assert_eq!(alert_ids(&service), vec!["low-stock-prod-2"]);
    assert_eq!(
        service.notifier().last().map(|n| n.message.as_str()),
        Some("Bulk stock adjustment completed for 2 products")
    );
}

#[test]
fn set_stock_level_records_movement() {
    let mut service = service();
    let m = service.set_stock_level(&pid("prod-2"), 60, None).unwrap();
    assert_eq!(m.kind, MovementKind::StockIn);
    assert_eq!(m.quantity, 10);
    assert_eq!(service.product_movements(&pid("prod-2")).len(), 1);
    assert!(service.product_movements(&pid("prod-1")).is_empty());

    assert!(service.set_stock_level(&pid("ghost"), 1, None).is_err());
    assert_eq!(service.notifier().notices().len(), 2);
}

#[test]
fn threshold_change_rederives_alerts() {
    let mut service = service();
    service.set_low_stock_threshold(30);
    assert_eq!(alert_ids(&service), vec!["low-stock-prod-1", "low-stock-prod-3"]);
    assert_eq!(service.metrics().low_stock_items, 2);

    service.set_low_stock_threshold(0);
    assert!(service.alerts().is_empty());
    assert!(service.notifier().notices().is_empty());
}

#[test]
fn dismissed_alert_returns_after_unrelated_change() {
    let mut service = service();
    service.set_low_stock_threshold(20);
    let id = AlertId::low_stock(&pid("prod-3"));
    assert!(service.dismiss_alert(&id));
    assert!(service.alerts().is_empty());

    // Unrelated stock change regenerates from scratch.
    service
        .adjust_stock(StockAdjustment::new(pid("prod-2"), 1, "Product returned"))
        .unwrap();
    assert_eq!(alert_ids(&service), vec!["low-stock-prod-3"]);
}

#[test]
fn product_crud_keeps_alerts_current() {
    let mut service = service();

    let created = service
        .create_product(NewProduct {
            name: "Yoga Mat".to_string(),
            description: "Non-slip".to_string(),
            category: "sports".to_string(),
            price: Money::from_cents(2_500),
            inventory: 0,
            images: vec![],
        })
        .unwrap();
    let created_id = created.id_typed().clone();
    assert_eq!(alert_ids(&service), vec![format!("out-of-stock-{created_id}")]);

    service
        .update_product(&created_id, ProductPatch::inventory(3))
        .unwrap();
    assert_eq!(alert_ids(&service), vec![format!("low-stock-{created_id}")]);

    assert!(service.delete_product(&created_id));
    assert!(service.alerts().is_empty());
    assert!(!service.delete_product(&created_id));

    let err = service
        .update_product(&pid("ghost"), ProductPatch::inventory(1))
        .unwrap_err();
    assert!(err.is_not_found());

    let levels: Vec<_> = service.notifier().notices().iter().map(|n| n.level).collect();
    assert_eq!(
        levels,
        vec![
            NoticeLevel::Success,
            NoticeLevel::Success,
            NoticeLevel::Success,
            NoticeLevel::Error,
            NoticeLevel::Error,
        ]
    );
}

#[test]
fn invalid_product_is_rejected_with_error_notice() {
    let mut service = service();
    let err = service
        .create_product(NewProduct {
            name: String::new(),
            description: "x".to_string(),
            category: "books".to_string(),
            price: Money::ZERO,
            inventory: 1,
            images: vec![],
        })
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(service.products().len(), 3);
    assert_eq!(
        service.notifier().last().map(|n| n.message.as_str()),
        Some("Failed to save product")
    );
}

#[test]
fn form_to_engine_round_trip() {
    let mut service = service();
    let current = stock(&service, "prod-3");

    let adjustment = AdjustmentForm::new("-5", "Damaged/defective items")
        .with_notes("water damage")
        .parse(pid("prod-3"), Some(current))
        .unwrap();
    let movement = service.adjust_stock(adjustment).unwrap();

    assert_eq!(movement.notes.as_deref(), Some("water damage"));
    assert_eq!(movement.new_stock, 10);
}

#[test]
fn query_uses_current_threshold() {
    let mut service = service();
    service.set_low_stock_threshold(20);

    let low = service.query(&ProductQuery::new().status(StatusFilter::LowStock));
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].id_typed(), &pid("prod-3"));

    let by_price = service.query(&ProductQuery::new().sort(SortKey::Price, SortOrder::Asc));
    let ids: Vec<_> = by_price.iter().map(|p| p.id_typed().to_string()).collect();
    assert_eq!(ids, vec!["prod-2", "prod-3", "prod-1"]);
}
