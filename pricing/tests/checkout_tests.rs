use pricing::{Checkout, Order, OrderItem, Promotion, ThresholdRule};

fn thresholds(rules: &[(i64, i64)]) -> Promotion {
    Promotion::Threshold(
        rules
            .iter()
            .map(|&(threshold, discount)| ThresholdRule { threshold, discount })
            .collect(),
    )
}

#[test]
fn order_without_promotions_charges_the_subtotals() {
    let checkout = Checkout::new();
    let order = checkout.place_order(vec![OrderItem::new("T-shirt", 2, 500)]);

    assert_eq!(order.original_amount(), 1000);
    assert_eq!(order.discount(), 0);
    assert_eq!(order.total_amount(), 1000);
    assert_eq!(order.items().len(), 1);
    assert_eq!(order.items()[0].product_name, "T-shirt");
}

#[test]
fn reached_threshold_grants_its_discount() {
    let checkout = Checkout::with(vec![thresholds(&[(1000, 100)])]);
    let order = checkout.place_order(vec![OrderItem::new("T-shirt", 2, 500)]);

    assert_eq!(order.original_amount(), 1000);
    assert_eq!(order.discount(), 100);
    assert_eq!(order.total_amount(), 900);
}

#[test]
fn unreached_threshold_grants_nothing() {
    let checkout = Checkout::with(vec![thresholds(&[(1000, 100)])]);
    let order = checkout.place_order(vec![OrderItem::new("T-shirt", 1, 999)]);

    assert_eq!(order.discount(), 0);
    assert_eq!(order.total_amount(), 999);
}

#[test]
fn every_satisfied_threshold_contributes() {
    let checkout = Checkout::with(vec![thresholds(&[(1000, 100), (2000, 300), (5000, 900)])]);
    let order = checkout.place_order(vec![OrderItem::new("Coat", 1, 2000)]);

    assert_eq!(order.original_amount(), 2000);
    assert_eq!(order.discount(), 400);
    assert_eq!(order.total_amount(), 1600);
}

#[test]
fn bogo_adds_a_free_unit_to_cosmetics_lines() {
    let checkout = Checkout::with(vec![Promotion::BogoCosmetics]);
    let order = checkout.place_order(vec![OrderItem::with_category(
        "Lipstick", 1, 300, "cosmetics",
    )]);

    assert_eq!(order.original_amount(), 300);
    assert_eq!(order.discount(), 0);
    assert_eq!(order.total_amount(), 300);
    assert_eq!(order.items()[0].quantity, 2);
}

#[test]
fn bogo_leaves_other_lines_alone() {
    let checkout = Checkout::with(vec![Promotion::BogoCosmetics]);
    let order = checkout.place_order(vec![
        OrderItem::new("T-shirt", 2, 500),
        OrderItem::with_category("Lipstick", 1, 300, "cosmetics"),
    ]);

    assert_eq!(order.items()[0].quantity, 2);
    assert_eq!(order.items()[1].quantity, 2);
    assert_eq!(order.total_amount(), 1300);
}

#[test]
fn threshold_and_bogo_compose() {
    let checkout = Checkout::with(vec![thresholds(&[(1000, 100)]), Promotion::BogoCosmetics]);
    let order = checkout.place_order(vec![
        OrderItem::new("T-shirt", 2, 500),
        OrderItem::with_category("Lipstick", 1, 300, "cosmetics"),
    ]);

    assert_eq!(order.original_amount(), 1300);
    assert_eq!(order.discount(), 100);
    assert_eq!(order.total_amount(), 1200);
    assert_eq!(order.items()[1].quantity, 2);
}

#[test]
fn bulk_day_reprices_full_groups_of_ten() {
    let checkout = Checkout::with(vec![Promotion::BulkDay]);
    let order = checkout.place_order(vec![OrderItem::new("Socks", 12, 100)]);

    // ten pairs at eight tenths plus two at full price
    assert_eq!(order.original_amount(), 1000);
    assert_eq!(order.discount(), 0);
    assert_eq!(order.total_amount(), 1000);
}

#[test]
fn bulk_day_counts_every_full_group() {
    let checkout = Checkout::with(vec![Promotion::BulkDay]);
    let order = checkout.place_order(vec![OrderItem::new("Socks", 25, 10)]);

    assert_eq!(order.total_amount(), 210);
}

#[test]
fn bulk_day_overrides_thresholds() {
    let checkout = Checkout::with(vec![thresholds(&[(1000, 100)]), Promotion::BulkDay]);
    let order = checkout.place_order(vec![OrderItem::new("Socks", 12, 100)]);

    assert_eq!(order.original_amount(), 1000);
    assert_eq!(order.discount(), 0);
    assert_eq!(order.total_amount(), 1000);
}

#[test]
fn bulk_day_idles_without_a_qualifying_line() {
    let checkout = Checkout::with(vec![thresholds(&[(1000, 100)]), Promotion::BulkDay]);
    let order = checkout.place_order(vec![OrderItem::new("T-shirt", 9, 200)]);

    assert_eq!(order.original_amount(), 1800);
    assert_eq!(order.discount(), 100);
    assert_eq!(order.total_amount(), 1700);
}

#[test]
fn category_discount_applies_to_its_category_only() {
    let mut checkout = Checkout::new();
    checkout.enable(Promotion::CategoryDiscount {
        category: "electronics".to_string(),
        percent: 0.2,
    });

    let order = checkout.place_order(vec![
        OrderItem::with_category("Phone", 1, 1000, "electronics"),
        OrderItem::with_category("T-shirt", 1, 500, "apparel"),
    ]);

    assert_eq!(order.discount(), 200);
    assert_eq!(order.total_amount(), 1300);
}

#[test]
fn bundle_discount_requires_every_product() {
    let bundle = Promotion::Bundle {
        required: vec!["T-shirt".to_string(), "Trousers".to_string()],
        discount: 200,
    };

    let checkout = Checkout::with(vec![bundle]);
    let order = checkout.place_order(vec![
        OrderItem::new("T-shirt", 1, 500),
        OrderItem::new("Trousers", 1, 800),
    ]);
    assert_eq!(order.discount(), 200);
    assert_eq!(order.total_amount(), 1100);

    let order = checkout.place_order(vec![
        OrderItem::new("T-shirt", 1, 500),
        OrderItem::new("Hat", 1, 300),
    ]);
    assert_eq!(order.discount(), 0);
    assert_eq!(order.total_amount(), 800);
}

#[test]
fn promotion_applicability_reads_the_order() {
    let order = Order::new(vec![OrderItem::new("Socks", 10, 50)]);
    assert!(Promotion::BulkDay.applies(&order));
    assert!(!Promotion::BogoCosmetics.applies(&order));

    let order = Order::new(vec![OrderItem::with_category("Cream", 1, 50, "cosmetics")]);
    assert!(!Promotion::BulkDay.applies(&order));
    assert!(Promotion::BogoCosmetics.applies(&order));
}
