use serde_json::json;

use sellerboard_compute::{
    calculate_sales_report, Dataset, RankedBonus, ReportError, ReportOptions, SimpleRevenue,
};

use crate::helpers::{dataset, two_seller_fixture};

fn expect_invalid_input(data: &Dataset, collection: &str) {
    match calculate_sales_report(data, &ReportOptions::standard()) {
        Err(ReportError::InvalidInput(msg)) => {
            assert!(msg.contains(collection), "message {msg:?} should name {collection}")
        }
        other => panic!("expected InvalidInput for {collection}, got {other:?}"),
    }
}

#[test]
fn empty_sellers() {
    let mut data = two_seller_fixture();
    data.sellers.clear();
    expect_invalid_input(&data, "sellers");
}

#[test]
fn empty_products() {
    let mut data = two_seller_fixture();
    data.products.clear();
    expect_invalid_input(&data, "products");
}

#[test]
fn empty_purchase_records() {
    let mut data = two_seller_fixture();
    data.purchase_records.clear();
    expect_invalid_input(&data, "purchase_records");
}

#[test]
fn missing_collection_fails_like_empty() {
    let data = dataset(json!({
        "sellers": [{ "id": "s1", "first_name": "A", "last_name": "B" }],
        "products": [{ "sku": "SKU_1", "purchase_price": 1.0 }],
    }));
    expect_invalid_input(&data, "purchase_records");
}

#[test]
fn missing_revenue_strategy() {
    let options = ReportOptions::new().with_bonus(RankedBonus::default());
    let err = calculate_sales_report(&two_seller_fixture(), &options).unwrap_err();
    assert!(matches!(err, ReportError::InvalidConfiguration(ref msg) if msg.contains("revenue")));
    assert_eq!(
        err.to_string(),
        "Invalid configuration: revenue strategy is required"
    );
}

#[test]
fn missing_bonus_strategy() {
    let options = ReportOptions::new().with_revenue(SimpleRevenue);
    let err = calculate_sales_report(&two_seller_fixture(), &options).unwrap_err();
    assert!(matches!(err, ReportError::InvalidConfiguration(ref msg) if msg.contains("bonus")));
}

#[test]
fn no_strategies_at_all() {
    let err = calculate_sales_report(&two_seller_fixture(), &ReportOptions::new()).unwrap_err();
    assert!(matches!(err, ReportError::InvalidConfiguration(_)));
}
