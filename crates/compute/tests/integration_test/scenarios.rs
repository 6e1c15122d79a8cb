use serde_json::json;

use sellerboard_compute::{
    calculate_sales_report, LineItem, Product, RankedBonus, ReportOptions, ReportPipeline,
    SellerAccumulator, TopProduct,
};

use crate::helpers::{dataset, item, product, receipt, seller, two_seller_fixture};

#[test]
fn two_sellers_one_receipt() {
    let reports = calculate_sales_report(&two_seller_fixture(), &ReportOptions::standard()).unwrap();

    assert_eq!(reports.len(), 2);

    let a = &reports[0];
    assert_eq!(a.seller_id, "seller_a");
    assert_eq!(a.name, "Anna Ahl");
    assert_eq!(a.revenue, 300.0);
    assert_eq!(a.profit, 150.0);
    assert_eq!(a.sales_count, 1);
    assert_eq!(
        a.top_products,
        vec![TopProduct { sku: "SKU_1".into(), quantity: 3 }]
    );
    assert_eq!(a.bonus, 22.5);

    let b = &reports[1];
    assert_eq!(b.seller_id, "seller_b");
    assert_eq!(b.revenue, 0.0);
    assert_eq!(b.profit, 0.0);
    assert_eq!(b.sales_count, 0);
    assert!(b.top_products.is_empty());
    // Rank 1 of 2, but zero profit overrides the rank rule.
    assert_eq!(b.bonus, 0.0);
}

#[test]
fn receipt_total_and_item_profit_are_independent() {
    // Stated total disagrees with the item lines on purpose.
    let data = dataset(json!({
        "sellers": [seller("s1", "Olga", "Orlova")],
        "products": [product("SKU_1", 10.0), product("SKU_2", 4.0)],
        "purchase_records": [
            receipt("s1", 999.99, vec![item("SKU_1", 2, 25.0, 20.0), item("SKU_2", 5, 6.0, 0.0)]),
            receipt("s1", 0.01, vec![item("SKU_2", 1, 6.0, 50.0)]),
        ],
    }));

    let reports = calculate_sales_report(&data, &ReportOptions::standard()).unwrap();
    let s1 = &reports[0];

    assert_eq!(s1.revenue, 1000.0);
    // (40 - 20) + (30 - 20) + (3 - 4)
    assert_eq!(s1.profit, 29.0);
    assert_eq!(s1.sales_count, 2);
    assert_eq!(
        s1.top_products,
        vec![
            TopProduct { sku: "SKU_2".into(), quantity: 6 },
            TopProduct { sku: "SKU_1".into(), quantity: 2 },
        ]
    );
}

#[test]
fn five_sellers_bonus_ladder() {
    // One receipt per seller; profit = 100 * (5 - i) per unit margin.
    let sellers: Vec<_> = (0..5)
        .map(|i| seller(&format!("s{i}"), "S", &i.to_string()))
        .collect();
    let receipts: Vec<_> = (0..5)
        .map(|i| receipt(&format!("s{i}"), 0.0, vec![item("SKU_1", 10 * (5 - i), 110.0, 0.0)]))
        .collect();
    let data = dataset(json!({
        "sellers": sellers,
        "products": [product("SKU_1", 100.0)],
        "purchase_records": receipts,
    }));

    let reports = calculate_sales_report(&data, &ReportOptions::standard()).unwrap();
    let profits: Vec<f64> = reports.iter().map(|r| r.profit).collect();
    let bonuses: Vec<f64> = reports.iter().map(|r| r.bonus).collect();

    assert_eq!(profits, vec![500.0, 400.0, 300.0, 200.0, 100.0]);
    assert_eq!(bonuses, vec![75.0, 40.0, 30.0, 10.0, 0.0]);
}

#[test]
fn custom_strategies_are_used() {
    // Revenue ignores discounts; bonus is a flat 1 per rank below the top.
    let gross = |item: &LineItem, _: &Product| item.sale_price * f64::from(item.quantity);
    let flat = |rank: usize, _total: usize, _: &SellerAccumulator| rank as f64;
    let options = ReportOptions::new().with_revenue(gross).with_bonus(flat);

    let data = dataset(json!({
        "sellers": [seller("s1", "A", "A"), seller("s2", "B", "B")],
        "products": [product("SKU_1", 10.0)],
        "purchase_records": [
            receipt("s1", 20.0, vec![item("SKU_1", 1, 20.0, 100.0)]),
            receipt("s2", 15.0, vec![item("SKU_1", 1, 15.0, 0.0)]),
        ],
    }));

    let reports = calculate_sales_report(&data, &options).unwrap();
    assert_eq!(reports[0].seller_id, "s1");
    assert_eq!(reports[0].profit, 10.0);
    assert_eq!(reports[0].bonus, 0.0);
    assert_eq!(reports[1].profit, 5.0);
    assert_eq!(reports[1].bonus, 1.0);
}

#[test]
fn custom_bonus_rates() {
    let options = ReportOptions::standard().with_bonus(RankedBonus {
        top_rate: 0.5,
        podium_rate: 0.25,
        default_rate: 0.0,
    });
    let reports = calculate_sales_report(&two_seller_fixture(), &options).unwrap();
    assert_eq!(reports[0].bonus, 75.0);
}

#[test]
fn pipeline_output_serializes_for_presenters() {
    let report = ReportPipeline::new(ReportOptions::standard())
        .run(&two_seller_fixture())
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["sellers"][0]["seller_id"], "seller_a");
    assert_eq!(json["sellers"][0]["top_products"][0]["sku"], "SKU_1");
    assert_eq!(json["stats"]["receipts_processed"], 1);
}
