use serde_json::{json, Value};

use sellerboard_compute::Dataset;

/// Deserialize a dataset fixture the way an upstream loader would hand it over.
pub fn dataset(value: Value) -> Dataset {
    serde_json::from_value(value).expect("fixture must deserialize")
}

pub fn seller(id: &str, first: &str, last: &str) -> Value {
    json!({ "id": id, "first_name": first, "last_name": last })
}

pub fn product(sku: &str, purchase_price: f64) -> Value {
    json!({ "sku": sku, "purchase_price": purchase_price })
}

pub fn item(sku: &str, quantity: u32, sale_price: f64, discount: f64) -> Value {
    json!({ "sku": sku, "quantity": quantity, "sale_price": sale_price, "discount": discount })
}

pub fn receipt(seller_id: &str, total_amount: f64, items: Vec<Value>) -> Value {
    json!({ "seller_id": seller_id, "total_amount": total_amount, "items": items })
}

/// Two sellers, two products, one receipt for seller A: 3 x 100 at cost 50.
pub fn two_seller_fixture() -> Dataset {
    dataset(json!({
        "sellers": [seller("seller_a", "Anna", "Ahl"), seller("seller_b", "Boris", "Berg")],
        "products": [product("SKU_1", 50.0), product("SKU_2", 20.0)],
        "purchase_records": [receipt("seller_a", 300.0, vec![item("SKU_1", 3, 100.0, 0.0)])],
    }))
}

/// A larger deterministic dataset: `sellers` sellers, 15 products, `receipts` receipts.
pub fn generated_fixture(sellers: usize, receipts: usize) -> Dataset {
    let seller_values: Vec<Value> = (0..sellers)
        .map(|i| seller(&format!("seller_{i}"), "Seller", &format!("No{i}")))
        .collect();
    let product_values: Vec<Value> = (0..15)
        .map(|i| product(&format!("SKU_{i:03}"), 5.0 + i as f64))
        .collect();
    let receipt_values: Vec<Value> = (0..receipts)
        .map(|r| {
            let items: Vec<Value> = (0..(r % 4 + 1))
                .map(|k| {
                    let sku = format!("SKU_{:03}", (r * 7 + k * 3) % 15);
                    let quantity = ((r + k) % 5 + 1) as u32;
                    let discount = ((r * 13 + k) % 4) as f64 * 5.0;
                    item(&sku, quantity, 40.0 + (k as f64) * 2.5, discount)
                })
                .collect();
            let total = 100.0 + (r % 17) as f64 * 3.25;
            receipt(&format!("seller_{}", (r * 5) % sellers), total, items)
        })
        .collect();

    dataset(json!({
        "sellers": seller_values,
        "products": product_values,
        "purchase_records": receipt_values,
    }))
}
