use serde_json::{Value, json};

/// The end-to-end order document exercised across the integration tests.
pub fn sample_order_doc() -> Value {
    json!({
        "orderId": "O1",
        "totalAmount": 19.99,
        "customer": {
            "id": "C1",
            "name": "Jane Roe",
            "email": "j@x.com",
            "shippingAddress": {
                "street": "1 Main",
                "city": "X",
                "zipCode": "00000",
                "country": "US"
            }
        },
        "items": [
            {"productId": "P1", "productName": "Widget", "quantity": 2, "unitPrice": 9.995}
        ]
    })
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
