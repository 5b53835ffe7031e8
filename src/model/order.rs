use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer order. Owns its customer and its items; equality is field-wise
/// across the whole graph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    pub order_id: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    /// Calendar date only, no time component. `None` when the source document
    /// carried no `orderDate` (or an explicit null).
    pub order_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub shipping_address: Address,
}

impl Customer {
    /// `first_name` and `last_name` joined with a single space, the form used
    /// by the asymmetric output shape.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Emitted verbatim on the write path, so the field names live in the serde
/// derive rather than in a rename table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// One line of an order. Sequence order is significant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    /// Not validated: a negative quantity is accepted silently.
    pub quantity: i64,
    pub unit_price: f64,
}
