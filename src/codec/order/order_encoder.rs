use serde::Serialize;
use serde_json::{Map, Value};

use crate::BindError;
use crate::core::codec::TreeEncode;
use crate::core::date::format_date;
use crate::model::{Address, Customer, Order, OrderItem};

/// Source-name to output-name tables for the asymmetric output shape. Types
/// emitted verbatim (Address, OrderItem) have no table; their serde derives
/// carry the names instead.
const ORDER_FIELDS: &[(&str, &str)] = &[
    ("orderId", "ID"),
    ("totalAmount", "amount"),
    ("customer", "customer"),
    ("items", "items"),
    ("orderDate", "orderDate"),
];

const CUSTOMER_FIELDS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("name", "name"),
    ("email", "email"),
    ("shippingAddress", "addresses"),
];

fn renamed<'a>(table: &[(&'a str, &'a str)], source: &'a str) -> &'a str {
    table
        .iter()
        .find(|(from, _)| *from == source)
        .map(|(_, to)| *to)
        .unwrap_or(source)
}

impl TreeEncode for Order {
    fn encode(&self) -> Result<Value, BindError> {
        let mut out = Map::new();
        out.insert(
            renamed(ORDER_FIELDS, "orderId").to_string(),
            Value::from(self.order_id.as_str()),
        );
        out.insert(
            renamed(ORDER_FIELDS, "totalAmount").to_string(),
            Value::from(self.total_amount),
        );
        out.insert(
            renamed(ORDER_FIELDS, "customer").to_string(),
            self.customer.encode()?,
        );

        let items = self
            .items
            .iter()
            .map(verbatim)
            .collect::<Result<Vec<_>, _>>()?;
        out.insert(renamed(ORDER_FIELDS, "items").to_string(), Value::Array(items));

        // Always present: a date string when set, the null literal otherwise.
        out.insert(
            renamed(ORDER_FIELDS, "orderDate").to_string(),
            match self.order_date {
                Some(date) => Value::from(format_date(date)),
                None => Value::Null,
            },
        );

        Ok(Value::Object(out))
    }
}

impl TreeEncode for Customer {
    fn encode(&self) -> Result<Value, BindError> {
        let mut out = Map::new();
        out.insert(
            renamed(CUSTOMER_FIELDS, "id").to_string(),
            Value::from(self.id.as_str()),
        );
        out.insert(
            renamed(CUSTOMER_FIELDS, "name").to_string(),
            Value::from(self.full_name()),
        );
        out.insert(
            renamed(CUSTOMER_FIELDS, "email").to_string(),
            Value::from(self.email.as_str()),
        );
        out.insert(
            renamed(CUSTOMER_FIELDS, "shippingAddress").to_string(),
            verbatim(&self.shipping_address)?,
        );
        Ok(Value::Object(out))
    }
}

impl TreeEncode for Address {
    fn encode(&self) -> Result<Value, BindError> {
        verbatim(self)
    }
}

impl TreeEncode for OrderItem {
    fn encode(&self) -> Result<Value, BindError> {
        verbatim(self)
    }
}

fn verbatim<T: Serialize>(value: &T) -> Result<Value, BindError> {
    serde_json::to_value(value).map_err(|error| BindError::Emit(error.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::core::codec::TreeEncode;
    use crate::model::{Address, Customer, Order, OrderItem};

    fn sample_order() -> Order {
        Order {
            order_id: "O1".to_string(),
            customer: Customer {
                id: "C1".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Roe".to_string(),
                email: "j@x.com".to_string(),
                shipping_address: Address {
                    street: "1 Main".to_string(),
                    city: "X".to_string(),
                    zip_code: "00000".to_string(),
                    country: "US".to_string(),
                },
            },
            items: vec![OrderItem {
                product_id: "P1".to_string(),
                product_name: "Widget".to_string(),
                quantity: 2,
                unit_price: 9.995,
            }],
            total_amount: 19.99,
            order_date: None,
        }
    }

    #[test]
    fn order_should_be_emitted_with_renamed_members() {
        let tree = sample_order().encode().unwrap();

        assert_eq!(
            json!({
                "ID": "O1",
                "amount": 19.99,
                "customer": {
                    "ID": "C1",
                    "name": "Jane Roe",
                    "email": "j@x.com",
                    "addresses": {
                        "street": "1 Main",
                        "city": "X",
                        "zipCode": "00000",
                        "country": "US"
                    }
                },
                "items": [
                    {"productId": "P1", "productName": "Widget", "quantity": 2, "unitPrice": 9.995}
                ],
                "orderDate": null
            }),
            tree
        );
    }

    #[test]
    fn customer_names_should_be_rejoined_with_single_space() {
        let tree = sample_order().customer.encode().unwrap();
        assert_eq!(json!("Jane Roe"), tree["name"]);
    }

    #[test]
    fn set_order_date_should_be_emitted_as_iso_string() {
        let mut order = sample_order();
        order.order_date = NaiveDate::from_ymd_opt(2024, 3, 5);

        let tree = order.encode().unwrap();
        assert_eq!(json!("2024-03-05"), tree["orderDate"]);
    }

    #[test]
    fn unset_order_date_should_be_emitted_as_null_literal() {
        let tree = sample_order().encode().unwrap();
        assert!(tree.as_object().unwrap().contains_key("orderDate"));
        assert_eq!(json!(null), tree["orderDate"]);
    }
}
