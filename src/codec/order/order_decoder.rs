use log::debug;
use serde_json::Value;

use crate::BindError;
use crate::core::codec::TreeDecode;
use crate::core::date::parse_date;
use crate::core::node::NodeRef;
use crate::model::{Address, Customer, Order, OrderItem};

impl TreeDecode for Order {
    fn decode(node: &Value) -> Result<Self, BindError> {
        let root = NodeRef::root(node);

        let order_id = root.field("orderId")?.as_str()?.to_string();
        let total_amount = root.field("totalAmount")?.as_f64()?;
        let customer = decode_customer(&root.field("customer")?)?;

        let mut items = Vec::new();
        for element in root.field("items")?.elements()? {
            items.push(decode_item(&element)?);
        }

        let order_date = match root.field_opt("orderDate")? {
            Some(node) if !node.is_null() => Some(parse_date(node.as_str()?, node.path())?),
            _ => None,
        };

        debug!("decoded order {} with {} items", order_id, items.len());

        Ok(Order {
            order_id,
            customer,
            items,
            total_amount,
            order_date,
        })
    }
}

impl TreeDecode for Customer {
    fn decode(node: &Value) -> Result<Self, BindError> {
        decode_customer(&NodeRef::root(node))
    }
}

impl TreeDecode for Address {
    fn decode(node: &Value) -> Result<Self, BindError> {
        decode_address(&NodeRef::root(node))
    }
}

impl TreeDecode for OrderItem {
    fn decode(node: &Value) -> Result<Self, BindError> {
        decode_item(&NodeRef::root(node))
    }
}

fn decode_customer(node: &NodeRef<'_>) -> Result<Customer, BindError> {
    let id = node.field("id")?.as_str()?.to_string();

    // A single "name" member wins over separate firstName/lastName members.
    let (first_name, last_name) = match node.field_opt("name")? {
        Some(name) => split_name(name.as_str()?),
        None => (
            text_or_empty(node, "firstName")?,
            text_or_empty(node, "lastName")?,
        ),
    };

    let email = node.field("email")?.as_str()?.to_string();
    let shipping_address = decode_address(&node.field("shippingAddress")?)?;

    Ok(Customer {
        id,
        first_name,
        last_name,
        email,
        shipping_address,
    })
}

fn decode_address(node: &NodeRef<'_>) -> Result<Address, BindError> {
    Ok(Address {
        street: node.field("street")?.as_str()?.to_string(),
        city: node.field("city")?.as_str()?.to_string(),
        zip_code: node.field("zipCode")?.as_str()?.to_string(),
        country: node.field("country")?.as_str()?.to_string(),
    })
}

fn decode_item(node: &NodeRef<'_>) -> Result<OrderItem, BindError> {
    Ok(OrderItem {
        product_id: node.field("productId")?.as_str()?.to_string(),
        product_name: node.field("productName")?.as_str()?.to_string(),
        quantity: node.field("quantity")?.as_i64()?,
        unit_price: node.field("unitPrice")?.as_f64()?,
    })
}

/// Splits a display name on the first run of whitespace into at most two
/// parts; with no second part the last name resolves to the empty string.
fn split_name(name: &str) -> (String, String) {
    match name.find(char::is_whitespace) {
        Some(split) => {
            let (first, rest) = name.split_at(split);
            (first.to_string(), rest.trim_start().to_string())
        }
        None => (name.to_string(), String::new()),
    }
}

fn text_or_empty(node: &NodeRef<'_>, name: &str) -> Result<String, BindError> {
    match node.field_opt(name)? {
        Some(field) => Ok(field.as_str()?.to_string()),
        None => Ok(String::new()),
    }
}
