#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # json-bind-rs

 Hand-written JSON codecs for a small, fixed domain model. Where a derive
 would force the input and output shapes to agree, this crate keeps them
 deliberately apart: the tree-to-object half accepts one field-naming scheme
 (with alternate and defaulted members), and the object-to-tree half emits a
 renamed, restructured one.

 ## Core Concepts

 - **NodeRef:** a path-carrying reference into a generic `serde_json::Value`
   tree. Every member lookup and primitive read narrows the variant
   explicitly, so an absent or ill-typed member fails with the exact path
   (`customer.shippingAddress.street`) instead of a silent null dereference.
 - **TreeDecode / TreeEncode:** the two halves of a codec, implemented by
   hand per type. A failed decode returns no value, never a partially
   populated one.
 - **CodecRegistry:** a dispatch table from a type tag to an erased
   (decode, encode) pair, for callers that only know a tag at runtime.
 - **Token-stream codecs:** for flat shapes, a single linear scan over a
   [`struson`](https://docs.rs/struson) reader/writer, without materializing
   a tree at all.

 ## Features

 | **Feature** | **Description**                                              |
 |-------------|--------------------------------------------------------------|
 | stream      | Enables the token-stream person codecs (default)             |

 ## Getting Started

```rust
use json_bind_rs::core::codec::{TreeDecode, TreeEncode};
use json_bind_rs::model::Order;

let document: serde_json::Value = serde_json::from_str(
    r#"{
        "orderId": "O1",
        "totalAmount": 19.99,
        "customer": {
            "id": "C1",
            "name": "Jane Roe",
            "email": "j@x.com",
            "shippingAddress": {
                "street": "1 Main", "city": "X",
                "zipCode": "00000", "country": "US"
            }
        },
        "items": [
            {"productId": "P1", "productName": "Widget", "quantity": 2, "unitPrice": 9.995}
        ]
    }"#,
)?;

let order = Order::decode(&document)?;
assert_eq!("Jane", order.customer.first_name);
assert_eq!("Roe", order.customer.last_name);
assert_eq!(2, order.items[0].quantity);

// The output scheme is intentionally different from the input scheme.
let tree = order.encode()?;
assert_eq!("O1", tree["ID"]);
assert_eq!("Jane Roe", tree["customer"]["name"]);
# Ok::<(), Box<dyn std::error::Error>>(())
```

 ## License

 Licensed under either of the Apache License, Version 2.0 or the MIT license,
 at your option.
*/

/// Core module: codec traits, the dispatch registry, tree-node access and the
/// fixed-pattern date codec.
pub mod core;

/// Error types for mapping operations.
pub mod error;

#[doc(inline)]
pub use error::*;

/// Codecs for the shipped domain models.
pub mod codec;

/// The domain models themselves.
pub mod model;
