//! Tree codecs for the order domain.
//!
//! The read and write shapes are deliberately asymmetric: the decoder accepts
//! `orderId`/`totalAmount`/`shippingAddress` and either a joined `name` or
//! split `firstName`/`lastName` members, while the encoder emits
//! `ID`/`amount`/`addresses` and always re-joins the name. The rename tables
//! in [`order_encoder`] are the single place the output scheme is defined.

/// Tree-to-object mapping for [`Order`](crate::model::Order) and its parts.
pub mod order_decoder;
/// Object-to-tree mapping under the renamed output scheme.
pub mod order_encoder;
