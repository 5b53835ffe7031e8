//! Domain types populated and emitted by the codecs.
//!
//! All of these are plain mutable value holders: no identity beyond field
//! equality, strictly tree-shaped ownership, constructed fresh on every
//! mapping call.

mod order;
mod person;

pub use order::{Address, Customer, Order, OrderItem};
pub use person::Person;
