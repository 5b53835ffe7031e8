//! Hand-written codecs for the shipped domain models, plus the sink that
//! consumes their output.

/// Tree codecs for the order domain (asymmetric read/write shapes).
pub mod order;

/// Tree and token-stream codecs for the flat person domain.
pub mod person;

/// Text emission for encoded trees, with a pretty-printing toggle.
pub mod tree_writer;

use crate::core::codec::CodecRegistry;
use crate::model::{Address, Customer, Order, OrderItem, Person};

/// A registry pre-populated with every codec this crate ships, keyed by the
/// type tags callers use for runtime dispatch.
pub fn default_registry() -> CodecRegistry {
    let mut registry = CodecRegistry::new();
    registry.register::<Order>("order");
    registry.register::<Customer>("customer");
    registry.register::<Address>("address");
    registry.register::<OrderItem>("orderItem");
    registry.register::<Person>("person");
    registry
}
