/// Codec traits and the type-tag dispatch registry.
pub mod codec;

/// Fixed-pattern calendar-date parsing and formatting.
pub mod date;

/// Variant-narrowing access to generic JSON tree nodes.
pub mod node;
