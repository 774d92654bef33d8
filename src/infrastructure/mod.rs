//! Storage adapters implementing the `KeyValueStore` port.

pub mod in_memory;
pub mod rocksdb;
