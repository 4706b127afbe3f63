pub mod key_value;

pub use key_value::{KeyValueStore, MemoryKeyValueStore, StoreError};
