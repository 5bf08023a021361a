//! Order store adapters.
//!
//! Implementations of the `OrderStore` port.

mod memory;

pub use memory::InMemoryOrderStore;
