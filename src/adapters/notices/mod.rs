//! Notice sink adapters.
//!
//! Implementations of the `NoticeSink` port.

mod memory;

pub use memory::InMemoryNoticeSink;
