// Adapters layer: concrete implementations of the domain ports.

pub mod memory_host;

pub use memory_host::InMemoryHost;
