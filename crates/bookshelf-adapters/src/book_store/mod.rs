//! Book repository implementations.

pub mod memory;

pub use memory::InMemoryBookRepository;
