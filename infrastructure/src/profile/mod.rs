//! Profile storage adapters.

mod memory;

pub use memory::InMemoryProfileRepository;
