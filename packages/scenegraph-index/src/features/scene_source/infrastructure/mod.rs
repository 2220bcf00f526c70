// Scene Source Infrastructure

pub mod filesystem;
pub mod in_memory;

pub use filesystem::FileSystemSource;
pub use in_memory::InMemorySource;
