pub mod config;
pub mod memory;
pub mod publisher;

pub use config::Config;
pub use memory::MemoryNoteStore;
pub use publisher::LogPublisher;
