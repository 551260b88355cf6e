//! Machine integration: memory map, soft switches, keyboard translation,
//! and the system driver.

pub mod apple_memory;
pub mod apple_system;
pub mod keys;

pub use apple_memory::{AppleMemory, RAM_SIZE, ROM_SIZE, ROM_START};
pub use apple_system::AppleSystem;
