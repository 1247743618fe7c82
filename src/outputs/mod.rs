//! Output implementations

pub mod default;
pub mod file;
pub mod memory;

pub use default::DefaultOutput;
pub use file::FileOutput;
pub use memory::MemoryOutput;

pub use crate::core::LogOutput;
