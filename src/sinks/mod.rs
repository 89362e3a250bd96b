//! Output sinks
//!
//! A logger writes to any `io::Write + Send`; these are the two it ships with.

pub mod console;
pub mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;
