//! Host streams that leveled log content is echoed to

mod traits;
mod console;
mod memory;

pub use traits::{Host, SharedHost, Stream};
pub use console::ConsoleHost;
pub use memory::MemoryHost;
