pub mod queue;
pub mod registry;
pub mod scheduler;
pub mod types;


pub use queue::*;
pub use registry::*;
pub use scheduler::*;
pub use types::*;
