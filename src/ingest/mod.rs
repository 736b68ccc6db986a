pub mod delta;
pub mod registry;

pub use delta::*;
pub use registry::*;
