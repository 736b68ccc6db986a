pub mod interval;
pub mod window;
pub mod builder;
pub mod shaping;
pub mod pipeline;

pub use interval::*;
pub use window::*;
pub use builder::*;
pub use shaping::*;
pub use pipeline::*;
