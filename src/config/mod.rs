pub mod db;
pub mod plugin;

pub use db::*;
pub use plugin::*;
