pub mod engine;
pub mod value;

pub use crate::engine::*;
pub use crate::value::*;
