pub mod action;
pub mod coin;
pub mod config;
pub mod engine;
pub mod error;
pub mod face;
pub mod game_state;
pub mod outcome;
pub mod sequence;
pub mod window;

pub use crate::action::*;
pub use crate::coin::*;
pub use crate::config::*;
pub use crate::engine::*;
pub use crate::error::*;
pub use crate::face::*;
pub use crate::game_state::*;
pub use crate::outcome::*;
pub use crate::sequence::*;
pub use crate::window::*;
