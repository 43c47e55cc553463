mod aggregate;
mod constants;
mod options;
mod round;
mod stats;
mod tally;

pub use aggregate::*;
pub use constants::*;
pub use options::*;
pub use round::*;
pub use stats::*;
pub use tally::*;
