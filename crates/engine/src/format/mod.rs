//! Display formatters for counts, cooldowns, and timestamps

mod number;
mod time;

pub use number::*;
pub use time::*;
