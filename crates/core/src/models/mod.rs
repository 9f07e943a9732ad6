//! Data models for raw chain API shapes

mod account;
mod asset;
mod globals;
mod manabar;
mod rpc;

pub use account::*;
pub use asset::*;
pub use globals::*;
pub use manabar::*;
pub use rpc::*;
