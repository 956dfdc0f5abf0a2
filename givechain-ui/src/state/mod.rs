//! Application state

pub mod global;
pub mod wallet;
