//! API Routes
//!
//! Route handlers organized by functionality.

pub mod contract;
pub mod donations;
pub mod health;
pub mod statistics;
