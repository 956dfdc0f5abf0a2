//! Backend API communication

pub mod client;

pub use client::*;
