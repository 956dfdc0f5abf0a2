//! GiveChain Dashboard
//!
//! Blockchain donation dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live donation feed and aggregate statistics
//! - On-chain donations through a browser wallet (Sepolia)
//! - Backend-only recording for donations made elsewhere
//! - Donor history lookup
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the GiveChain API over HTTP and to the donation
//! contract through the wallet's injected EIP-1193 provider.

use leptos::*;

mod api;
mod app;
mod components;
mod eth;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
