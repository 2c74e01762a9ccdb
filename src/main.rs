//! Gaming Leaderboard Dashboard
//!
//! Live leaderboard UI built with Leptos (WASM).
//!
//! # Features
//!
//! - Ranked player table fetched from the leaderboard API
//! - Full-snapshot live updates over a server-sent-events stream
//! - Configurable backend address
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the current standings over HTTP and then keeps
//! them current from the push stream for as long as the view is mounted.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
