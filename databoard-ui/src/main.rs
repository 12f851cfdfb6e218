//! Databoard Dashboard
//!
//! Data dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Upload a data file to the analysis backend
//! - One chart card per returned graph, each with its own chart type
//! - Dark mode toggle
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Graph decoding, chart layout and dashboard state come from the
//! `databoard` core crate; this crate owns the DOM, the canvas and the HTTP
//! upload.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
