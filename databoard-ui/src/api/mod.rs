//! API Module
//!
//! HTTP client for the analysis backend.

mod client;

pub use client::*;
