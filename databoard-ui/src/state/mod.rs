//! State Management
//!
//! Dashboard state owned by the root component.

pub mod dashboard;

pub use dashboard::{AppState, ToastMessage, ToastVariant};
