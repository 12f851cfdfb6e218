//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod chat_box;
pub mod graph_card;
pub mod loading;
pub mod sidebar;
pub mod toast;
pub mod upload_form;

pub use chart::ChartCanvas;
pub use chat_box::ChatBox;
pub use graph_card::GraphCard;
pub use loading::InlineLoading;
pub use sidebar::Sidebar;
pub use toast::Toast;
pub use upload_form::UploadForm;
