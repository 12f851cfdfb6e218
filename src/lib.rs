//! # Databoard
//!
//! Upload a data file to an analysis backend and show the graphs it returns
//! as a dashboard of chart cards.
//!
//! ## Modules
//!
//! - [`graph`]: Graph descriptors and upload response decoding
//! - [`upload`]: Submit handling and the upload payload
//! - [`chart`]: Chart kinds and layout of a card's chart
//! - [`dashboard`]: Root dashboard state (graph list, card selections, status)
//! - [`client`]: HTTP multipart transport (`client` feature)
//! - [`config`]: TOML configuration with environment overrides (`client` feature)
//!
//! The core modules compile without the `client` feature so the browser
//! front end can share them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use databoard::{DashboardState, UploadClient, UploadPayload, UploadTransport};
//! use databoard::config::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UploadClient::new(ClientConfig::default())?;
//!     let mut state = DashboardState::new();
//!
//!     let payload = UploadPayload::from_path("sales.csv".as_ref())?;
//!     state.begin_upload();
//!     let result = client.upload(payload).await.map_err(Into::into);
//!     state.finish_upload(result);
//!
//!     for index in 0..state.graphs().len() {
//!         if let Some(chart) = state.chart(index) {
//!             println!("{}", chart.describe());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod dashboard;
pub mod graph;
pub mod upload;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod config;
#[cfg(feature = "client")]
pub mod logging;

// Re-export top-level types for convenience
pub use chart::{ChartKind, ChartSpec, Geometry, ParseChartKindError, Scene, Shape};

pub use dashboard::{CardState, DashboardState, FailureKind, UploadFailure, UploadStatus};

pub use graph::{decode_upload_response, DecodeError, GraphDescriptor};

pub use upload::{submit_first, UploadPayload, UPLOAD_FIELD};

#[cfg(feature = "client")]
pub use client::{ClientError, UploadClient, UploadTransport};

#[cfg(feature = "client")]
pub use config::{ClientConfig, Config, ConfigError, LoggingConfig};
