//! Dashboard State
//!
//! Reactive wrapper around the core [`DashboardState`]. Created once by the
//! root component and handed to children as a prop.

use databoard::{ChartKind, DashboardState, GraphDescriptor, UploadFailure, UploadStatus};
use leptos::*;

use crate::api;

/// Signals shared by the dashboard's components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Graph list, card selections, upload status and display mode
    pub dashboard: RwSignal<DashboardState>,
    /// When the most recent upload finished (ms since epoch)
    pub last_upload: RwSignal<Option<i64>>,
    /// Currently visible toast
    pub toast: RwSignal<Option<ToastMessage>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub text: String,
    pub variant: ToastVariant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dashboard: create_rw_signal(DashboardState::new()),
            last_upload: create_rw_signal(None),
            toast: create_rw_signal(None),
        }
    }

    /// Send `file` to the backend and apply the result when it arrives.
    ///
    /// Nothing stops a second upload while one is pending; whichever
    /// response lands last decides the graph list.
    pub fn upload(self, file: web_sys::File) {
        self.dashboard.update(|d| d.begin_upload());

        spawn_local(async move {
            let result = api::upload_file(&file).await;

            if let Err(failure) = &result {
                web_sys::console::error_1(&format!("{}", failure).into());
            }

            let toast = toast_for(&result);
            self.dashboard.update(|d| d.finish_upload(result));
            self.last_upload
                .set(Some(chrono::Utc::now().timestamp_millis()));
            self.show_toast(toast);
        });
    }

    pub fn set_card_kind(&self, index: usize, kind: ChartKind) {
        self.dashboard.update(|d| {
            d.set_card_kind(index, kind);
        });
    }

    pub fn toggle_dark_mode(&self) {
        self.dashboard.update(|d| d.toggle_dark_mode());
    }

    pub fn is_uploading(&self) -> bool {
        self.dashboard.with(|d| d.is_uploading())
    }

    /// Show a toast (auto-clears after timeout unless replaced)
    pub fn show_toast(&self, toast: ToastMessage) {
        let timeout_ms = match toast.variant {
            ToastVariant::Success => 3000,
            ToastVariant::Error => 5000,
        };
        self.toast.set(Some(toast.clone()));

        let toast_signal = self.toast;
        gloo_timers::callback::Timeout::new(timeout_ms, move || {
            toast_signal.update(|current| {
                if current.as_ref() == Some(&toast) {
                    *current = None;
                }
            });
        })
        .forget();
    }
}

/// Toast announcing the outcome of an upload
pub fn toast_for(result: &Result<Vec<GraphDescriptor>, UploadFailure>) -> ToastMessage {
    match result {
        Ok(graphs) => ToastMessage {
            text: format!("Loaded {}", graph_count(graphs.len())),
            variant: ToastVariant::Success,
        },
        Err(failure) => ToastMessage {
            text: failure.to_string(),
            variant: ToastVariant::Error,
        },
    }
}

/// Status line under the upload form. `None` when there is nothing to say.
pub fn status_text(status: &UploadStatus) -> Option<String> {
    match status {
        UploadStatus::Idle => None,
        UploadStatus::Uploading => Some("Uploading...".to_string()),
        UploadStatus::Loaded { count: 0 } => {
            Some("The backend returned no graphs for this file.".to_string())
        }
        UploadStatus::Loaded { count } => Some(format!("Showing {}.", graph_count(*count))),
        UploadStatus::Failed(failure) if failure.is_retryable() => {
            Some(format!("{}. Check the backend and upload again.", failure))
        }
        UploadStatus::Failed(failure) => Some(failure.to_string()),
    }
}

/// Footer text for the last completed upload
pub fn last_upload_text(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| format!("Last upload: {}", dt.format("%H:%M:%S")))
        .unwrap_or_else(|| "No uploads yet".to_string())
}

fn graph_count(count: usize) -> String {
    if count == 1 {
        "1 graph".to_string()
    } else {
        format!("{} graphs", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_for_success_and_failure() {
        let ok = toast_for(&Ok(vec![GraphDescriptor::placeholder()]));
        assert_eq!(ok.text, "Loaded 1 graph");
        assert_eq!(ok.variant, ToastVariant::Success);

        let err = toast_for(&Err(UploadFailure::malformed("not json")));
        assert_eq!(err.text, "Unreadable response: not json");
        assert_eq!(err.variant, ToastVariant::Error);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(&UploadStatus::Idle), None);
        assert_eq!(
            status_text(&UploadStatus::Loaded { count: 3 }).as_deref(),
            Some("Showing 3 graphs.")
        );

        let retry = status_text(&UploadStatus::Failed(UploadFailure::request_failed("HTTP 502")));
        assert_eq!(
            retry.as_deref(),
            Some("Upload failed: HTTP 502. Check the backend and upload again.")
        );

        let malformed = status_text(&UploadStatus::Failed(UploadFailure::malformed("bad")));
        assert_eq!(malformed.as_deref(), Some("Unreadable response: bad"));
    }

    #[test]
    fn test_last_upload_text() {
        assert_eq!(last_upload_text(None), "No uploads yet");
        assert_eq!(last_upload_text(Some(0)), "Last upload: 00:00:00");
    }
}
