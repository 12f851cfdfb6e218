//! Dashboard State
//!
//! The state owned by the root view: the current graph list, one chart-kind
//! selection per card, the upload status and the display mode. Every upload
//! result replaces the graph list wholesale.

use std::fmt;

use crate::chart::{ChartKind, ChartSpec};
use crate::graph::{DecodeError, GraphDescriptor};

/// Why an upload produced no graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network failure, timeout, or a non-success HTTP status
    RequestFailed,
    /// The backend answered with a body that is not a graph response
    MalformedResponse,
}

/// A failed upload, ready to be shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl UploadFailure {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::RequestFailed,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::MalformedResponse,
            message: message.into(),
        }
    }

    /// Whether submitting the same file again may succeed
    pub fn is_retryable(&self) -> bool {
        self.kind == FailureKind::RequestFailed
    }

    /// Short heading for the failure category
    pub fn title(&self) -> &'static str {
        match self.kind {
            FailureKind::RequestFailed => "Upload failed",
            FailureKind::MalformedResponse => "Unreadable response",
        }
    }
}

impl fmt::Display for UploadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message)
    }
}

impl From<DecodeError> for UploadFailure {
    fn from(e: DecodeError) -> Self {
        UploadFailure::malformed(e.to_string())
    }
}

/// Outcome of the most recent completed upload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Loaded { count: usize },
    Failed(UploadFailure),
}

/// Per-card selection, isolated from every other card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub kind: ChartKind,
}

/// Root view state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    graphs: Vec<GraphDescriptor>,
    cards: Vec<CardState>,
    status: UploadStatus,
    in_flight: usize,
    dark_mode: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graphs(&self) -> &[GraphDescriptor] {
        &self.graphs
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Whether any upload is still awaiting its response
    pub fn is_uploading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Record that a request has been sent
    pub fn begin_upload(&mut self) {
        self.in_flight += 1;
        self.status = UploadStatus::Uploading;
        tracing::debug!(in_flight = self.in_flight, "Upload started");
    }

    /// Apply the result of one upload.
    ///
    /// Success replaces the graph list; failure replaces it with an empty
    /// list. Concurrent uploads are not ordered: the last call wins.
    pub fn finish_upload(&mut self, result: Result<Vec<GraphDescriptor>, UploadFailure>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(graphs) => {
                tracing::info!(graphs = graphs.len(), "Upload completed");
                self.status = UploadStatus::Loaded { count: graphs.len() };
                self.replace_graphs(graphs);
            }
            Err(failure) => {
                tracing::warn!(
                    kind = ?failure.kind,
                    retryable = failure.is_retryable(),
                    "Upload failed: {}",
                    failure.message
                );
                self.status = UploadStatus::Failed(failure);
                self.replace_graphs(Vec::new());
            }
        }
    }

    fn replace_graphs(&mut self, graphs: Vec<GraphDescriptor>) {
        self.cards = vec![CardState::default(); graphs.len()];
        self.graphs = graphs;
    }

    /// Change one card's chart kind. Returns `false` for an unknown card.
    pub fn set_card_kind(&mut self, index: usize, kind: ChartKind) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Chart for the card at `index`
    pub fn chart(&self, index: usize) -> Option<ChartSpec> {
        let card = self.cards.get(index)?;
        Some(ChartSpec::new(self.graphs.get(index), card.kind))
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// CSS class applied to the root element
    pub fn theme_class(&self) -> &'static str {
        theme_class(self.dark_mode)
    }
}

/// CSS class for the given display mode
pub fn theme_class(dark_mode: bool) -> &'static str {
    if dark_mode {
        "dark"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::decode_upload_response;

    fn loaded(body: &str) -> DashboardState {
        let mut state = DashboardState::new();
        state.begin_upload();
        state.finish_upload(decode_upload_response(body).map_err(UploadFailure::from));
        state
    }

    #[test]
    fn test_upload_sets_exact_graph_list() {
        let state = loaded(r#"{"graphs": [{"labels": ["x"], "data": [5]}]}"#);

        assert_eq!(state.graphs(), &[GraphDescriptor::new(["x"], vec![5.0])]);
        assert_eq!(state.status(), &UploadStatus::Loaded { count: 1 });
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_response_without_graphs_gives_empty_list() {
        let state = loaded(r#"{"message": "done"}"#);

        assert!(state.graphs().is_empty());
        assert!(state.cards().is_empty());
        assert_eq!(state.status(), &UploadStatus::Loaded { count: 0 });
    }

    #[test]
    fn test_second_upload_replaces_first() {
        let mut state = loaded(
            r#"{"graphs": [{"labels": ["a"], "data": [1]}, {"labels": ["b"], "data": [2]},
                           {"labels": ["c"], "data": [3]}]}"#,
        );
        assert_eq!(state.graphs().len(), 3);

        state.begin_upload();
        state.finish_upload(Ok(vec![GraphDescriptor::new(["z"], vec![9.0])]));

        assert_eq!(state.graphs().len(), 1);
        assert_eq!(state.graphs()[0].labels, vec!["z"]);
        assert_eq!(state.cards().len(), 1);
    }

    #[test]
    fn test_card_selection_is_isolated() {
        let mut state = loaded(
            r#"{"graphs": [{"labels": ["a"], "data": [1]}, {"labels": ["b"], "data": [2]}]}"#,
        );

        assert!(state.set_card_kind(1, ChartKind::Line));

        assert_eq!(state.cards()[0].kind, ChartKind::Bar);
        assert_eq!(state.cards()[1].kind, ChartKind::Line);
        assert_eq!(state.chart(0).unwrap().kind, ChartKind::Bar);
        assert_eq!(state.chart(1).unwrap().kind, ChartKind::Line);
        assert!(!state.set_card_kind(2, ChartKind::Scatter));
    }

    #[test]
    fn test_new_upload_resets_card_selections() {
        let mut state = loaded(r#"{"graphs": [{"labels": ["a"], "data": [1]}]}"#);
        state.set_card_kind(0, ChartKind::Donut);

        state.begin_upload();
        state.finish_upload(Ok(vec![GraphDescriptor::placeholder()]));

        assert_eq!(state.cards()[0].kind, ChartKind::Bar);
    }

    #[test]
    fn test_request_failure_clears_graphs_and_is_retryable() {
        let mut state = loaded(r#"{"graphs": [{"labels": ["a"], "data": [1]}]}"#);

        state.begin_upload();
        state.finish_upload(Err(UploadFailure::request_failed("HTTP 502")));

        assert!(state.graphs().is_empty());
        match state.status() {
            UploadStatus::Failed(failure) => {
                assert!(failure.is_retryable());
                assert_eq!(failure.to_string(), "Upload failed: HTTP 502");
            }
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn test_malformed_response_is_distinct_failure() {
        let state = loaded("<html>oops</html>");

        match state.status() {
            UploadStatus::Failed(failure) => {
                assert_eq!(failure.kind, FailureKind::MalformedResponse);
                assert!(!failure.is_retryable());
            }
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn test_concurrent_uploads_last_result_wins() {
        let mut state = DashboardState::new();
        state.begin_upload();
        state.begin_upload();
        assert_eq!(state.in_flight(), 2);

        state.finish_upload(Ok(vec![GraphDescriptor::placeholder(); 2]));
        assert!(state.is_uploading());

        state.finish_upload(Ok(vec![GraphDescriptor::placeholder()]));
        assert!(!state.is_uploading());
        assert_eq!(state.graphs().len(), 1);
    }

    #[test]
    fn test_unmatched_finish_does_not_underflow() {
        let mut state = DashboardState::new();
        state.finish_upload(Ok(Vec::new()));
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_dark_mode_toggle() {
        let mut state = DashboardState::new();
        assert_eq!(state.theme_class(), "");

        state.toggle_dark_mode();
        assert!(state.dark_mode());
        assert_eq!(state.theme_class(), "dark");
    }
}
