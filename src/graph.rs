//! Graph Model
//!
//! The graph descriptors returned by the analysis backend and the typed
//! decode step that turns a raw `/upload` response body into a graph list.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Labels used when a descriptor carries no `labels` field
pub const PLACEHOLDER_LABELS: [&str; 3] = ["A", "B", "C"];

/// Values used when a descriptor carries no `data` field
pub const PLACEHOLDER_VALUES: [f64; 3] = [1.0, 2.0, 3.0];

/// The minimal data needed to render one chart: category labels plus a
/// single numeric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl GraphDescriptor {
    pub fn new<L: Into<String>>(labels: impl IntoIterator<Item = L>, data: Vec<f64>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            data,
        }
    }

    /// Stand-in descriptor for a card rendered without graph data
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_LABELS, PLACEHOLDER_VALUES.to_vec())
    }

    /// Number of plotted points (one per value)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Label/value pairs, one per value. Values without a label get "".
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.data.iter().enumerate().map(move |(i, value)| {
            let label = self.labels.get(i).map(String::as_str).unwrap_or("");
            (label, *value)
        })
    }
}

// ============================================
// Wire DTOs
// ============================================

/// Response body of `POST /upload`
#[derive(Debug, Deserialize)]
struct UploadResponseDto {
    #[serde(default)]
    graphs: Option<Vec<Option<GraphDto>>>,
}

#[derive(Debug, Deserialize)]
struct GraphDto {
    #[serde(default)]
    labels: Option<Vec<String>>,
    #[serde(default)]
    data: Option<Vec<f64>>,
}

impl From<GraphDto> for GraphDescriptor {
    fn from(dto: GraphDto) -> Self {
        let labels = dto.labels.unwrap_or_else(|| {
            PLACEHOLDER_LABELS.iter().map(|l| l.to_string()).collect()
        });
        let data = dto.data.unwrap_or_else(|| PLACEHOLDER_VALUES.to_vec());
        Self { labels, data }
    }
}

/// The backend answered, but not with something we can render
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed upload response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed upload response: expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Decode an upload response body into a graph list.
///
/// A missing or `null` `graphs` field yields an empty list; a `null` entry
/// inside it becomes the placeholder graph.
pub fn decode_upload_response(body: &str) -> Result<Vec<GraphDescriptor>, DecodeError> {
    // Structs also deserialize from JSON arrays, so anything that is not an
    // object is turned away before the typed decode.
    if !body.trim_start().starts_with('{') {
        let value: serde_json::Value = serde_json::from_str(body)?;
        return Err(DecodeError::NotAnObject(json_kind(&value)));
    }
    let response: UploadResponseDto = serde_json::from_str(body)?;

    let graphs: Vec<GraphDescriptor> = response
        .graphs
        .unwrap_or_default()
        .into_iter()
        .map(|graph| graph.map_or_else(GraphDescriptor::placeholder, GraphDescriptor::from))
        .collect();

    tracing::debug!(graphs = graphs.len(), "Decoded upload response");
    Ok(graphs)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_graph() {
        let graphs = decode_upload_response(r#"{"graphs": [{"labels": ["x"], "data": [5]}]}"#)
            .unwrap();

        assert_eq!(graphs, vec![GraphDescriptor::new(["x"], vec![5.0])]);
    }

    #[test]
    fn test_decode_missing_graphs_is_empty() {
        assert!(decode_upload_response("{}").unwrap().is_empty());
        assert!(decode_upload_response(r#"{"graphs": null}"#).unwrap().is_empty());
        assert!(decode_upload_response(r#"{"status": "ok"}"#).unwrap().is_empty());
    }

    #[test]
    fn test_decode_missing_fields_use_placeholders() {
        let graphs =
            decode_upload_response(r#"{"graphs": [{"labels": ["q1", "q2"]}, {}]}"#).unwrap();

        assert_eq!(graphs[0].labels, vec!["q1", "q2"]);
        assert_eq!(graphs[0].data, vec![1.0, 2.0, 3.0]);
        assert_eq!(graphs[1], GraphDescriptor::placeholder());
    }

    #[test]
    fn test_decode_null_entry_is_placeholder() {
        let graphs =
            decode_upload_response(r#"{"graphs": [null, {"labels": ["x"], "data": [5]}]}"#)
                .unwrap();

        assert_eq!(
            graphs,
            vec![
                GraphDescriptor::placeholder(),
                GraphDescriptor::new(["x"], vec![5.0]),
            ]
        );
    }

    #[test]
    fn test_decode_errors_keep_position() {
        let err = decode_upload_response("{\n  \"graphs\": [{\"data\": [\"five\"]}]\n}")
            .unwrap_err();

        match err {
            DecodeError::Json(e) => assert_eq!(e.line(), 2),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_decode_empty_arrays_stay_empty() {
        let graphs = decode_upload_response(r#"{"graphs": [{"labels": [], "data": []}]}"#)
            .unwrap();

        assert!(graphs[0].labels.is_empty());
        assert!(graphs[0].is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed_bodies() {
        assert!(decode_upload_response("not json").is_err());
        assert!(matches!(
            decode_upload_response("[]"),
            Err(DecodeError::NotAnObject("an array"))
        ));
        assert!(decode_upload_response("null").is_err());
        assert!(decode_upload_response(r#"{"graphs": {"labels": []}}"#).is_err());
        assert!(decode_upload_response(r#"{"graphs": [{"data": ["five"]}]}"#).is_err());
    }

    #[test]
    fn test_points_pad_missing_labels() {
        let graph = GraphDescriptor::new(["a"], vec![1.0, 2.0]);
        let points: Vec<_> = graph.points().collect();

        assert_eq!(points, vec![("a", 1.0), ("", 2.0)]);
    }
}
