//! Upload Form Logic
//!
//! Submit handling shared by the dashboard form and the CLI, plus the
//! payload sent to the analysis backend.

use std::io;
use std::path::Path;

/// Multipart field name the backend reads the file from
pub const UPLOAD_FIELD: &str = "file";

/// Hand the first selected file to `on_upload`.
///
/// Returns `false` without calling `on_upload` when nothing is selected.
pub fn submit_first<F, C>(files: impl IntoIterator<Item = F>, on_upload: C) -> bool
where
    C: FnOnce(F),
{
    match files.into_iter().next() {
        Some(file) => {
            on_upload(file);
            true
        }
        None => {
            tracing::debug!("Upload submitted without a file, ignoring");
            false
        }
    }
}

/// A single file on its way to the backend. Lives for one
/// submit-to-response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadPayload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a payload from disk
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| UPLOAD_FIELD.to_string());

        Ok(Self { file_name, bytes })
    }

    /// Content type guessed from the file extension
    pub fn content_type(&self) -> &'static str {
        let ext = Path::new(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => "text/csv",
            "tsv" => "text/tab-separated-values",
            "json" => "application/json",
            "txt" => "text/plain",
            "xls" => "application/vnd.ms-excel",
            "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            _ => "application/octet-stream",
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Write;

    #[test]
    fn test_submit_without_file_is_noop() {
        let called = Cell::new(false);

        let submitted = submit_first(Vec::<UploadPayload>::new(), |_| called.set(true));

        assert!(!submitted);
        assert!(!called.get());
    }

    #[test]
    fn test_submit_passes_first_file_only() {
        let files = vec![
            UploadPayload::new("first.csv", b"a,b".to_vec()),
            UploadPayload::new("second.csv", b"c,d".to_vec()),
        ];
        let mut received = Vec::new();

        assert!(submit_first(files, |f| received.push(f.file_name)));
        assert_eq!(received, vec!["first.csv"]);
    }

    #[test]
    fn test_payload_from_path() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"x,y\n1,2\n").unwrap();

        let payload = UploadPayload::from_path(file.path()).unwrap();

        assert!(payload.file_name.ends_with(".csv"));
        assert_eq!(payload.bytes, b"x,y\n1,2\n");
        assert_eq!(payload.content_type(), "text/csv");
    }

    #[test]
    fn test_payload_from_missing_path() {
        assert!(UploadPayload::from_path(Path::new("/definitely/not/here.csv")).is_err());
    }

    #[test]
    fn test_content_type_fallback() {
        assert_eq!(
            UploadPayload::new("blob", vec![1, 2]).content_type(),
            "application/octet-stream"
        );
        assert_eq!(UploadPayload::new("DATA.JSON", vec![]).content_type(), "application/json");
    }
}
