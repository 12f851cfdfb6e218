//! HTTP Upload Client
//!
//! Posts the selected file to the analysis backend as multipart form data and
//! decodes the graph list it returns.

use databoard::{decode_upload_response, GraphDescriptor, UploadFailure, UPLOAD_FIELD};
use gloo_net::http::Request;

/// Default analysis backend upload endpoint
pub const DEFAULT_UPLOAD_URL: &str = "http://localhost:3000/upload";

const UPLOAD_URL_KEY: &str = "databoard_upload_url";

/// Get the upload URL from local storage or use default
pub fn get_upload_url() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(UPLOAD_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_UPLOAD_URL.to_string())
}

/// Upload one file and return the graphs the backend produced for it
pub async fn upload_file(file: &web_sys::File) -> Result<Vec<GraphDescriptor>, UploadFailure> {
    let form = web_sys::FormData::new()
        .map_err(|e| UploadFailure::request_failed(format!("Form build error: {:?}", e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| UploadFailure::request_failed(format!("Form build error: {:?}", e)))?;

    let response = Request::post(&get_upload_url())
        .body(form)
        .map_err(|e| UploadFailure::request_failed(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| UploadFailure::request_failed(format!("Network error: {}", e)))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(UploadFailure::request_failed(status_message(
            response.status(),
            &body,
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| UploadFailure::request_failed(format!("Network error: {}", e)))?;

    decode_upload_response(&body).map_err(UploadFailure::from)
}

fn status_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}
