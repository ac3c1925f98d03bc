// ABOUTME: HTTP packaging glue for compiled PDF artifacts
// ABOUTME: Wraps PDF bytes into an http::Response with content-type and filename headers

use http::{header, Response, StatusCode};

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Wrap PDF bytes into a response served inline in the browser
pub fn pdf_response(bytes: Vec<u8>, filename: &str) -> http::Result<Response<Vec<u8>>> {
    build(bytes, filename, "inline")
}

/// Wrap PDF bytes into a response offered as a download
pub fn pdf_attachment(bytes: Vec<u8>, filename: &str) -> http::Result<Response<Vec<u8>>> {
    build(bytes, filename, "attachment")
}

fn build(bytes: Vec<u8>, filename: &str, disposition: &str) -> http::Result<Response<Vec<u8>>> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, PDF_CONTENT_TYPE)
        .header(
            header::CONTENT_DISPOSITION,
            format!("{disposition}; filename=\"{}\"", sanitize(filename)),
        )
        .body(bytes)
}

// Quotes and control characters would corrupt the header value
fn sanitize(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if c == '"' || c.is_control() { '_' } else { c })
        .collect()
}
