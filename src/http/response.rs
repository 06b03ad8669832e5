//! HTTP response building module
//!
//! Builders for the response shapes the handlers produce. Every builder
//! falls back to a bare response on a header construction error instead of
//! panicking.

use crate::http::range::ByteRange;
use futures_util::TryStreamExt;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use hyper::Response;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Unified body type: buffered bytes or a bounded file stream
pub type Body = BoxBody<Bytes, std::io::Error>;

/// Wrap buffered bytes as a response body
pub fn full(data: impl Into<Bytes>) -> Body {
    Full::new(data.into()).map_err(|e| match e {}).boxed()
}

/// Wrap a bounded reader as a streaming response body.
///
/// The reader (and its file handle) is dropped when the body is, including
/// on client disconnect mid-stream.
pub fn stream_body(reader: impl AsyncRead + Send + Sync + 'static) -> Body {
    let stream = ReaderStream::new(reader).map_ok(Frame::data);
    StreamBody::new(stream).boxed()
}

/// Build a 200 plain-text response
pub fn ok_text(message: &'static str) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .body(full(message))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(full(message))
        })
}

/// Build a 200 JSON response
pub fn json(payload: String) -> Response<Body> {
    let content_length = payload.len();
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(full(payload))
        .unwrap_or_else(|e| {
            log_build_error("200 JSON", &e);
            Response::new(full(Bytes::new()))
        })
}

/// Build a 200 response for a fully buffered asset
pub fn asset(content: Vec<u8>, content_type: &'static str) -> Response<Body> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(full(content))
        .unwrap_or_else(|e| {
            log_build_error("200 asset", &e);
            Response::new(full(Bytes::new()))
        })
}

/// Build a 404 Not Found response
pub fn not_found() -> Response<Body> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(full("Not found"))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(full("Not found"))
        })
}

/// Build a 500 response with a plain-text error description
pub fn error_text(message: &str) -> Response<Body> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(full(message.to_string()))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(full(Bytes::new()))
        })
}

/// Build a 500 response with a JSON `{"error": ...}` body
pub fn error_json(message: &str) -> Response<Body> {
    let payload = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(500)
        .header("Content-Type", "application/json")
        .body(full(payload))
        .unwrap_or_else(|e| {
            log_build_error("500 JSON", &e);
            Response::new(full(Bytes::new()))
        })
}

/// Build a 200 response streaming a whole file
pub fn stream(body: Body, content_type: &'static str, size: u64) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", size)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("200 stream", &e);
            Response::new(full(Bytes::new()))
        })
}

/// Build a 206 Partial Content response streaming one byte window
pub fn partial(
    body: Body,
    content_type: &'static str,
    range: ByteRange,
    total_size: u64,
) -> Response<Body> {
    Response::builder()
        .status(206)
        .header("Content-Type", content_type)
        .header("Content-Length", range.content_length())
        .header(
            "Content-Range",
            format!("bytes {}-{}/{total_size}", range.start, range.end),
        )
        .header("Accept-Ranges", "bytes")
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("206", &e);
            Response::new(full(Bytes::new()))
        })
}

/// Log a response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
