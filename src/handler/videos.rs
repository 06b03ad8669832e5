//! Video list and streaming handlers
//!
//! Listing filters the media directory against the extension allow-list;
//! streaming serves byte ranges for browser seeking without ever buffering
//! a whole file.

use crate::config::AppState;
use crate::handler::router::VIDEO_PREFIX;
use crate::http::{mime, range, response, Body};
use crate::logger;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::path::Path;

/// List media filenames as a JSON array of strings
pub async fn list(state: &AppState) -> Response<Body> {
    match state.media.list().await {
        Ok(names) => match serde_json::to_string(&names) {
            Ok(payload) => response::json(payload),
            Err(e) => {
                logger::log_error(&format!("Failed to serialize video list: {e}"));
                response::error_json(&e.to_string())
            }
        },
        Err(e) => {
            logger::log_error(&format!("Failed to read media directory: {e}"));
            response::error_json(&e.to_string())
        }
    }
}

/// Extract the requested filename from a `/videos/...` path.
///
/// The query string is cut off, then the remainder percent-decoded.
#[must_use]
pub fn video_name(path: &str) -> String {
    let name = path.strip_prefix(VIDEO_PREFIX).unwrap_or(path);
    let name = name.split('?').next().unwrap_or(name);
    percent_decode_str(name).decode_utf8_lossy().into_owned()
}

/// Stream a video file, honoring a byte-range request when present.
///
/// Any stat failure (missing file, permission denial, broken symlink)
/// collapses to a uniform 404. Range offsets are taken as parsed; see
/// `http::range` for the policy.
pub async fn stream(path: &str, range_header: Option<&str>, state: &AppState) -> Response<Body> {
    let name = video_name(path);

    let size = match state.media.len(&name).await {
        Ok(size) => size,
        Err(_) => return response::not_found(),
    };

    let content_type = mime::content_type_for(Path::new(&name));

    match range::parse_range_header(range_header, size) {
        Some(r) => {
            let reader = match state.media.open_range(&name, r.start, r.content_length()).await {
                Ok(reader) => reader,
                Err(_) => return response::not_found(),
            };
            response::partial(response::stream_body(reader), content_type, r, size)
        }
        None => {
            let reader = match state.media.open_range(&name, 0, size).await {
                Ok(reader) => reader,
                Err(_) => return response::not_found(),
            };
            response::stream(response::stream_body(reader), content_type, size)
        }
    }
}
