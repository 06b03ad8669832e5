//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Each request is matched to
//! exactly one handler by method and path prefix, first match wins.

use crate::config::AppState;
use crate::handler::{csv, static_files, videos};
use crate::http::Body;
use crate::logger;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

pub const SAVE_CSV_PATH: &str = "/save-csv";
pub const VIDEO_LIST_PATH: &str = "/video-list";
pub const VIDEO_PREFIX: &str = "/videos/";

/// The four dispatch targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SaveCsv,
    VideoList,
    VideoStream,
    Static,
}

/// Match a request to its handler.
///
/// Precedence: CSV save, video list, video stream, static fallback. The
/// video prefix matches any method; everything else falls through to
/// static serving, including mismatched methods on the exact-match paths.
#[must_use]
pub fn match_route(method: &Method, path: &str) -> Route {
    if *method == Method::POST && path == SAVE_CSV_PATH {
        return Route::SaveCsv;
    }
    if *method == Method::GET && path == VIDEO_LIST_PATH {
        return Route::VideoList;
    }
    if path.starts_with(VIDEO_PREFIX) {
        return Route::VideoStream;
    }
    Route::Static
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let range_header = req
        .headers()
        .get("range")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let response = match match_route(&method, &path) {
        Route::SaveCsv => csv::save(req, &state).await,
        Route::VideoList => videos::list(&state).await,
        Route::VideoStream => videos::stream(&path, range_header.as_deref(), &state).await,
        Route::Static => static_files::serve(&path, &state).await,
    };

    if access_log {
        logger::log_response(response.status().as_u16());
    }

    Ok(response)
}
