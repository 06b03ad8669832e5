//! CSV save handler
//!
//! Overwrites the configured CSV file with the raw request body. No
//! structure validation: any byte content is accepted and stored as-is.

use crate::config::AppState;
use crate::http::{response, Body};
use crate::logger;
use http_body_util::BodyExt;
use hyper::{Request, Response};

/// Collect the request body and replace the CSV file with it.
///
/// 200 `"OK"` on success; 500 with the underlying I/O failure description
/// otherwise. Retrying with the same body yields the same final state.
pub async fn save(req: Request<hyper::body::Incoming>, state: &AppState) -> Response<Body> {
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to read request body: {e}"));
            return response::error_text(&format!("Error: {e}"));
        }
    };

    match state.csv.save(&body).await {
        Ok(()) => response::ok_text("OK"),
        Err(e) => {
            logger::log_error(&format!("Failed to write CSV file: {e}"));
            response::error_text(&format!("Error: {e}"))
        }
    }
}
