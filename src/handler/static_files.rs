//! Static asset handler
//!
//! Serves files from the asset root with `/` aliased to the index
//! document. No directory listing, no index search inside subdirectories.

use crate::config::AppState;
use crate::http::{mime, response, Body};
use hyper::Response;

/// Serve a file from the asset root. Any read failure yields 404.
pub async fn serve(path: &str, state: &AppState) -> Response<Body> {
    match state.assets.read(path).await {
        Ok((resolved, content)) => {
            let content_type = mime::content_type_for(&resolved);
            response::asset(content, content_type)
        }
        Err(_) => response::not_found(),
    }
}
