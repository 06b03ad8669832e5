//! Request handler module
//!
//! Routing dispatch and the four request handlers: CSV save, video list,
//! video stream, and static assets.

pub mod csv;
pub mod router;
pub mod static_files;
pub mod videos;

// Re-export main entry point
pub use router::handle_request;
