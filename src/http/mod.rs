//! HTTP protocol layer module
//!
//! Range parsing, MIME lookup, and response builders, decoupled from the
//! business logic in the handlers.

pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used items
pub use range::parse_range_header;
pub use response::Body;
