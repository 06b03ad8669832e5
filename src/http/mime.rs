//! MIME type detection module
//!
//! Returns the Content-Type for a file extension via a fixed lookup table.

use std::path::Path;

/// Get the MIME Content-Type for a file extension (already lowercased)
#[must_use]
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("csv") => "text/csv; charset=utf-8",
        Some("json") => "application/json",

        // Video
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        Some("m4v") => "video/x-m4v",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",

        // Default
        _ => "application/octet-stream",
    }
}

/// Content-Type for a filesystem path, extension compared case-insensitively
#[must_use]
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    content_type(ext.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Some("csv")), "text/csv; charset=utf-8");
        assert_eq!(content_type(Some("mp4")), "video/mp4");
        assert_eq!(content_type(Some("mkv")), "video/x-matroska");
        assert_eq!(content_type(Some("png")), "image/png");
        assert_eq!(content_type(Some("jpg")), "image/jpeg");
        assert_eq!(content_type(Some("jpeg")), "image/jpeg");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type(None), "application/octet-stream");
    }

    #[test]
    fn test_path_lookup_is_case_insensitive() {
        assert_eq!(content_type_for(Path::new("CLIP.MP4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("a.WebM")), "video/webm");
        assert_eq!(
            content_type_for(Path::new("no-extension")),
            "application/octet-stream"
        );
    }
}
