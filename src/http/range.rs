//! HTTP Range header parsing module
//!
//! Deliberately permissive: offsets are not validated against the file
//! size and malformed ranges degrade to a full-content response instead of
//! a 416. The whole policy sits behind `parse_range_header` so a stricter
//! one can be swapped in without touching the streaming path.

/// A requested byte window, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte position
    pub start: u64,
    /// Last byte position (inclusive)
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered; 0 when the range is inverted
    #[must_use]
    pub fn content_length(&self) -> u64 {
        self.end.checked_sub(self.start).map_or(0, |d| d + 1)
    }
}

/// Parse a `Range` header (`bytes=start-[end]`, single range only).
///
/// An omitted end defaults to the last byte of the file. The `bytes=` unit
/// prefix is tolerated but not required. Anything that does not parse as
/// `start-[end]` (non-numeric values, suffix ranges like `-500`,
/// multi-range lists) yields `None`, which callers treat as "no range":
/// the full file is served with status 200. Offsets beyond the end of the
/// file are passed through unchanged.
#[must_use]
pub fn parse_range_header(header: Option<&str>, file_size: u64) -> Option<ByteRange> {
    let header = header?;
    let spec = header.strip_prefix("bytes=").unwrap_or(header);
    let (start_str, end_str) = spec.split_once('-')?;

    let start = start_str.trim().parse::<u64>().ok()?;
    let end = if end_str.is_empty() {
        file_size.saturating_sub(1)
    } else {
        end_str.trim().parse::<u64>().ok()?
    };

    Some(ByteRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_header_means_full_content() {
        assert_eq!(parse_range_header(None, 1000), None);
    }

    #[test]
    fn standard_range() {
        let range = parse_range_header(Some("bytes=0-99"), 1000).unwrap();
        assert_eq!(range, ByteRange { start: 0, end: 99 });
        assert_eq!(range.content_length(), 100);
    }

    #[test]
    fn open_ended_range_defaults_to_last_byte() {
        let range = parse_range_header(Some("bytes=100-"), 1000).unwrap();
        assert_eq!(range, ByteRange { start: 100, end: 999 });
        assert_eq!(range.content_length(), 900);
    }

    #[test]
    fn bytes_prefix_is_optional() {
        let range = parse_range_header(Some("100-200"), 1000).unwrap();
        assert_eq!(range, ByteRange { start: 100, end: 200 });
    }

    #[test]
    fn tail_window_of_large_file() {
        let range = parse_range_header(Some("bytes=999900-999999"), 1_000_000).unwrap();
        assert_eq!(range.start, 999_900);
        assert_eq!(range.end, 999_999);
        assert_eq!(range.content_length(), 100);
    }

    #[test]
    fn malformed_ranges_fall_back_to_full_content() {
        assert_eq!(parse_range_header(Some("bytes=a-b"), 1000), None);
        assert_eq!(parse_range_header(Some("bytes=-500"), 1000), None);
        assert_eq!(parse_range_header(Some("bytes=0-9,20-29"), 1000), None);
        assert_eq!(parse_range_header(Some("garbage"), 1000), None);
    }

    #[test]
    fn out_of_bounds_offsets_pass_through() {
        let range = parse_range_header(Some("bytes=5000-6000"), 100).unwrap();
        assert_eq!(range, ByteRange { start: 5000, end: 6000 });
    }

    #[test]
    fn inverted_range_has_zero_length() {
        let range = ByteRange { start: 10, end: 3 };
        assert_eq!(range.content_length(), 0);
    }
}
