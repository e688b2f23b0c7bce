//! Client-side file exports. Everything is generated from already-loaded rows
//! and handed to the browser as a `data:` URL download; no server round-trip.

pub mod calendar;
pub mod report;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub const CALENDAR_MIME: &str = "text/calendar";
pub const CSV_MIME: &str = "text/csv";
pub const TEXT_MIME: &str = "text/plain";

/// Wraps generated content as a base64 `data:` URL usable as a download href.
pub fn data_url(mime: &str, content: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the data URL envelope.
    ///
    /// Expected: mime prefix plus the base64 payload of the content.
    #[test]
    fn wraps_content_as_data_url() {
        assert_eq!(
            data_url(TEXT_MIME, "hola"),
            "data:text/plain;base64,aG9sYQ=="
        );
    }
}
