//! Log sanitization utilities
//!
//! Catalog responses can run to tens of kilobytes (a full category listing,
//! long instruction texts). Bodies are cut down and flattened onto one line
//! before they reach the log.

/// Characters of a body kept in a log line.
const LOG_PREVIEW_CHARS: usize = 256;

/// Shorten a response body for logging.
///
/// Line breaks become spaces so a multi-line instruction text stays on one
/// log line. Anything past [`LOG_PREVIEW_CHARS`] characters is dropped and
/// replaced by a marker with the original byte length.
pub fn truncate_for_log(body: &str) -> String {
    let cut = body
        .char_indices()
        .nth(LOG_PREVIEW_CHARS)
        .map_or(body.len(), |(idx, _)| idx);

    let preview: String = body[..cut]
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect();

    if cut == body.len() {
        preview
    } else {
        format!("{preview}... [truncated, total {} bytes]", body.len())
    }
}
