//! Percent-encoding for identifiers interpolated into API paths.
//!
//! Dynatrace identifiers are mostly URL-safe (`HOST-0123ABCD`, metric keys
//! such as `builtin:host.cpu.usage`), but settings object IDs are base64 and
//! may contain `/` or `+`, and extension names and token IDs are user-chosen.
//! Every such value goes through [`encode_path_segment`] before it becomes
//! part of a path.
//!
//! ```
//! use dynatrace_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("a/b+c=="), "a%2Fb%2Bc==");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters escaped inside a path segment.
///
/// RFC 3986 delimiters that would split or terminate the segment, plus `%`
/// so pre-encoded input is not decoded twice. `:` and `=` stay literal:
/// the first appears in metric keys and schema IDs, the second pads base64.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b';')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode `segment` for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
