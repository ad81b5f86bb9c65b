//! Renders player command lines for log records.

const MAX_CHARS: usize = 80;

/// One-line, quoted rendering of a raw command line.
///
/// The line terminator is dropped and bytes that are not UTF-8 show as
/// `U+FFFD`. Quotes, backslashes and control characters are escaped, and input
/// longer than `MAX_CHARS` is cut with `...`.
pub fn command_preview(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let text = text.trim_end_matches(['\n', '\r']);
    let mut out = String::with_capacity(text.len().min(MAX_CHARS) + 5);
    out.push('"');
    for (count, ch) in text.chars().enumerate() {
        if count == MAX_CHARS {
            out.push_str("...");
            break;
        }
        out.extend(ch.escape_debug());
    }
    out.push('"');
    out
}
