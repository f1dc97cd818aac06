use memchr::memchr;

/// Remove inline `<...>` tags from a line of game text.
///
/// An unterminated tag swallows the rest of the string.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = memchr(b'<', rest.as_bytes()) {
        out.push_str(&rest[..open]);
        match memchr(b'>', rest[open..].as_bytes()) {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}
