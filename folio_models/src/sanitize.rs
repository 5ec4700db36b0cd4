//! Normalization applied to every contact form field before it is validated
//! or interpolated into an email.

/// Removes all control characters (including line breaks) and surrounding
/// whitespace. Used for values that may end up in mail headers.
pub fn single_line(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Like [`single_line`], but keeps line feeds and tabs. Carriage returns are
/// normalized to line feeds.
pub fn multi_line(input: &str) -> String {
    input
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect::<String>()
        .trim()
        .to_owned()
}
