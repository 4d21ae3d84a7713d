// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use hyper::header::HeaderValue;

/// Header value as text. Bytes that are not valid UTF-8 become U+FFFD, so a
/// value is never dropped.
pub fn value_text(value: &HeaderValue) -> String {
    match value.to_str() {
        Ok(s) => s.to_string(),
        Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
    }
}

/// Parse a comma-separated list of header values (e.g., Pragma, Cache-Control).
///
/// This iterator splits by comma, trims whitespace, and skips empty parts.
pub fn parse_list_header(val: &str) -> impl Iterator<Item = &str> {
    val.split(',').map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Parse `;`-separated directives into `(name, value)` pairs.
///
/// Names are trimmed but keep their case; a directive without `=` yields an
/// empty value.
pub fn parse_directives(val: &str) -> impl Iterator<Item = (&str, &str)> {
    val.split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|d| match d.split_once('=') {
            Some((n, v)) => (n.trim(), v.trim()),
            None => (d, ""),
        })
}

/// ASCII case-insensitive prefix test that never panics on char boundaries.
pub fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Shorten `s` to `max` characters, appending `...` when anything was cut.
pub fn truncate_display(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
