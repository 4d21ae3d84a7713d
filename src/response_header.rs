// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Response header model handed to checks.
//!
//! Keeps the raw header lines exactly as received (for highlighting) next to a
//! `(name, value)` index used for case-insensitive value lookups. Values are
//! indexed as text, so any value visible in a line is visible to lookups.

use crate::helpers::headers::value_text;
use hyper::header::HeaderName;
use hyper::HeaderMap;

#[derive(Debug, Clone, Default)]
pub struct ResponseHeader {
    status_line: Option<String>,
    lines: Vec<String>,
    fields: Vec<(HeaderName, String)>,
}

impl ResponseHeader {
    /// Parse a raw response head. Best effort: never fails.
    ///
    /// An optional `HTTP/...` status line comes first; header lines follow until
    /// the first blank line. Lines that cannot be indexed are still kept.
    pub fn parse(raw: &str) -> Self {
        let mut out = Self::default();
        let mut iter = raw.lines().map(|l| l.trim_end_matches('\r')).peekable();

        if let Some(first) = iter.peek() {
            if first.starts_with("HTTP/") {
                out.status_line = Some(first.to_string());
                iter.next();
            }
        }

        for line in iter {
            if line.is_empty() {
                break;
            }
            out.push_line(line);
        }

        out
    }

    /// Build the model from a map already held by the host.
    pub fn from_header_map(map: &HeaderMap) -> Self {
        let mut out = Self::default();
        for (name, value) in map.iter() {
            let v = value_text(value);
            out.lines.push(format!("{}: {}", name.as_str(), v));
            out.fields.push((name.clone(), v));
        }
        out
    }

    fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_string());

        // obs-fold continuation lines and colon-less garbage are not indexed
        if line.starts_with(' ') || line.starts_with('\t') {
            return;
        }
        let Some((name, value)) = line.split_once(':') else {
            return;
        };
        let Ok(name) = HeaderName::from_bytes(name.trim().as_bytes()) else {
            tracing::debug!(%line, "skipping header line with invalid name");
            return;
        };
        self.fields.push((name, value.trim().to_string()));
    }

    pub fn status_line(&self) -> Option<&str> {
        self.status_line.as_deref()
    }

    /// Every header line, case-preserved, in received order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// First value for `name`, case-insensitive.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n.as_str().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `name` in received order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(n, _)| n.as_str().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of indexed `(name, value)` fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
