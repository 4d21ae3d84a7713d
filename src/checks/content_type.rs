// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::checks::{Check, CheckContext};
use crate::response_header::ResponseHeader;
use crate::verdict::Verdict;

/// HTML responses must declare a charset so browsers do not sniff one.
pub struct ContentTypeCharset;

impl Check for ContentTypeCharset {
    fn id(&self) -> &'static str {
        "content_type"
    }

    fn name(&self) -> &'static str {
        "Content-Type"
    }

    fn column_name(&self) -> &'static str {
        "Content-Type"
    }

    fn missing_message(&self) -> &'static str {
        "Content-Type header is missing charset for text/html"
    }

    fn header_name(&self) -> &'static str {
        "Content-Type"
    }

    fn check(&self, header: &ResponseHeader, _context: &mut CheckContext) -> Verdict {
        let Some(value) = header.get("content-type") else {
            return Verdict::ok("No Content-Type", "");
        };
        if value.trim().is_empty() {
            return Verdict::ok("No Content-Type", value);
        }

        // Substring tests on purpose: `text/htmlx` counts as HTML and any
        // `charset=` occurrence counts as a declaration.
        let lower = value.to_ascii_lowercase();
        if lower.contains("text/html") && !lower.contains("charset=") {
            return Verdict::fail("No charset", value);
        }

        Verdict::ok(value, value)
    }

    fn green_patterns(&self) -> &[&str] {
        &["charset="]
    }
}
