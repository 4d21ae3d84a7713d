// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::checks::{Check, CheckContext};
use crate::response_header::ResponseHeader;
use crate::verdict::Verdict;

pub struct XContentTypeOptions;

impl Check for XContentTypeOptions {
    fn id(&self) -> &'static str {
        "x_content_type_options"
    }

    fn name(&self) -> &'static str {
        "X-Content-Type-Options"
    }

    fn column_name(&self) -> &'static str {
        "XCTO"
    }

    fn missing_message(&self) -> &'static str {
        "X-Content-Type-Options: nosniff is not set"
    }

    fn header_name(&self) -> &'static str {
        "X-Content-Type-Options"
    }

    fn check(&self, header: &ResponseHeader, _context: &mut CheckContext) -> Verdict {
        match header.get("x-content-type-options") {
            None => Verdict::fail("Missing", ""),
            Some(v) if v.trim().eq_ignore_ascii_case("nosniff") => Verdict::ok(v, v),
            Some(v) => Verdict::fail(v, v),
        }
    }

    fn green_patterns(&self) -> &[&str] {
        &["nosniff"]
    }
}
