// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::checks::{Check, CheckContext};
use crate::response_header::ResponseHeader;
use crate::verdict::Verdict;

pub struct StrictTransportSecurity;

impl Check for StrictTransportSecurity {
    fn id(&self) -> &'static str {
        "strict_transport_security"
    }

    fn name(&self) -> &'static str {
        "Strict-Transport-Security"
    }

    fn column_name(&self) -> &'static str {
        "HSTS"
    }

    fn missing_message(&self) -> &'static str {
        "Strict-Transport-Security is not set"
    }

    fn header_name(&self) -> &'static str {
        "Strict-Transport-Security"
    }

    fn check(&self, header: &ResponseHeader, _context: &mut CheckContext) -> Verdict {
        let Some(value) = header.get("strict-transport-security") else {
            return Verdict::fail("Missing", "");
        };
        let value = value.trim();
        if value.is_empty() {
            return Verdict::fail("Missing", "");
        }

        let max_age = crate::helpers::headers::parse_directives(value)
            .find(|(name, _)| name.eq_ignore_ascii_case("max-age"))
            .map(|(_, v)| v.trim_matches('"'));

        match max_age.map(str::parse::<u64>) {
            Some(Ok(0)) => Verdict::warn("max-age=0", value),
            Some(Ok(_)) => Verdict::ok(value, value),
            Some(Err(_)) => Verdict::fail("Invalid max-age", value),
            None => Verdict::fail("No max-age", value),
        }
    }

    fn green_patterns(&self) -> &[&str] {
        &["max-age", "includesubdomains", "preload"]
    }
}
