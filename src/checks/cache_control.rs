// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::checks::{Check, CheckContext};
use crate::response_header::ResponseHeader;
use crate::verdict::Verdict;

/// Directives that together keep sensitive responses out of every cache.
/// Matched as case-sensitive substrings of the joined Cache-Control value.
const REQUIRED_DIRECTIVES: &[&str] = &["private", "no-store", "no-cache", "must-revalidate"];

pub struct CacheControl;

impl Check for CacheControl {
    fn id(&self) -> &'static str {
        "cache_control"
    }

    fn name(&self) -> &'static str {
        "Cache-Control"
    }

    fn column_name(&self) -> &'static str {
        "Cache-Control"
    }

    fn missing_message(&self) -> &'static str {
        "Cache-Control is not configured for sensitive data protection"
    }

    fn header_name(&self) -> &'static str {
        "Cache-Control"
    }

    fn check(&self, header: &ResponseHeader, _context: &mut CheckContext) -> Verdict {
        let cache_control = header.get_all("cache-control").join(", ");
        let pragma = header.get_all("pragma").join(", ");
        let cc = cache_control.trim();
        let pragma = pragma.trim();

        if cc.is_empty() {
            if pragma.is_empty() {
                return Verdict::ok("No Cache-Control or Pragma", "");
            }
            return Verdict::warn(format!("Pragma: {}", pragma), pragma);
        }

        let has_directives = REQUIRED_DIRECTIVES.iter().all(|d| cc.contains(d));
        let has_pragma = crate::helpers::headers::parse_list_header(pragma)
            .any(|p| p.eq_ignore_ascii_case("no-cache"));

        if has_directives && has_pragma {
            Verdict::ok(cc, cc)
        } else {
            Verdict::warn(cc, cc)
        }
    }

    fn yellow_patterns(&self) -> &[&str] {
        &["public", "max-age"]
    }

    fn green_patterns(&self) -> &[&str] {
        REQUIRED_DIRECTIVES
    }

    fn affects_overall_status(&self) -> bool {
        false
    }
}
