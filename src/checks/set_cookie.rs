// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::checks::{Check, CheckContext};
use crate::helpers::headers::truncate_display;
use crate::response_header::ResponseHeader;
use crate::verdict::Verdict;

/// Context key holding every `Set-Cookie` value seen in the pass.
pub const CONTEXT_KEY: &str = "set_cookies";

/// Longest cookie text shown before truncation.
pub const MAX_DISPLAY_LEN: usize = 100;

/// Every cookie set by the response must carry `Secure`.
pub struct SetCookieSecure;

/// Loose flag test: lowercased text must contain `" secure"`.
///
/// `Secure` as the very first attribute is missed and the word inside an
/// unrelated value is accepted. Kept as-is; reports built on this check rely on
/// the exact behavior.
pub fn has_secure_flag(cookie: &str) -> bool {
    cookie.to_ascii_lowercase().contains(" secure")
}

impl Check for SetCookieSecure {
    fn id(&self) -> &'static str {
        "set_cookie"
    }

    fn name(&self) -> &'static str {
        "Cookies"
    }

    fn column_name(&self) -> &'static str {
        "Cookies"
    }

    fn missing_message(&self) -> &'static str {
        "Set-Cookie is missing the Secure flag"
    }

    fn header_name(&self) -> &'static str {
        "Set-Cookie"
    }

    fn check(&self, header: &ResponseHeader, context: &mut CheckContext) -> Verdict {
        let cookies: Vec<String> = header
            .get_all("set-cookie")
            .into_iter()
            .map(str::to_string)
            .collect();
        context.insert(CONTEXT_KEY, &cookies);

        if cookies.is_empty() {
            return Verdict::ok("No cookies", "");
        }

        let raw = cookies.join("\n");
        match cookies.iter().find(|c| !has_secure_flag(c)) {
            Some(insecure) => Verdict::fail(truncate_display(insecure, MAX_DISPLAY_LEN), raw),
            None => Verdict::ok(truncate_display(&cookies.join("; "), MAX_DISPLAY_LEN), raw),
        }
    }

    fn yellow_patterns(&self) -> &[&str] {
        &["samesite=none"]
    }

    fn green_patterns(&self) -> &[&str] {
        &["secure", "httponly"]
    }
}
