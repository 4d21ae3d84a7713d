// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Shared test utilities to reduce duplication across test modules.

use crate::checks::{Check, CheckContext};
use crate::config::Config;
use crate::response_header::ResponseHeader;
use crate::verdict::Verdict;

/// Build a response head from `(name, value)` pairs, with a 200 status line.
pub fn make_test_header(pairs: &[(&str, &str)]) -> ResponseHeader {
    let mut raw = String::from("HTTP/1.1 200 OK\r\n");
    for (name, value) in pairs {
        raw.push_str(name);
        raw.push_str(": ");
        raw.push_str(value);
        raw.push_str("\r\n");
    }
    raw.push_str("\r\n");
    ResponseHeader::parse(&raw)
}

/// Run `check` against the given pairs with a fresh context.
pub fn run_check(check: &dyn Check, pairs: &[(&str, &str)]) -> (Verdict, CheckContext) {
    let header = make_test_header(pairs);
    let mut ctx = CheckContext::new();
    let verdict = check.check(&header, &mut ctx);
    (verdict, ctx)
}

/// Turn a check off the way a `[checks.<id>] enabled = false` table would.
pub fn disable_check(cfg: &mut Config, id: &str) {
    let mut table = toml::map::Map::new();
    table.insert("enabled".to_string(), toml::Value::Boolean(false));
    cfg.checks.insert(id.to_string(), toml::Value::Table(table));
}

/// Check with caller-supplied patterns whose verdict is always OK.
pub struct PatternCheck {
    header: &'static str,
    red: Vec<&'static str>,
    yellow: Vec<&'static str>,
    green: Vec<&'static str>,
}

impl PatternCheck {
    pub fn new(
        header: &'static str,
        red: &[&'static str],
        yellow: &[&'static str],
        green: &[&'static str],
    ) -> Self {
        Self {
            header,
            red: red.to_vec(),
            yellow: yellow.to_vec(),
            green: green.to_vec(),
        }
    }
}

impl Check for PatternCheck {
    fn id(&self) -> &'static str {
        "test"
    }

    fn name(&self) -> &'static str {
        "Test"
    }

    fn column_name(&self) -> &'static str {
        "Test"
    }

    fn missing_message(&self) -> &'static str {
        "Test missing"
    }

    fn header_name(&self) -> &'static str {
        self.header
    }

    fn check(&self, _header: &ResponseHeader, _context: &mut CheckContext) -> Verdict {
        Verdict::ok("ok", "ok")
    }

    fn red_patterns(&self) -> &[&str] {
        &self.red
    }

    fn yellow_patterns(&self) -> &[&str] {
        &self.yellow
    }

    fn green_patterns(&self) -> &[&str] {
        &self.green
    }
}
