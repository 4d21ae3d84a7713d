// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::response_header::ResponseHeader;
use crate::verdict::Verdict;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Contract implemented by every header check.
///
/// Verdict logic (`check`) is independent from the substring patterns used for
/// highlighting; see [`crate::highlight`] for how those patterns are painted.
pub trait Check: Send + Sync {
    /// Stable identifier used as the configuration key.
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn column_name(&self) -> &'static str;

    fn missing_message(&self) -> &'static str;

    /// Canonical header name this check owns, e.g. `Cache-Control`.
    fn header_name(&self) -> &'static str;

    /// Evaluate the full header set. Must not fail on malformed input.
    fn check(&self, header: &ResponseHeader, context: &mut CheckContext) -> Verdict;

    /// Case-insensitive prefix test against `<header_name>:`.
    fn matches_header_line(&self, line: &str) -> bool {
        let name = self.header_name();
        !line.is_empty()
            && crate::helpers::headers::starts_with_ignore_ascii_case(line, name)
            && line[name.len()..].starts_with(':')
    }

    fn red_patterns(&self) -> &[&str] {
        &[]
    }

    fn yellow_patterns(&self) -> &[&str] {
        &[]
    }

    fn green_patterns(&self) -> &[&str] {
        &[]
    }

    fn affects_overall_status(&self) -> bool {
        true
    }
}

/// Scratch mapping shared by the checks of a single analysis pass.
///
/// A fresh context must be created for every analyzed header set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CheckContext {
    values: serde_json::Map<String, serde_json::Value>,
}

impl CheckContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, replacing any previous one.
    ///
    /// Values that cannot be represented as JSON are dropped with a warning.
    pub fn insert<T: Serialize>(&mut self, key: &str, value: T) {
        match serde_json::to_value(value) {
            Ok(v) => {
                self.values.insert(key.to_string(), v);
            }
            Err(e) => tracing::warn!(%key, %e, "dropping unserializable context value"),
        }
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Typed read; `None` when absent or of a different shape.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub mod cache_control;
pub mod content_type;
pub mod set_cookie;
pub mod strict_transport_security;
pub mod x_content_type_options;

/// Every built-in check, in report order.
pub const CHECKS: &[&dyn Check] = &[
    &strict_transport_security::StrictTransportSecurity,
    &x_content_type_options::XContentTypeOptions,
    &content_type::ContentTypeCharset,
    &set_cookie::SetCookieSecure,
    &cache_control::CacheControl,
];

/// Look up a built-in check by its configuration id.
pub fn find(id: &str) -> Option<&'static dyn Check> {
    CHECKS.iter().copied().find(|c| c.id() == id)
}
