// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use hyper::Uri;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionRuleType {
    /// Case-insensitive exact match on the URL host.
    Host,
    /// Exact match on the URL path, or prefix match when the pattern ends in `*`.
    Path,
    /// Exact match on `"<METHOD> <full url>"`.
    Endpoint,
}

impl ExclusionRuleType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ExclusionRuleType::Host => "Host",
            ExclusionRuleType::Path => "Path",
            ExclusionRuleType::Endpoint => "Endpoint",
        }
    }
}

/// Immutable exclusion predicate. Equality and hashing use `id` only.
#[derive(Serialize, Debug, Clone)]
pub struct ExclusionRule {
    id: String,
    #[serde(rename = "type")]
    kind: ExclusionRuleType,
    pattern: String,
}

impl ExclusionRule {
    /// New rule with a generated id.
    pub fn new(kind: ExclusionRuleType, pattern: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), kind, pattern)
    }

    pub fn with_id(
        id: impl Into<String>,
        kind: ExclusionRuleType,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            pattern: pattern.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ExclusionRuleType {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether a request with `method` to `url` is suppressed by this rule.
    /// Unparseable URLs never match host or path rules.
    pub fn matches(&self, method: &str, url: &str) -> bool {
        match self.kind {
            ExclusionRuleType::Host => {
                extract_host(url).is_some_and(|h| h.eq_ignore_ascii_case(&self.pattern))
            }
            ExclusionRuleType::Path => {
                let Some(path) = extract_path(url) else {
                    return false;
                };
                match self.pattern.strip_suffix('*') {
                    Some(prefix) => path.starts_with(prefix),
                    None => path == self.pattern,
                }
            }
            ExclusionRuleType::Endpoint => self.pattern == format!("{} {}", method, url),
        }
    }
}

fn extract_host(url: &str) -> Option<String> {
    let uri = url.parse::<Uri>().ok()?;
    // Scheme-less input such as `example.com` is a path, not a host.
    uri.scheme()?;
    uri.host().map(str::to_string)
}

fn extract_path(url: &str) -> Option<String> {
    let uri = url.parse::<Uri>().ok()?;
    let path = uri.path();
    Some(if path.is_empty() { "/".to_string() } else { path.to_string() })
}

impl PartialEq for ExclusionRule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ExclusionRule {}

impl Hash for ExclusionRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ExclusionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.display_name(), self.pattern)
    }
}
