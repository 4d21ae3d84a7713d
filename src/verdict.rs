// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Tri-state outcome produced by a single check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict status. Ordered so that `max` yields the worst outcome.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warn,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warn => "WARN",
            Status::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one check against one response's headers.
///
/// `display_value` is what the operator sees in the report column and
/// `raw_value` is the header text that led to the verdict.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    status: Status,
    display_value: String,
    raw_value: String,
}

impl Verdict {
    /// Missing display value defaults to the status name, missing raw value to "".
    pub fn new(status: Status, display_value: Option<String>, raw_value: Option<String>) -> Self {
        Self {
            status,
            display_value: display_value.unwrap_or_else(|| status.as_str().to_string()),
            raw_value: raw_value.unwrap_or_default(),
        }
    }

    pub fn ok(display_value: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self::new(Status::Ok, Some(display_value.into()), Some(raw_value.into()))
    }

    pub fn warn(display_value: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self::new(Status::Warn, Some(display_value.into()), Some(raw_value.into()))
    }

    pub fn fail(display_value: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self::new(Status::Fail, Some(display_value.into()), Some(raw_value.into()))
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    pub fn is_warn(&self) -> bool {
        self.status == Status::Warn
    }

    pub fn is_fail(&self) -> bool {
        self.status == Status::Fail
    }
}
