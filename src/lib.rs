// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Security verdicts for HTTP response headers.
//!
//! Checks inspect a parsed response head and return OK/WARN/FAIL verdicts, the
//! highlighter maps those verdicts back onto the raw header lines, and the
//! exclusion registry decides which requests are not reported at all.

pub mod checks;
pub mod config;
pub mod exclusion;
pub mod helpers;
pub mod highlight;
pub mod lint;
pub mod response_header;
pub mod verdict;

#[cfg(test)]
pub mod test_helpers;
