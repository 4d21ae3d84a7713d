// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! One analysis pass over a response's headers.

use crate::checks::{Check, CheckContext, CHECKS};
use crate::config::Config;
use crate::exclusion::ExclusionRuleRegistry;
use crate::highlight::{highlight_segments, highlight_type, HighlightSegment, HighlightType};
use crate::response_header::ResponseHeader;
use crate::verdict::{Status, Verdict};
use serde::Serialize;

/// Colors for one raw header line owned by a check.
#[derive(Serialize, Debug, Clone)]
pub struct LineHighlight {
    pub line: String,
    #[serde(rename = "type")]
    pub kind: HighlightType,
    pub segments: Vec<HighlightSegment>,
}

/// Verdict and highlights of a single check.
#[derive(Serialize, Debug, Clone)]
pub struct CheckOutcome {
    pub check: String,
    pub name: String,
    pub column: String,
    pub verdict: Verdict,
    pub affects_overall_status: bool,
    /// Shown when the verdict is not OK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub lines: Vec<LineHighlight>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Report {
    pub method: String,
    pub url: String,
    pub excluded: bool,
    pub overall: Status,
    pub outcomes: Vec<CheckOutcome>,
    pub context: CheckContext,
}

/// Run a single check and compute its line highlights.
pub fn evaluate(
    check: &dyn Check,
    header: &ResponseHeader,
    context: &mut CheckContext,
) -> CheckOutcome {
    let verdict = check.check(header, context);
    let lines = header
        .lines()
        .iter()
        .filter(|l| check.matches_header_line(l))
        .map(|l| LineHighlight {
            line: l.clone(),
            kind: highlight_type(check, l, Some(&verdict)),
            segments: highlight_segments(check, l, Some(&verdict)),
        })
        .collect();

    CheckOutcome {
        check: check.id().into(),
        name: check.name().into(),
        column: check.column_name().into(),
        message: (!verdict.is_ok()).then(|| check.missing_message().to_string()),
        affects_overall_status: check.affects_overall_status(),
        verdict,
        lines,
    }
}

/// Worst status among outcomes that count toward the aggregate.
pub fn overall_status(outcomes: &[CheckOutcome]) -> Status {
    outcomes
        .iter()
        .filter(|o| o.affects_overall_status)
        .map(|o| o.verdict.status())
        .max()
        .unwrap_or(Status::Ok)
}

/// Lint a response head produced by `method url`.
///
/// Requests matched by an exclusion rule are reported as excluded without
/// running any check.
pub fn lint_headers(
    header: &ResponseHeader,
    method: &str,
    url: &str,
    cfg: &Config,
    registry: &ExclusionRuleRegistry,
) -> Report {
    let mut report = Report {
        method: method.to_string(),
        url: url.to_string(),
        excluded: false,
        overall: Status::Ok,
        outcomes: Vec::new(),
        context: CheckContext::new(),
    };

    if registry.should_exclude(method, url) {
        tracing::debug!(%method, %url, "request excluded from header checks");
        report.excluded = true;
        return report;
    }

    for check in CHECKS {
        if cfg.is_enabled(check.id()) {
            report
                .outcomes
                .push(evaluate(*check, header, &mut report.context));
        }
    }
    report.overall = overall_status(&report.outcomes);

    tracing::debug!(
        %method,
        %url,
        overall = %report.overall,
        checks = report.outcomes.len(),
        "linted response headers"
    );
    report
}
