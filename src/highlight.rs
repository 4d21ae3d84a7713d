// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Maps verdicts and declared substring patterns onto colored spans of a raw
//! header line.
//!
//! Painting rules shared by every [`Check`]:
//!
//! - a line the check does not own gets no color and no segments;
//! - every occurrence of every red, yellow and green pattern becomes a
//!   candidate segment (matching ignores ASCII case);
//! - green is applied last: red and yellow candidates are cut wherever a green
//!   segment covers the same characters, so an overlapped offset is always green;
//! - red and yellow candidates that do not touch green are reported as found.
//!
//! Offsets are character offsets into the original line, end exclusive.

use crate::checks::Check;
use crate::verdict::{Status, Verdict};
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum HighlightType {
    Green,
    Yellow,
    Red,
    None,
}

impl From<Status> for HighlightType {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => HighlightType::Green,
            Status::Warn => HighlightType::Yellow,
            Status::Fail => HighlightType::Red,
        }
    }
}

/// A colored span. Construction does not validate `start <= end` or sign.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSegment {
    pub start: isize,
    pub end: isize,
    #[serde(rename = "type")]
    pub kind: HighlightType,
}

impl HighlightSegment {
    pub fn new(start: isize, end: isize, kind: HighlightType) -> Self {
        Self { start, end, kind }
    }
}

/// Whole-line color for `line` given the check's verdict.
pub fn highlight_type(check: &dyn Check, line: &str, verdict: Option<&Verdict>) -> HighlightType {
    match verdict {
        Some(v) if check.matches_header_line(line) => v.status().into(),
        _ => HighlightType::None,
    }
}

/// Pattern-driven segments for `line`, with green taking priority.
///
/// Segments depend only on the line and the declared patterns; `verdict` is
/// accepted for symmetry with [`highlight_type`].
pub fn highlight_segments(
    check: &dyn Check,
    line: &str,
    _verdict: Option<&Verdict>,
) -> Vec<HighlightSegment> {
    if !check.matches_header_line(line) {
        return Vec::new();
    }

    let (red, yellow, green) = (
        check.red_patterns(),
        check.yellow_patterns(),
        check.green_patterns(),
    );
    if red.is_empty() && yellow.is_empty() && green.is_empty() {
        return Vec::new();
    }

    // ASCII lowercasing keeps byte offsets aligned with `line`.
    let haystack = line.to_ascii_lowercase();

    let mut under = Vec::new();
    collect_occurrences(&haystack, red, HighlightType::Red, &mut under);
    collect_occurrences(&haystack, yellow, HighlightType::Yellow, &mut under);

    let mut greens = Vec::new();
    collect_occurrences(&haystack, green, HighlightType::Green, &mut greens);

    let mut spans: Vec<(Range<usize>, HighlightType)> = Vec::new();
    for (range, kind) in under {
        for piece in subtract(range, &greens) {
            spans.push((piece, kind));
        }
    }
    spans.extend(greens);
    spans.sort_by_key(|(r, _)| (r.start, r.end));

    spans
        .into_iter()
        .map(|(r, kind)| {
            HighlightSegment::new(char_offset(line, r.start), char_offset(line, r.end), kind)
        })
        .collect()
}

fn collect_occurrences(
    haystack: &str,
    patterns: &[&str],
    kind: HighlightType,
    out: &mut Vec<(Range<usize>, HighlightType)>,
) {
    for pattern in patterns.iter().filter(|p| !p.is_empty()) {
        let needle = pattern.to_ascii_lowercase();
        // Overlapping occurrences count: resume one character after each start.
        let mut from = 0;
        while let Some(pos) = haystack[from..].find(needle.as_str()) {
            let idx = from + pos;
            out.push((idx..idx + needle.len(), kind));
            let step = haystack[idx..].chars().next().map_or(1, char::len_utf8);
            from = idx + step;
        }
    }
}

/// Remove every green range from `range`, returning the non-empty remainders.
fn subtract(range: Range<usize>, greens: &[(Range<usize>, HighlightType)]) -> Vec<Range<usize>> {
    let mut pieces = vec![range];
    for (g, _) in greens {
        pieces = pieces
            .into_iter()
            .flat_map(|p| {
                if g.end <= p.start || g.start >= p.end {
                    return vec![p];
                }
                let mut rest = Vec::with_capacity(2);
                if p.start < g.start {
                    rest.push(p.start..g.start);
                }
                if g.end < p.end {
                    rest.push(g.end..p.end);
                }
                rest
            })
            .collect();
    }
    pieces
}

fn char_offset(line: &str, byte: usize) -> isize {
    line[..byte].chars().count() as isize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::PatternCheck;
    use rstest::rstest;

    fn covering(segments: &[HighlightSegment], offset: isize) -> Vec<HighlightType> {
        segments
            .iter()
            .filter(|s| s.start <= offset && offset < s.end)
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn segment_construction_is_unchecked() {
        let s = HighlightSegment::new(10, 5, HighlightType::Red);
        assert_eq!((s.start, s.end, s.kind), (10, 5, HighlightType::Red));
        let s = HighlightSegment::new(-1, -1, HighlightType::Yellow);
        assert_eq!((s.start, s.end), (-1, -1));
    }

    #[test]
    fn highlight_type_none_without_verdict() {
        let check = PatternCheck::new("test-header", &[], &[], &[]);
        assert_eq!(
            highlight_type(&check, "test-header: value", None),
            HighlightType::None
        );
    }

    #[test]
    fn highlight_type_none_for_other_header() {
        let check = PatternCheck::new("test-header", &[], &[], &[]);
        let v = Verdict::ok("ok", "ok");
        assert_eq!(
            highlight_type(&check, "other-header: value", Some(&v)),
            HighlightType::None
        );
    }

    #[rstest]
    #[case(Verdict::ok("ok", "ok"), HighlightType::Green)]
    #[case(Verdict::warn("warn", "warn"), HighlightType::Yellow)]
    #[case(Verdict::fail("fail", "fail"), HighlightType::Red)]
    fn highlight_type_follows_status(#[case] verdict: Verdict, #[case] expected: HighlightType) {
        let check = PatternCheck::new("test-header", &[], &[], &[]);
        assert_eq!(
            highlight_type(&check, "Test-Header: value", Some(&verdict)),
            expected
        );
    }

    #[test]
    fn segments_do_not_depend_on_verdict() {
        let check = PatternCheck::new("h", &["aa"], &[], &[]);
        let segs = highlight_segments(&check, "h: aaa", None);
        assert_eq!(
            segs,
            vec![
                HighlightSegment::new(3, 5, HighlightType::Red),
                HighlightSegment::new(4, 6, HighlightType::Red),
            ]
        );
        assert_eq!(highlight_type(&check, "h: aaa", None), HighlightType::None);
    }

    #[test]
    fn overlapping_occurrences_after_multibyte_text() {
        let check = PatternCheck::new("h", &[], &["éé"], &[]);
        let v = Verdict::warn("w", "");
        let segs = highlight_segments(&check, "h: ééé", Some(&v));
        assert_eq!(
            segs,
            vec![
                HighlightSegment::new(3, 5, HighlightType::Yellow),
                HighlightSegment::new(4, 6, HighlightType::Yellow),
            ]
        );
    }

    #[test]
    fn segments_empty_for_other_header() {
        let check = PatternCheck::new("test-header", &["value"], &[], &[]);
        let v = Verdict::ok("ok", "ok");
        assert!(highlight_segments(&check, "other-header: value", Some(&v)).is_empty());
    }

    #[test]
    fn segments_empty_without_patterns() {
        let check = PatternCheck::new("test-header", &[], &[], &[]);
        let v = Verdict::ok("ok", "ok");
        assert!(highlight_segments(&check, "test-header: value", Some(&v)).is_empty());
    }

    #[test]
    fn segments_empty_for_empty_line() {
        let check = PatternCheck::new("test-header", &["pattern"], &[], &[]);
        let v = Verdict::ok("ok", "ok");
        assert!(highlight_segments(&check, "", Some(&v)).is_empty());
    }

    #[test]
    fn green_pattern_produces_segment() {
        let check = PatternCheck::new("test-header", &[], &[], &["safe"]);
        let v = Verdict::ok("ok", "ok");
        let segs = highlight_segments(&check, "test-header: safe", Some(&v));
        assert_eq!(segs, vec![HighlightSegment::new(13, 17, HighlightType::Green)]);
    }

    #[test]
    fn every_occurrence_is_reported_case_insensitively() {
        let check = PatternCheck::new("x", &["bad"], &[], &[]);
        let v = Verdict::fail("fail", "");
        let segs = highlight_segments(&check, "X: bad, BAD", Some(&v));
        assert_eq!(
            segs,
            vec![
                HighlightSegment::new(3, 6, HighlightType::Red),
                HighlightSegment::new(8, 11, HighlightType::Red),
            ]
        );
    }

    #[test]
    fn green_overrides_identical_red() {
        let check = PatternCheck::new("test", &["value"], &[], &["value"]);
        let v = Verdict::ok("ok", "ok");
        let segs = highlight_segments(&check, "test: value", Some(&v));
        assert_eq!(segs, vec![HighlightSegment::new(6, 11, HighlightType::Green)]);
    }

    #[test]
    fn partially_covered_red_is_split_around_green() {
        let check = PatternCheck::new("cc", &["no-cache-please"], &[], &["cache"]);
        let v = Verdict::warn("w", "");
        let segs = highlight_segments(&check, "cc: no-cache-please", Some(&v));
        assert_eq!(
            segs,
            vec![
                HighlightSegment::new(4, 7, HighlightType::Red),
                HighlightSegment::new(7, 12, HighlightType::Green),
                HighlightSegment::new(12, 19, HighlightType::Red),
            ]
        );
    }

    #[test]
    fn red_and_yellow_without_green_stand_as_reported() {
        let check = PatternCheck::new("h", &["abc"], &["bcd"], &[]);
        let v = Verdict::warn("w", "");
        let segs = highlight_segments(&check, "h: abcd", Some(&v));
        assert_eq!(
            segs,
            vec![
                HighlightSegment::new(3, 6, HighlightType::Red),
                HighlightSegment::new(4, 7, HighlightType::Yellow),
            ]
        );
    }

    #[rstest]
    #[case("secure", "secure")]
    #[case("no-store", "store")]
    #[case("max-age=0", "age")]
    #[case("public", "publ")]
    #[case("abcabc", "bca")]
    fn overlapping_offsets_are_always_green(
        #[case] red: &'static str,
        #[case] green: &'static str,
    ) {
        let reds = [red];
        let greens = [green];
        let check = PatternCheck::new("h", &reds, &reds, &greens);
        let line = format!("h: {red}; {red}");
        let v = Verdict::fail("f", "");
        let segs = highlight_segments(&check, &line, Some(&v));

        let green_offsets: Vec<isize> = segs
            .iter()
            .filter(|s| s.kind == HighlightType::Green)
            .flat_map(|s| s.start..s.end)
            .collect();
        assert!(!green_offsets.is_empty());
        for off in green_offsets {
            let kinds = covering(&segs, off);
            assert!(
                kinds.iter().all(|k| *k == HighlightType::Green),
                "offset {off} covered by {kinds:?}"
            );
        }
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let check = PatternCheck::new("x", &[], &[], &["ok"]);
        let v = Verdict::ok("ok", "");
        let segs = highlight_segments(&check, "x: été ok", Some(&v));
        assert_eq!(segs, vec![HighlightSegment::new(7, 9, HighlightType::Green)]);
    }
}
