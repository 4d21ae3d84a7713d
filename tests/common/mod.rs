// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use lint_secheaders::response_header::ResponseHeader;

/// Raw response head with a 200 status line and the given header lines.
pub fn response_head(lines: &[&str]) -> ResponseHeader {
    let mut raw = String::from("HTTP/1.1 200 OK\r\n");
    for line in lines {
        raw.push_str(line);
        raw.push_str("\r\n");
    }
    raw.push_str("\r\n");
    ResponseHeader::parse(&raw)
}
