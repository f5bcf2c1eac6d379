//! Group-code scanner
//!
//! DXF text is a flat sequence of two-line records: a numeric group code
//! followed by a value line. The code's numeric range decides the value's
//! type. [`GroupScanner`] walks those records with single-group lookahead
//! (`peek`) and bounded backtracking (`rewind`), which is all the
//! recursive-descent entity parsers need.

use crate::error::{DxfError, Result};
use crate::types::Point;
use std::fmt;

/// A typed group value.
///
/// The type is decided by the group code's range, not by the text itself.
/// When a numeric range's value fails to parse, the raw text is kept as
/// `Text` instead of failing the scan; downstream parsers treat it as an
/// unusable value for that code.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupValue {
    Text(String),
    Double(f64),
    Integer(i64),
    Boolean(bool),
}

impl GroupValue {
    /// The value as text, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            GroupValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a float, coercing integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GroupValue::Double(d) => Some(*d),
            GroupValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The value as an integer, truncating floats.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GroupValue::Integer(i) => Some(*i),
            GroupValue::Double(d) => Some(*d as i64),
            _ => None,
        }
    }

    /// The value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            GroupValue::Boolean(b) => Some(*b),
            GroupValue::Integer(i) => Some(*i != 0),
            _ => None,
        }
    }
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Text(s) => write!(f, "{}", s),
            GroupValue::Double(d) => write!(f, "{}", d),
            GroupValue::Integer(i) => write!(f, "{}", i),
            GroupValue::Boolean(b) => write!(f, "{}", if *b { 1 } else { 0 }),
        }
    }
}

/// One (code, value) record from the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub code: i32,
    pub value: GroupValue,
}

impl Group {
    pub fn new(code: i32, value: GroupValue) -> Self {
        Group { code, value }
    }

    /// Whether this is the `0/EOF` terminator group.
    pub fn is_eof(&self) -> bool {
        self.code == 0 && self.value.as_str() == Some("EOF")
    }

    /// Whether this is a `0/<name>` record-start group with the given value.
    pub fn is_start_of(&self, name: &str) -> bool {
        self.code == 0 && self.value.as_str() == Some(name)
    }
}

/// Coerce a raw value line according to the group code's range.
fn coerce(code: i32, raw: &str) -> GroupValue {
    match code {
        0..=9 => GroupValue::Text(raw.to_string()),
        10..=59 => parse_double(raw),
        60..=99 => parse_integer(raw),
        100..=109 => GroupValue::Text(raw.to_string()),
        110..=149 => parse_double(raw),
        160..=179 => parse_integer(raw),
        210..=239 => parse_double(raw),
        270..=289 => parse_integer(raw),
        // Boolean range: only literal "0"/"1" are booleans, anything else
        // passes through as text.
        290..=299 => match raw {
            "0" => GroupValue::Boolean(false),
            "1" => GroupValue::Boolean(true),
            _ => GroupValue::Text(raw.to_string()),
        },
        300..=369 => GroupValue::Text(raw.to_string()),
        370..=389 => parse_integer(raw),
        390..=399 => GroupValue::Text(raw.to_string()),
        400..=409 => parse_integer(raw),
        410..=419 => GroupValue::Text(raw.to_string()),
        420..=429 => parse_integer(raw),
        430..=439 => GroupValue::Text(raw.to_string()),
        440..=459 => parse_integer(raw),
        460..=469 => parse_double(raw),
        470..=481 => GroupValue::Text(raw.to_string()),
        999 => GroupValue::Text(raw.to_string()),
        1000..=1009 => GroupValue::Text(raw.to_string()),
        1010..=1059 => parse_double(raw),
        1060..=1071 => parse_integer(raw),
        _ => GroupValue::Text(raw.to_string()),
    }
}

fn parse_double(raw: &str) -> GroupValue {
    match raw.trim().parse::<f64>() {
        Ok(d) => GroupValue::Double(d),
        Err(_) => GroupValue::Text(raw.to_string()),
    }
}

fn parse_integer(raw: &str) -> GroupValue {
    match raw.trim().parse::<i64>() {
        Ok(i) => GroupValue::Integer(i),
        Err(_) => GroupValue::Text(raw.to_string()),
    }
}

/// Scanner over the pre-split lines of a DXF file.
pub struct GroupScanner {
    lines: Vec<String>,
    /// Index of the next unread line (always even at a group boundary).
    pointer: usize,
    eof: bool,
}

impl GroupScanner {
    /// Scan over already-split lines.
    pub fn new(lines: Vec<String>) -> Self {
        GroupScanner {
            lines,
            pointer: 0,
            eof: false,
        }
    }

    /// Split raw file text into lines and scan over them.
    ///
    /// Handles both LF and CRLF line endings; a trailing newline does not
    /// produce a phantom empty record.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        GroupScanner::new(lines)
    }

    /// Whether another group is available before running out of lines.
    ///
    /// Stays `true` after the `0/EOF` group has been read if stray lines
    /// follow it; use [`is_eof`](Self::is_eof) to detect the terminator.
    pub fn has_next(&self) -> bool {
        !self.eof && self.pointer + 1 < self.lines.len()
    }

    /// Whether the `0/EOF` terminator has been consumed.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// 1-based line number of the next unread line, for diagnostics.
    pub fn current_line(&self) -> usize {
        self.pointer + 1
    }

    /// Read the next group.
    ///
    /// The `0/EOF` group is returned like any other, but marks the scanner
    /// finished; a further `next` fails with [`DxfError::ScannerPastEof`].
    /// Running out of lines without seeing the terminator fails with
    /// [`DxfError::UnterminatedInput`].
    pub fn next(&mut self) -> Result<Group> {
        if self.eof {
            return Err(DxfError::ScannerPastEof);
        }
        if self.pointer + 1 >= self.lines.len() {
            return Err(DxfError::UnterminatedInput {
                line: self.pointer + 1,
                reason: "ran out of lines before the EOF group".to_string(),
            });
        }
        let code_line = self.lines[self.pointer].trim();
        let code: i32 = code_line.parse().map_err(|_| DxfError::InvalidGroupCode {
            line: self.pointer + 1,
            text: code_line.to_string(),
        })?;
        // value lines keep their whitespace; text values like MTEXT
        // chunks carry significant spaces
        let value_raw = &self.lines[self.pointer + 1];
        let group = Group::new(code, coerce(code, value_raw));
        self.pointer += 2;
        if group.is_eof() {
            self.eof = true;
        }
        Ok(group)
    }

    /// Look at the next group without consuming it.
    pub fn peek(&mut self) -> Result<Group> {
        let group = self.next()?;
        self.rewind(1);
        Ok(group)
    }

    /// Push back the last `n` groups. The caller must have consumed at
    /// least `n` groups. Rewinding over the `0/EOF` group makes it
    /// readable again.
    pub fn rewind(&mut self, n: usize) {
        debug_assert!(2 * n <= self.pointer, "rewind past start of stream");
        let back = (2 * n).min(self.pointer);
        self.pointer -= back;
        if back > 0 {
            self.eof = false;
        }
    }

    /// Read a coordinate starting at `x_code`.
    ///
    /// Consumes `x_code`, then the matching y code (`x_code + 10`), then
    /// optionally the z code (`x_code + 20`). A non-matching group after
    /// the y value is pushed back. A non-matching y code desynchronizes
    /// the stream and is fatal.
    pub fn read_point(&mut self, x_code: i32, x: f64) -> Result<Point> {
        let y_group = self.next()?;
        if y_group.code != x_code + 10 {
            return Err(DxfError::MalformedPoint {
                expected: x_code + 10,
                found: y_group.code,
            });
        }
        let y = y_group.value.as_f64().unwrap_or(0.0);
        let mut point = Point::new(x, y);
        if self.has_next() {
            let z_group = self.next()?;
            if z_group.code == x_code + 20 {
                point.z = Some(z_group.value.as_f64().unwrap_or(0.0));
            } else {
                self.rewind(1);
            }
        }
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(pairs: &[(&str, &str)]) -> GroupScanner {
        let lines = pairs
            .iter()
            .flat_map(|(c, v)| [c.to_string(), v.to_string()])
            .collect();
        GroupScanner::new(lines)
    }

    #[test]
    fn test_type_coercion_by_range() {
        let mut s = scanner(&[
            ("0", "LINE"),
            ("10", "1.5"),
            ("62", "256"),
            ("290", "1"),
            ("1001", "ACAD"),
        ]);
        assert_eq!(s.next().unwrap().value, GroupValue::Text("LINE".into()));
        assert_eq!(s.next().unwrap().value, GroupValue::Double(1.5));
        assert_eq!(s.next().unwrap().value, GroupValue::Integer(256));
        assert_eq!(s.next().unwrap().value, GroupValue::Boolean(true));
        assert_eq!(s.next().unwrap().value, GroupValue::Text("ACAD".into()));
    }

    #[test]
    fn test_coercion_at_range_boundaries() {
        // the raw value "1" disambiguates every coercion outcome
        let cases: &[(i32, GroupValue)] = &[
            (0, GroupValue::Text("1".into())),
            (9, GroupValue::Text("1".into())),
            (10, GroupValue::Double(1.0)),
            (59, GroupValue::Double(1.0)),
            (60, GroupValue::Integer(1)),
            (99, GroupValue::Integer(1)),
            (100, GroupValue::Text("1".into())),
            (109, GroupValue::Text("1".into())),
            (110, GroupValue::Double(1.0)),
            (149, GroupValue::Double(1.0)),
            (150, GroupValue::Text("1".into())),
            (159, GroupValue::Text("1".into())),
            (160, GroupValue::Integer(1)),
            (179, GroupValue::Integer(1)),
            (180, GroupValue::Text("1".into())),
            (209, GroupValue::Text("1".into())),
            (210, GroupValue::Double(1.0)),
            (239, GroupValue::Double(1.0)),
            (240, GroupValue::Text("1".into())),
            (269, GroupValue::Text("1".into())),
            (270, GroupValue::Integer(1)),
            (289, GroupValue::Integer(1)),
            (290, GroupValue::Boolean(true)),
            (299, GroupValue::Boolean(true)),
            (300, GroupValue::Text("1".into())),
            (369, GroupValue::Text("1".into())),
            (370, GroupValue::Integer(1)),
            (389, GroupValue::Integer(1)),
            (390, GroupValue::Text("1".into())),
            (399, GroupValue::Text("1".into())),
            (400, GroupValue::Integer(1)),
            (409, GroupValue::Integer(1)),
            (410, GroupValue::Text("1".into())),
            (419, GroupValue::Text("1".into())),
            (420, GroupValue::Integer(1)),
            (429, GroupValue::Integer(1)),
            (430, GroupValue::Text("1".into())),
            (439, GroupValue::Text("1".into())),
            (440, GroupValue::Integer(1)),
            (459, GroupValue::Integer(1)),
            (460, GroupValue::Double(1.0)),
            (469, GroupValue::Double(1.0)),
            (470, GroupValue::Text("1".into())),
            (481, GroupValue::Text("1".into())),
            (482, GroupValue::Text("1".into())),
            (998, GroupValue::Text("1".into())),
            (999, GroupValue::Text("1".into())),
            (1000, GroupValue::Text("1".into())),
            (1009, GroupValue::Text("1".into())),
            (1010, GroupValue::Double(1.0)),
            (1059, GroupValue::Double(1.0)),
            (1060, GroupValue::Integer(1)),
            (1071, GroupValue::Integer(1)),
            (1072, GroupValue::Text("1".into())),
        ];
        for (code, expected) in cases {
            let mut s = GroupScanner::new(vec![code.to_string(), "1".to_string()]);
            let group = s.next().unwrap();
            assert_eq!(&group.value, expected, "code {}", code);
        }
    }

    #[test]
    fn test_boolean_passthrough() {
        let mut s = scanner(&[("290", "yes")]);
        assert_eq!(s.next().unwrap().value, GroupValue::Text("yes".into()));
    }

    #[test]
    fn test_numeric_parse_failure_keeps_text() {
        let mut s = scanner(&[("10", "not-a-number")]);
        assert_eq!(
            s.next().unwrap().value,
            GroupValue::Text("not-a-number".into())
        );
    }

    #[test]
    fn test_eof_discipline() {
        let mut s = scanner(&[("0", "EOF")]);
        let g = s.next().unwrap();
        assert!(g.is_eof());
        assert!(s.is_eof());
        assert!(matches!(s.next(), Err(DxfError::ScannerPastEof)));
    }

    #[test]
    fn test_unterminated_input() {
        let mut s = scanner(&[("0", "LINE")]);
        s.next().unwrap();
        assert!(matches!(
            s.next(),
            Err(DxfError::UnterminatedInput { .. })
        ));
    }

    #[test]
    fn test_invalid_group_code() {
        let mut s = scanner(&[("banana", "LINE")]);
        assert!(matches!(s.next(), Err(DxfError::InvalidGroupCode { .. })));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut s = scanner(&[("0", "LINE"), ("0", "EOF")]);
        assert_eq!(s.peek().unwrap().value.as_str(), Some("LINE"));
        assert_eq!(s.next().unwrap().value.as_str(), Some("LINE"));
    }

    #[test]
    fn test_rewind_restores_groups() {
        let mut s = scanner(&[("0", "LINE"), ("8", "0"), ("0", "EOF")]);
        s.next().unwrap();
        s.next().unwrap();
        s.rewind(2);
        assert_eq!(s.next().unwrap().value.as_str(), Some("LINE"));
    }

    #[test]
    fn test_rewind_reopens_eof() {
        let mut s = scanner(&[("0", "EOF")]);
        s.next().unwrap();
        assert!(s.is_eof());
        s.rewind(1);
        assert!(!s.is_eof());
        assert!(s.next().unwrap().is_eof());
    }

    #[test]
    fn test_point_with_z() {
        let mut s = scanner(&[("20", "2.0"), ("30", "3.0"), ("0", "EOF")]);
        let p = s.read_point(10, 1.0).unwrap();
        assert_eq!(p, Point::with_z(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_point_without_z_rewinds() {
        let mut s = scanner(&[("20", "2.0"), ("40", "5.0"), ("0", "EOF")]);
        let p = s.read_point(10, 1.0).unwrap();
        assert_eq!(p, Point::new(1.0, 2.0));
        // the non-z group is still readable
        assert_eq!(s.next().unwrap().code, 40);
    }

    #[test]
    fn test_malformed_point_is_fatal() {
        let mut s = scanner(&[("11", "2.0"), ("0", "EOF")]);
        assert!(matches!(
            s.read_point(10, 1.0),
            Err(DxfError::MalformedPoint {
                expected: 20,
                found: 11
            })
        ));
    }

    #[test]
    fn test_from_text_crlf() {
        let mut s = GroupScanner::from_text("0\r\nEOF\r\n");
        assert!(s.next().unwrap().is_eof());
    }

    #[test]
    fn test_code_line_whitespace() {
        let mut s = GroupScanner::from_text("  0\nLINE\n0\nEOF\n");
        assert_eq!(s.next().unwrap().code, 0);
    }
}
