//! Enum value tracking
//!
//! C gives every enumerator without `= value` the previous value plus one.
//! The tracker follows that rule as long as the running value is a known
//! integer. Once an explicit value is not an integer literal (`A = B | C`)
//! the running value is unknown, and stays unknown until the next explicit
//! integer value.

use crate::config::FirstEnumerator;

/// Running enumerator value for one enum body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValueTracker {
    last: Option<i64>,
}

impl EnumValueTracker {
    /// Tracker for a freshly opened enum body.
    ///
    /// With [`FirstEnumerator::Zero`] the body starts as if the previous
    /// value were -1, so a leading bare enumerator gets 0.
    pub fn start(policy: FirstEnumerator) -> Self {
        let last = match policy {
            FirstEnumerator::Zero => Some(-1),
            FirstEnumerator::Flag => None,
        };
        EnumValueTracker { last }
    }

    /// Successor of `previous`, or `None` when it cannot be computed
    pub fn next(previous: Option<i64>) -> Option<i64> {
        previous.and_then(|value| value.checked_add(1))
    }

    pub fn last(&self) -> Option<i64> {
        self.last
    }

    /// Record an explicit `= value`; returns the value when it is an integer literal
    pub fn record_explicit(&mut self, value: &str) -> Option<i64> {
        self.last = parse_int_literal(value);
        self.last
    }

    /// Value of the next bare enumerator, advancing the counter
    pub fn advance(&mut self) -> Option<i64> {
        let value = Self::next(self.last)?;
        self.last = Some(value);
        Some(value)
    }
}

/// Parse a C integer literal: decimal, `0x` hex or `0` octal, optional
/// leading `-` and `u`/`l` suffixes.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, text),
    };
    let digits = digits.trim_end_matches(|c| matches!(c, 'u' | 'U' | 'l' | 'L'));

    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        i64::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        let octal = &digits[1..];
        if !octal.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
            return None;
        }
        i64::from_str_radix(octal, 8).ok()?
    } else {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<i64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Spell an integer literal the way Go accepts it (C suffixes dropped).
/// Returns `None` when `text` is not an integer literal.
pub fn go_int_literal(text: &str) -> Option<String> {
    parse_int_literal(text)?;
    let text = text.trim();
    Some(text.trim_end_matches(|c| matches!(c, 'u' | 'U' | 'l' | 'L')).to_string())
}
