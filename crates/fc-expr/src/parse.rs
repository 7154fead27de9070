//! Parser for the shorthand holiday notation.
//!
//! The grammar, one form per [`DateRule`] variant:
//!
//! * `MONTH/DAY` — fixed date, e.g. `DECEMBER/25`
//! * `ORDINAL WEEKDAY/MONTH` — floating date, e.g. `3MONDAY/NOVEMBER`,
//!   `LASTMONDAY/MAY`; ordinal is `1`–`5` or `LAST`
//! * `ALGORITHM±N` — algorithm offset, e.g. `WesternEaster-2`; the offset
//!   may be omitted for 0; algorithm names are case-sensitive
//!   `[A-Za-z][A-Za-z0-9]*`
//! * `@definitionId±N` — relative to another definition, e.g. `@christmas+1`;
//!   ids are `[A-Za-z0-9][A-Za-z0-9_-]*`.  Because ids may contain `-`, a
//!   trailing `-N` is read as the offset only when everything after the last
//!   sign is digits.
//!
//! Month and weekday names are full English names, matched
//! case-insensitively.  Parsing is total: any input either yields a rule or
//! a [`MalformedExpressionSyntax`](fc_core::errors::Error) error carrying
//! the offending token and its byte position in the input.

use crate::expression::{DateRule, Ordinal};
use fc_core::errors::{Error, Result};
use fc_time::{Month, Weekday};

fn syntax_error(token: &str, position: usize) -> Error {
    Error::MalformedExpressionSyntax {
        token: token.to_owned(),
        position,
    }
}

/// Parse a shorthand notation into a [`DateRule`].
///
/// # Example
/// ```
/// use fc_expr::parse;
/// use fc_expr::{DateRule, Ordinal};
/// use fc_time::{Month, Weekday};
///
/// let rule = parse("3MONDAY/NOVEMBER").unwrap();
/// assert_eq!(
///     rule,
///     DateRule::FloatingWeekday {
///         ordinal: Ordinal::Nth(3),
///         weekday: Weekday::Monday,
///         month: Month::November,
///     }
/// );
/// ```
pub fn parse(input: &str) -> Result<DateRule> {
    let base = input.len() - input.trim_start().len();
    let text = input.trim();
    if text.is_empty() {
        return Err(syntax_error(input, 0));
    }
    if let Some(rest) = text.strip_prefix('@') {
        return parse_relative(rest, base + 1);
    }
    if let Some(slash) = text.find('/') {
        let left = &text[..slash];
        let right = &text[slash + 1..];
        if left.is_empty() {
            return Err(syntax_error("/", base + slash));
        }
        let starts_numeric = left.as_bytes()[0].is_ascii_digit();
        let starts_last = left.to_ascii_uppercase().starts_with("LAST");
        if starts_numeric || starts_last {
            return parse_floating(left, right, base, base + slash + 1);
        }
        return parse_fixed(left, right, base, base + slash + 1);
    }
    parse_algorithm(text, base)
}

/// `MONTH/DAY`
fn parse_fixed(month_txt: &str, day_txt: &str, month_pos: usize, day_pos: usize) -> Result<DateRule> {
    let month = Month::from_name(month_txt).ok_or_else(|| syntax_error(month_txt, month_pos))?;
    let day: u8 = day_txt
        .parse()
        .ok()
        .filter(|d| (1..=31).contains(d))
        .ok_or_else(|| syntax_error(day_txt, day_pos))?;
    Ok(DateRule::Fixed { month, day })
}

/// `<ordinal><WEEKDAY>/MONTH`
fn parse_floating(
    left: &str,
    month_txt: &str,
    left_pos: usize,
    month_pos: usize,
) -> Result<DateRule> {
    let (ordinal, weekday_txt, weekday_pos) = if left.to_ascii_uppercase().starts_with("LAST") {
        (Ordinal::Last, &left[4..], left_pos + 4)
    } else {
        let digits_len = left.bytes().take_while(|b| b.is_ascii_digit()).count();
        let digits = &left[..digits_len];
        let n: u8 = digits
            .parse()
            .ok()
            .filter(|n| (1..=5).contains(n))
            .ok_or_else(|| syntax_error(digits, left_pos))?;
        (Ordinal::Nth(n), &left[digits_len..], left_pos + digits_len)
    };
    let weekday =
        Weekday::from_name(weekday_txt).ok_or_else(|| syntax_error(weekday_txt, weekday_pos))?;
    let month = Month::from_name(month_txt).ok_or_else(|| syntax_error(month_txt, month_pos))?;
    Ok(DateRule::FloatingWeekday {
        ordinal,
        weekday,
        month,
    })
}

/// `ALGORITHM±N`
fn parse_algorithm(text: &str, base: usize) -> Result<DateRule> {
    if !text.as_bytes()[0].is_ascii_alphabetic() {
        return Err(syntax_error(text, base));
    }
    let name_len = text.bytes().take_while(|b| b.is_ascii_alphanumeric()).count();
    let (name, rest) = text.split_at(name_len);
    let offset = parse_offset(rest).ok_or_else(|| syntax_error(rest, base + name_len))?;
    Ok(DateRule::AlgorithmOffset {
        algorithm: name.to_owned(),
        offset,
    })
}

/// `@definitionId±N`
fn parse_relative(rest: &str, pos: usize) -> Result<DateRule> {
    // A trailing all-digit `±N` is the offset; anything else belongs to the id.
    let (id, offset_txt) = match rest.rfind(['+', '-']) {
        Some(i)
            if !rest[i + 1..].is_empty()
                && rest[i + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            (&rest[..i], &rest[i..])
        }
        _ => (rest, ""),
    };
    let valid_id = !id.is_empty()
        && id.as_bytes()[0].is_ascii_alphanumeric()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if !valid_id {
        return Err(syntax_error(rest, pos));
    }
    // Cannot fail: offset_txt is empty or sign + digits
    let offset = parse_offset(offset_txt).ok_or_else(|| syntax_error(offset_txt, pos + id.len()))?;
    Ok(DateRule::RelativeTo {
        base: id.to_owned(),
        offset,
    })
}

/// Parse an optional `±N` suffix; empty means 0.
fn parse_offset(text: &str) -> Option<i32> {
    if text.is_empty() {
        return Some(0);
    }
    let (sign, digits) = text.split_at(1);
    if !matches!(sign, "+" | "-") || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    text.parse().ok()
}
