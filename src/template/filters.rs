// ABOUTME: Tera filters for locale-aware number and date formatting
// ABOUTME: Implements the localize, date and linebreaks filters used in LaTeX templates

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::str::FromStr;
use tera::Value;

use super::escape::escape_tex;
use super::locale::TexLocale;

/// Locale-aware formatting for decimal numbers and calendar dates.
///
/// Numbers keep their exact decimal digits and swap in the locale's decimal
/// separator; thousands grouping is only applied when `group=true` is passed.
/// ISO date strings are rendered with the locale's short date pattern.
pub struct LocalizeFilter {
    pub locale: TexLocale,
}

impl tera::Filter for LocalizeFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let group = args.get("group").and_then(Value::as_bool).unwrap_or(false);

        if let Some(decimal) = parse_decimal(value) {
            return Ok(Value::String(format_decimal(&decimal, self.locale, group)));
        }
        if let Some(date) = parse_date(value) {
            let formatted = format_date(&date, self.locale.short_date_format(), self.locale)?;
            return Ok(Value::String(formatted));
        }

        Err(tera::Error::msg(format!(
            "localize: expected a number or an ISO date, got {value}"
        )))
    }
}

/// Date formatting with an explicit chrono pattern, localized month names.
pub struct DateFilter {
    pub locale: TexLocale,
}

impl tera::Filter for DateFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let date = parse_date(value)
            .ok_or_else(|| tera::Error::msg(format!("date: expected an ISO date, got {value}")))?;

        let pattern = match args.get("format").and_then(Value::as_str) {
            Some(p) => p,
            None => self.locale.long_date_format(),
        };

        Ok(Value::String(format_date(&date, pattern, self.locale)?))
    }
}

/// Convert newlines into LaTeX line breaks (`\\`), not paragraph breaks.
///
/// The input text is escaped here, before the break sequences go in, so the
/// output is already markup-safe; pipe it through `safe` to keep the engine
/// from escaping the inserted breaks a second time.
pub fn linebreaks(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("linebreaks: expected a string"))?;

    let converted = escape_tex(&text.replace("\r\n", "\n")).replace('\n', "\\\\\n");
    Ok(Value::String(converted))
}

fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

fn parse_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

fn format_decimal(value: &Decimal, locale: TexLocale, group: bool) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let int_part = if group {
        group_digits(int_part, locale.group_separator())
    } else {
        int_part.to_string()
    };

    match frac_part {
        Some(frac) => format!("{sign}{int_part}{}{frac}", locale.decimal_separator()),
        None => format!("{sign}{int_part}"),
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

fn format_date(date: &NaiveDate, pattern: &str, locale: TexLocale) -> tera::Result<String> {
    let mut out = String::new();
    write!(out, "{}", date.format_localized(pattern, locale.chrono_locale()))
        .map_err(|_| tera::Error::msg(format!("date: invalid format pattern: {pattern}")))?;
    Ok(out)
}
