//! Date command implementation.

use anyhow::{Context, Result};
use blogmeta::log;
use blogmeta::utils::date::{CanonicalDate, DateInput};
use serde_json::json;

use super::DateFormat;

/// Execute date command
pub fn run_date(input: &str, millis: bool, format: DateFormat) -> Result<()> {
    let input = date_input(input, millis)?;
    match input.resolve()? {
        Some(date) => println!("{}", format_date(&date, format)),
        None => log!("date"; "no date in input"),
    }
    Ok(())
}

fn date_input(input: &str, millis: bool) -> Result<DateInput> {
    if !millis {
        return Ok(DateInput::from(input));
    }
    let value = input
        .trim()
        .parse::<i64>()
        .with_context(|| format!("'{input}' is not a millisecond timestamp"))?;
    Ok(DateInput::Timestamp(value))
}

fn format_date(date: &CanonicalDate, format: DateFormat) -> String {
    match format {
        DateFormat::Iso => date.to_iso_string(),
        DateFormat::Display => date.to_display_string(),
        DateFormat::Both => json!({
            "iso": date.to_iso_string(),
            "display": date.to_display_string(),
        })
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: &str, millis: bool) -> CanonicalDate {
        date_input(input, millis).unwrap().resolve().unwrap().unwrap()
    }

    #[test]
    fn test_text_input() {
        let date = resolve("2024/03/05", false);
        assert_eq!(format_date(&date, DateFormat::Display), "March 5, 2024");
        assert_eq!(format_date(&date, DateFormat::Iso), "2024-03-05T00:00:00.000Z");
    }

    #[test]
    fn test_millis_input() {
        let date = resolve("0", true);
        assert_eq!(format_date(&date, DateFormat::Iso), "1970-01-01T00:00:00.000Z");
        assert!(date_input("yesterday", true).is_err());
    }

    #[test]
    fn test_both_is_json() {
        let date = resolve("2024-01-15", false);
        let value: serde_json::Value =
            serde_json::from_str(&format_date(&date, DateFormat::Both)).unwrap();
        assert_eq!(value["iso"], "2024-01-15T00:00:00.000Z");
        assert_eq!(value["display"], "January 15, 2024");
    }
}
