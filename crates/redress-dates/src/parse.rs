//! Event-date extraction from free-text fact fields.
//!
//! Layered attempts, first success wins: direct parse of the specific
//! date field, then a numeric day/month/year pattern, then a month-name
//! pattern with optional day. Nothing parseable is not an error; the
//! deadline section is simply omitted downstream.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use redress_core::ExtractedFacts;
use regex::Regex;

lazy_static! {
    static ref NUMERIC_DATE_RE: Regex =
        Regex::new(r"(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})").expect("numeric date regex");
    static ref MONTH_NAME_RE: Regex = Regex::new(
        r"(?i)(?:(\d{1,2})(?:st|nd|rd|th)?\s+(?:of\s+)?)?(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\w*\s+(\d{4})"
    )
    .expect("month name regex");
}

/// Formats tried for a direct parse of the specific-date field
const DIRECT_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d %B %Y"];

/// Extract the event date from the facts record, if any field yields one.
///
/// The specific-date field is tried with every strategy before the
/// looser date-range text is considered.
pub fn extract_event_date(facts: &ExtractedFacts) -> Option<NaiveDate> {
    for field in [&facts.date_specific, &facts.date_range] {
        if let Some(text) = field {
            if let Some(date) = parse_date_text(text) {
                return Some(date);
            }
        }
    }
    None
}

/// Run the layered parse attempts over one text field
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    direct_parse(trimmed)
        .or_else(|| numeric_parse(trimmed))
        .or_else(|| month_name_parse(trimmed))
}

fn direct_parse(text: &str) -> Option<NaiveDate> {
    DIRECT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

fn numeric_parse(text: &str) -> Option<NaiveDate> {
    let caps = NUMERIC_DATE_RE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    // Two-digit years are recent events, so the 2000s
    let year = if year < 100 { year + 2000 } else { year };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_name_parse(text: &str) -> Option<NaiveDate> {
    let caps = MONTH_NAME_RE.captures(text)?;
    // Without a day, the first of the month: the earlier event date keeps
    // the computed submit-by conservative
    let day: u32 = caps
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1);
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let n = match name.to_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redress_core::BodyType;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_direct_iso() {
        assert_eq!(parse_date_text("2025-03-15"), Some(d(2025, 3, 15)));
    }

    #[test]
    fn test_direct_uk_slash() {
        assert_eq!(parse_date_text("15/03/2025"), Some(d(2025, 3, 15)));
    }

    #[test]
    fn test_numeric_embedded() {
        assert_eq!(
            parse_date_text("it happened on 15/3/2025 I think"),
            Some(d(2025, 3, 15))
        );
        assert_eq!(parse_date_text("around 2.1.25"), Some(d(2025, 1, 2)));
    }

    #[test]
    fn test_month_name_with_day() {
        assert_eq!(parse_date_text("15 March 2025"), Some(d(2025, 3, 15)));
        assert_eq!(parse_date_text("the 3rd of June 2024"), Some(d(2024, 6, 3)));
    }

    #[test]
    fn test_month_name_without_day() {
        assert_eq!(parse_date_text("sometime in March 2025"), Some(d(2025, 3, 1)));
        assert_eq!(parse_date_text("Sept 2024"), Some(d(2024, 9, 1)));
    }

    #[test]
    fn test_unparseable_yields_none() {
        assert_eq!(parse_date_text("a while ago"), None);
        assert_eq!(parse_date_text("last winter"), None);
        assert_eq!(parse_date_text(""), None);
    }

    #[test]
    fn test_invalid_calendar_date_yields_none() {
        assert_eq!(parse_date_text("31/02/2025"), None);
    }

    #[test]
    fn test_facts_prefers_specific_over_range() {
        let facts = ExtractedFacts::new(BodyType::Council)
            .with_date("15/03/2025")
            .with_date_range("around January 2025");
        assert_eq!(extract_event_date(&facts), Some(d(2025, 3, 15)));
    }

    #[test]
    fn test_facts_falls_back_to_range() {
        let facts = ExtractedFacts::new(BodyType::Council)
            .with_date("no idea")
            .with_date_range("around January 2025");
        assert_eq!(extract_event_date(&facts), Some(d(2025, 1, 1)));
    }

    #[test]
    fn test_facts_without_dates() {
        let facts = ExtractedFacts::new(BodyType::Council);
        assert_eq!(extract_event_date(&facts), None);
    }
}
