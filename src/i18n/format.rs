//! Locale-aware number and date formatting.

use chrono::{Datelike, NaiveDate};

const ES_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const FR_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const DE_MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

/// Group separator and minimum number of leading digits before grouping kicks in.
fn grouping(language: &str) -> (&'static str, usize) {
    match language {
        "es" => (".", 2),
        "de" | "it" | "pt" => (".", 1),
        "fr" => ("\u{202F}", 1),
        "ru" | "uk" | "pl" => ("\u{00A0}", 1),
        _ => (",", 1),
    }
}

/// Formats an integer with the language's digit grouping.
pub fn format_number(language: &str, n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let (separator, min_grouping) = grouping(language);

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);
    if n < 0 {
        out.push('-');
    }

    // Grouping only applies once the leading group reaches `min_grouping` digits.
    if digits.len() < 4 + (min_grouping - 1) {
        out.push_str(&digits);
        return out;
    }

    let head = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Formats a calendar date in the language's medium date style.
pub fn format_date(language: &str, date: NaiveDate) -> String {
    let month = date.month0() as usize;
    match language {
        "en" => date.format("%b %-d, %Y").to_string(),
        "es" => format!("{} {} {}", date.day(), ES_MONTHS[month], date.year()),
        "fr" => format!("{} {} {}", date.day(), FR_MONTHS[month], date.year()),
        "de" => format!("{}. {} {}", date.day(), DE_MONTHS[month], date.year()),
        "ja" | "zh" => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_english_grouping() {
        assert_eq!(format_number("en", 8), "8");
        assert_eq!(format_number("en", 1234), "1,234");
        assert_eq!(format_number("en", 1234567), "1,234,567");
        assert_eq!(format_number("en", -98765), "-98,765");
    }

    #[test]
    fn test_spanish_min_grouping() {
        assert_eq!(format_number("es", 1234), "1234");
        assert_eq!(format_number("es", 12345), "12.345");
    }

    #[test]
    fn test_french_narrow_space() {
        assert_eq!(format_number("fr", 1234), "1\u{202F}234");
    }

    #[test]
    fn test_dates() {
        let due = d(2026, 3, 1);
        assert_eq!(format_date("en", due), "Mar 1, 2026");
        assert_eq!(format_date("es", due), "1 mar 2026");
        assert_eq!(format_date("fr", due), "1 mars 2026");
        assert_eq!(format_date("ja", due), "2026年3月1日");
        assert_eq!(format_date("xx", due), "2026-03-01");
    }

    #[test]
    fn test_french_february() {
        assert_eq!(format_date("fr", d(2026, 2, 20)), "20 févr. 2026");
    }
}
