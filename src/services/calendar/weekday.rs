//! Weekday header labels and localized month titles.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::calendar::{CalendarConfig, CalendarDate};

/// Sunday-first abbreviations used when the locale can't supply its own.
pub const ENGLISH_WEEKDAY_SYMBOLS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Sunday-first short weekday names for the config's locale.
pub fn canonical_weekday_symbols(config: &CalendarConfig) -> Vec<String> {
    let Some(locale) = config.locale() else {
        return english_symbols();
    };

    // 2023-01-01 was a Sunday
    (0..7u32)
        .map(|i| {
            NaiveDate::from_ymd_opt(2023, 1, 1 + i)
                .and_then(|date| date.and_hms_opt(12, 0, 0))
                .map(|noon| {
                    Utc.from_utc_datetime(&noon)
                        .format_localized("%a", locale)
                        .to_string()
                })
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| ENGLISH_WEEKDAY_SYMBOLS[i as usize].to_string())
        })
        .collect()
}

/// Weekday labels rotated so index 0 is the configured first weekday.
pub fn weekday_symbols(config: &CalendarConfig) -> Vec<String> {
    rotate(canonical_weekday_symbols(config), config)
}

/// Column holding Sunday after rotation.
pub fn sunday_index(config: &CalendarConfig) -> usize {
    (8 - config.first_weekday().get() as usize) % 7
}

/// Column holding Saturday after rotation.
pub fn saturday_index(config: &CalendarConfig) -> usize {
    (14 - config.first_weekday().get() as usize) % 7
}

pub fn is_weekend_column(index: usize, config: &CalendarConfig) -> bool {
    index == sunday_index(config) || index == saturday_index(config)
}

/// Localized month title for the month containing `month`, e.g.
/// "January 2025" or "2025年1月".
pub fn month_label(month: CalendarDate, config: &CalendarConfig) -> String {
    let Some(noon) = month.first_of_month().naive().and_hms_opt(12, 0, 0) else {
        return format!("{} {}", month.month(), month.year());
    };
    let instant = Utc.from_utc_datetime(&noon);
    match config.locale() {
        Some(locale) => instant
            .format_localized(month_label_pattern(config.locale_id()), locale)
            .to_string(),
        None => instant.format(WESTERN_MONTH_LABEL).to_string(),
    }
}

const WESTERN_MONTH_LABEL: &str = "%B %Y";

/// Chinese, Japanese and Korean titles put the year first.
fn month_label_pattern(locale_id: &str) -> &'static str {
    let language = locale_id
        .trim()
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "ja" | "zh" => "%Y年%-m月",
        "ko" => "%Y년 %-m월",
        _ => WESTERN_MONTH_LABEL,
    }
}

fn english_symbols() -> Vec<String> {
    ENGLISH_WEEKDAY_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

fn rotate(canonical: Vec<String>, config: &CalendarConfig) -> Vec<String> {
    let start = config.first_weekday().get() as usize - 1;
    (0..7)
        .map(|i| canonical[(start + i) % 7].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::{CalendarTimeZone, FirstWeekday, GridPolicy};
    use test_case::test_case;

    fn config(first: u8, locale: &str) -> CalendarConfig {
        CalendarConfig::new(
            FirstWeekday::new(first).unwrap(),
            CalendarTimeZone::Device,
            locale,
            GridPolicy::CompleteWeeks,
        )
    }

    #[test]
    fn test_sunday_first_is_unrotated() {
        assert_eq!(
            weekday_symbols(&config(1, "en_US")),
            vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
    }

    #[test]
    fn test_monday_first_rotation() {
        let cfg = config(2, "en_US");
        assert_eq!(
            weekday_symbols(&cfg),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert_eq!(sunday_index(&cfg), 6);
        assert_eq!(saturday_index(&cfg), 5);
    }

    #[test_case(1 => (0, 6))]
    #[test_case(2 => (6, 5))]
    #[test_case(7 => (1, 0))]
    fn test_weekend_indices(first: u8) -> (usize, usize) {
        let cfg = config(first, "en_US");
        (sunday_index(&cfg), saturday_index(&cfg))
    }

    #[test]
    fn test_weekend_columns_match_labels() {
        for first in 1..=7 {
            let cfg = config(first, "en_US");
            let labels = weekday_symbols(&cfg);
            for (idx, label) in labels.iter().enumerate() {
                let weekend = label == "Sun" || label == "Sat";
                assert_eq!(is_weekend_column(idx, &cfg), weekend, "first={} idx={}", first, idx);
            }
        }
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(
            canonical_weekday_symbols(&config(1, "zz_ZZ")),
            ENGLISH_WEEKDAY_SYMBOLS.to_vec()
        );
    }

    #[test]
    fn test_localized_symbols() {
        let german = canonical_weekday_symbols(&config(1, "de_DE"));
        assert_eq!(german.len(), 7);
        assert_eq!(german[0], "So");
        assert_eq!(german[1], "Mo");
    }

    #[test]
    fn test_month_label() {
        let jan = CalendarDate::from_ymd(2025, 1, 15).unwrap();
        assert_eq!(month_label(jan, &config(1, "en_US")), "January 2025");
        assert_eq!(month_label(jan, &config(1, "fr_FR")), "janvier 2025");
        assert_eq!(month_label(jan, &config(1, "zz_ZZ")), "January 2025");
    }

    #[test_case("ja_JP" => "2025年1月")]
    #[test_case("zh_CN" => "2025年1月")]
    #[test_case("ko-KR" => "2025년 1월")]
    fn test_month_label_year_first_locales(locale: &str) -> String {
        let jan = CalendarDate::from_ymd(2025, 1, 15).unwrap();
        month_label(jan, &config(1, locale))
    }

    #[test]
    fn test_month_label_ignores_day() {
        let cfg = config(1, "en_US");
        let mid = CalendarDate::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(month_label(mid, &cfg), "February 2024");
        assert_eq!(mid.first_of_month().day(), 1);
    }
}
