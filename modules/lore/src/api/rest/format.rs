use chrono::{DateTime, Datelike, Timelike, Utc};

/// Encode a date as an unambiguous human-readable string,
/// e.g. "April 5th 2024, 3:04:05 pm".
pub fn format_date(date: DateTime<Utc>) -> String {
    let day = date.day();
    let (is_pm, hour) = date.hour12();
    format!(
        "{} {}{} {}, {}:{:02}:{:02} {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year(),
        hour,
        date.minute(),
        date.second(),
        if is_pm { "pm" } else { "am" }
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn afternoon_time_uses_pm_without_leading_zero() {
        assert_eq!(
            format_date(date(2024, 4, 5, 15, 4, 5)),
            "April 5th 2024, 3:04:05 pm"
        );
    }

    #[test]
    fn midnight_and_noon_are_twelve() {
        assert_eq!(
            format_date(date(2023, 1, 1, 0, 0, 0)),
            "January 1st 2023, 12:00:00 am"
        );
        assert_eq!(
            format_date(date(2023, 1, 1, 12, 0, 0)),
            "January 1st 2023, 12:00:00 pm"
        );
    }

    #[test]
    fn teen_days_get_th() {
        assert_eq!(
            format_date(date(2022, 11, 11, 9, 30, 0)),
            "November 11th 2022, 9:30:00 am"
        );
        assert_eq!(
            format_date(date(2022, 11, 12, 9, 30, 0)),
            "November 12th 2022, 9:30:00 am"
        );
        assert_eq!(
            format_date(date(2022, 11, 13, 9, 30, 0)),
            "November 13th 2022, 9:30:00 am"
        );
    }

    #[test]
    fn ordinal_suffixes_past_twenty() {
        assert_eq!(
            format_date(date(2022, 5, 21, 23, 59, 59)),
            "May 21st 2022, 11:59:59 pm"
        );
        assert_eq!(
            format_date(date(2022, 5, 22, 1, 2, 3)),
            "May 22nd 2022, 1:02:03 am"
        );
        assert_eq!(
            format_date(date(2022, 5, 23, 1, 2, 3)),
            "May 23rd 2022, 1:02:03 am"
        );
        assert_eq!(
            format_date(date(2022, 5, 31, 1, 2, 3)),
            "May 31st 2022, 1:02:03 am"
        );
    }
}
