//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a publication date the way the blog shows it, e.g. "Jan 5, 2024"
pub fn format_blog_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %-d, %Y").to_string()
}

/// Format just the calendar day, e.g. "2024-01-05"
pub fn short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_format_blog_date() {
        let date = Local.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_blog_date(&date), "Jan 5, 2024");
        let date = Local.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(format_blog_date(&date), "Dec 25, 2023");
    }

    #[test]
    fn test_short_date() {
        let date = Local.with_ymd_and_hms(2024, 1, 5, 23, 59, 0).unwrap();
        assert_eq!(short_date(&date), "2024-01-05");
    }
}
