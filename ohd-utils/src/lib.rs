//! Shared utility functions for ocean hazard dashboard crates.

/// Timestamp utility functions
pub mod timestamps {
    use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

    /// Format a UTC instant as RFC 3339 with second precision, e.g. "2024-07-04T15:30:00Z"
    pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
        instant.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// The current moment, formatted with [`format_timestamp`].
    pub fn now_timestamp() -> String {
        format_timestamp(&Utc::now())
    }

    /// Parse an RFC 3339 timestamp, keeping its offset.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        Ok(DateTime::parse_from_rfc3339(s.trim())?)
    }

    /// Render a service-supplied timestamp for display.
    ///
    /// The analysis service does not guarantee a machine-readable format, so
    /// anything that fails to parse as RFC 3339 (or as a naive ISO datetime)
    /// is shown verbatim.
    pub fn display_timestamp(raw: &str) -> String {
        let trimmed = raw.trim();
        if let Ok(parsed) = parse_timestamp(trimmed) {
            return parsed
                .with_timezone(&Utc)
                .format("%Y-%m-%d %H:%M UTC")
                .to_string();
        }
        // Python's datetime.isoformat() without a zone, e.g. "2024-07-04T15:30:00.123456"
        if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return naive.format("%Y-%m-%d %H:%M").to_string();
        }
        trimmed.to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn test_format_timestamp() {
            let instant = Utc.with_ymd_and_hms(2024, 7, 4, 15, 30, 0).unwrap();
            assert_eq!(format_timestamp(&instant), "2024-07-04T15:30:00Z");
        }

        #[test]
        fn test_now_timestamp_parses_back() {
            let now = now_timestamp();
            assert!(parse_timestamp(&now).is_ok());
        }

        #[test]
        fn test_display_timestamp() {
            assert_eq!(
                display_timestamp("2024-07-04T08:30:00-07:00"),
                "2024-07-04 15:30 UTC"
            );
            assert_eq!(
                display_timestamp("2024-07-04T15:30:00.123456"),
                "2024-07-04 15:30"
            );
            // Free-form text from the service is passed through
            assert_eq!(display_timestamp(" this morning "), "this morning");
        }

        #[test]
        fn test_parse_timestamp_rejects_garbage() {
            assert!(parse_timestamp("current timestamp").is_err());
        }
    }
}
