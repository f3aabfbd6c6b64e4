use chrono::{DateTime, Utc};

/// Date portion of a client-supplied timestamp, used for daily grouping.
/// Well-formed RFC 3339 input is normalized to its UTC calendar date;
/// anything else is tolerated and grouped by its raw text before the `T`.
pub fn date_part(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.split('T').next().unwrap_or(timestamp).to_string(),
    }
}

/// Split a timestamp into UTC date and seconds-precision time strings for
/// export rows, with the same raw-text fallback as [`date_part`].
pub fn date_time_parts(timestamp: &str) -> (String, String) {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => {
            let utc = dt.with_timezone(&Utc);
            (
                utc.format("%Y-%m-%d").to_string(),
                utc.format("%H:%M:%S").to_string(),
            )
        }
        Err(_) => {
            let mut parts = timestamp.splitn(2, 'T');
            let date = parts.next().unwrap_or("").to_string();
            let rest = parts.next().unwrap_or("");
            let time = rest
                .split(['.', 'Z', '+'])
                .next()
                .unwrap_or("")
                .to_string();
            (date, time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_is_normalized_to_utc() {
        assert_eq!(date_part("2024-01-01T23:30:00+02:00"), "2024-01-01");
        assert_eq!(
            date_time_parts("2024-01-01T10:00:00.123Z"),
            ("2024-01-01".to_string(), "10:00:00".to_string())
        );
    }

    #[test]
    fn malformed_input_falls_back_to_raw_split() {
        assert_eq!(date_part("yesterday"), "yesterday");
        assert_eq!(
            date_time_parts("2024-01-01Tlunchtime"),
            ("2024-01-01".to_string(), "lunchtime".to_string())
        );
    }
}
