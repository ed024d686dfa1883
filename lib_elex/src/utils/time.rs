use chrono::{DateTime, Local, Utc};

/// Current local time as whole Unix seconds (fractional part truncated).
pub fn unix_timestamp() -> i64 {
    Local::now().timestamp()
}

/// Current UTC time formatted as RFC 9557 with millisecond precision.
pub fn current_datetime_rfc9557() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_whole_seconds_since_epoch() {
        let before = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let ts = unix_timestamp();
        assert!(ts >= before && ts <= before + 1);
    }

    #[test]
    fn rfc9557_has_millis_and_zulu() {
        let s = current_datetime_rfc9557();
        assert!(s.ends_with('Z'));
        assert_eq!(s.len(), "2024-01-01T00:00:00.000Z".len());
    }
}
