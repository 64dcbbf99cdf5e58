//! 时间工具函数 - 业务时区转换
//!
//! Client timestamps without an offset are read as wall-clock time in the
//! business timezone. Everything past the API layer works in UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult, ErrorCode};

/// Naive layouts accepted for reservation times, tried in order
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// 解析预订时间
///
/// Accepts RFC 3339 with an explicit offset, a naive date-time in one of
/// [`NAIVE_DATE_TIME_FORMATS`], or a bare `YYYY-MM-DD` meaning local midnight.
/// Results are truncated to whole milliseconds.
pub fn parse_date_time(value: &str, tz: Tz) -> AppResult<DateTime<Utc>> {
    parse_instant(value.trim(), tz).map(|dt| dt.trunc_subsecs(3))
}

fn parse_instant(value: &str, tz: Tz) -> AppResult<DateTime<Utc>> {
    let invalid = || {
        AppError::with_message(
            ErrorCode::InvalidDateTime,
            format!("Invalid date/time: {}", value),
        )
    };

    if value.is_empty() {
        return Err(invalid());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(local_to_utc(naive, tz));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| local_to_utc(date.and_time(NaiveTime::MIN), tz))
        .map_err(|_| invalid())
}

/// 解析日期字符串 (严格 YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    let bytes = date.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(AppError::with_message(
            ErrorCode::InvalidDate,
            format!("Invalid date format: {}", date),
        ));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(ErrorCode::InvalidDate, format!("Invalid date: {}", date))
    })
}

/// 本地时间 → UTC (业务时区)
///
/// DST gap fallback: 如果本地时间不存在 (夏令时跳跃)，按 UTC 解释。
pub fn local_to_utc(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

/// 一天的起止时间 (业务时区)
///
/// Returns `(00:00:00.000, 23:59:59.999)` converted to UTC. Both ends are
/// inclusive.
pub fn day_bounds(date: NaiveDate, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = local_to_utc(date.and_time(NaiveTime::MIN), tz);
    let last_millisecond =
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    let end = local_to_utc(date.and_time(last_millisecond), tz);
    (start, end)
}

/// 解析时区名称 (IANA)，失败返回 UTC
pub fn parse_timezone(name: &str) -> Tz {
    name.trim().parse().unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse timezone '{}': {}, falling back to UTC",
            name,
            e
        );
        Tz::UTC
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_keeps_instant() {
        let dt = parse_date_time("2025-03-01T19:00:00+01:00", Tz::UTC).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap());

        let dt = parse_date_time("2025-03-01T19:00:00Z", chrono_tz::Europe::Madrid).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 1, 19, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_uses_business_timezone() {
        let utc = parse_date_time("2025-03-01T19:00", Tz::UTC).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2025, 3, 1, 19, 0, 0).unwrap());

        // Madrid is UTC+1 in winter
        let madrid = parse_date_time("2025-03-01T19:00:00", chrono_tz::Europe::Madrid).unwrap();
        assert_eq!(madrid, Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap());

        let spaced = parse_date_time("2025-03-01 19:00", Tz::UTC).unwrap();
        assert_eq!(spaced, utc);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = parse_date_time("2025-03-01T19:00:00.250", Tz::UTC).unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_truncates_to_millis() {
        let exact = parse_date_time("2025-03-01T19:00:00.000Z", Tz::UTC).unwrap();
        let micro = parse_date_time("2025-03-01T19:00:00.0004Z", Tz::UTC).unwrap();
        assert_eq!(micro, exact);

        let naive = parse_date_time("2025-03-01T19:00:00.250999", Tz::UTC).unwrap();
        assert_eq!(naive.timestamp_subsec_nanos(), 250_000_000);
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let dt = parse_date_time("2025-03-01", Tz::UTC).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for value in ["", "   ", "tomorrow", "2025-13-01T19:00", "2025-02-30T10:00", "19:00"] {
            let err = parse_date_time(value, Tz::UTC).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidDateTime, "{value:?}");
        }
    }

    #[test]
    fn test_parse_date_strict() {
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        for value in ["2025-3-1", "03/01/2025", "2025-03-01T00:00", "abcd-ef-gh", "2025-02-30", ""] {
            assert_eq!(
                parse_date(value).unwrap_err().code,
                ErrorCode::InvalidDate,
                "{value:?}"
            );
        }
    }

    #[test]
    fn test_day_bounds_inclusive_window() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let (start, end) = day_bounds(date, Tz::UTC);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2025, 3, 1, 23, 59, 59).unwrap()
                + chrono::Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_day_bounds_follow_timezone() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let (start, _) = day_bounds(date, chrono_tz::Europe::Madrid);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 2, 28, 23, 0, 0).unwrap());
    }

    #[test]
    fn test_dst_gap_falls_back_to_utc() {
        // 2025-03-30 02:30 does not exist in Madrid
        let naive = NaiveDate::from_ymd_opt(2025, 3, 30)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert_eq!(local_to_utc(naive, chrono_tz::Europe::Madrid), naive.and_utc());
    }

    #[test]
    fn test_parse_timezone_fallback() {
        assert_eq!(parse_timezone("Europe/Madrid"), chrono_tz::Europe::Madrid);
        assert_eq!(parse_timezone("Mars/Olympus"), Tz::UTC);
    }
}
