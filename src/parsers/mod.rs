pub mod bookmarks_db;
pub mod bookmarks_json;
pub mod bookmarks_plist;
pub mod history_db;

use std::path::Path;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::error::Error;

/// Lexical form produced by the per-browser SQL: already local time, no offset.
const SQL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const WEBKIT_UNIX_OFFSET_SECS: i64 = 11_644_473_600;

/// Parse a `YYYY-MM-DD HH:MM:SS` string and attach the process's local
/// timezone offset. The queries convert to local time themselves, so the
/// string is naive local wall-clock time.
pub(crate) fn parse_local_timestamp(value: &str, path: &Path) -> Result<DateTime<Local>, Error> {
    let naive = NaiveDateTime::parse_from_str(value, SQL_TIMESTAMP_FORMAT)
        .map_err(|err| Error::parse(path, format!("bad timestamp {value:?}: {err}")))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| Error::parse(path, format!("timestamp {value:?} does not exist locally")))
}

/// WebKit epoch (1601-01-01) microseconds, as used by Chromium bookmark
/// metadata, to a zoned local datetime.
pub(crate) fn webkit_micros_to_local(microseconds: i64) -> Option<DateTime<Local>> {
    if microseconds <= 0 {
        return None;
    }
    let secs = microseconds / 1_000_000 - WEBKIT_UNIX_OFFSET_SECS;
    if secs < 0 {
        return None;
    }
    let nsecs = ((microseconds % 1_000_000) as u32) * 1000;
    chrono::DateTime::<chrono::Utc>::from_timestamp(secs, nsecs).map(|dt| dt.with_timezone(&Local))
}

/// Fallback timestamp for bookmarks whose source carries no creation date.
pub(crate) fn unix_epoch_local() -> DateTime<Local> {
    chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.with_timezone(&Local)
}

#[cfg(test)]
mod tests {
    use super::{parse_local_timestamp, webkit_micros_to_local};
    use crate::error::Error;
    use chrono::{Datelike, Timelike};
    use std::path::Path;

    #[test]
    fn parses_sql_timestamp_with_local_offset() {
        let ts = parse_local_timestamp("2024-01-01 10:30:00", Path::new("History")).expect("parse");
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn malformed_timestamp_is_a_parse_error() {
        let err = parse_local_timestamp("01/01/2024 10:30", Path::new("History")).expect_err("should fail");
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn webkit_conversion_lands_on_unix_time() {
        // 2021-07-15 00:00:00 UTC in WebKit microseconds.
        let micros = (1_626_307_200i64 + 11_644_473_600) * 1_000_000;
        let ts = webkit_micros_to_local(micros).expect("convert");
        assert_eq!(ts.timestamp(), 1_626_307_200);
    }

    #[test]
    fn webkit_conversion_rejects_pre_epoch_values() {
        assert!(webkit_micros_to_local(0).is_none());
        assert!(webkit_micros_to_local(1_000_000).is_none());
    }
}
