use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::Error;
use crate::parsers::parse_local_timestamp;
use crate::records::HistoryRecord;

/// Run a descriptor's history query against a snapshot and normalize the
/// rows. The query must return exactly two columns: a local-time timestamp
/// string and a URL.
pub fn extract_history(path: &Path, sql: &str) -> Result<Vec<HistoryRecord>, Error> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|err| Error::extraction(path, err))?;

    let mut stmt = conn.prepare(sql).map_err(|err| Error::extraction(path, err))?;
    let rows = stmt
        .query_map([], |row| {
            let visit_time: String = row.get(0)?;
            let url: String = row.get(1)?;
            Ok((visit_time, url))
        })
        .map_err(|err| Error::extraction(path, err))?;

    let mut out = Vec::new();
    for row in rows {
        let (visit_time, url) = row.map_err(|err| Error::extraction(path, err))?;
        out.push(HistoryRecord {
            timestamp: parse_local_timestamp(&visit_time, path)?,
            url,
        });
    }
    Ok(out)
}
