use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::Error;
use crate::parsers::parse_local_timestamp;
use crate::records::BookmarkRecord;

/// Firefox keeps bookmarks in the same `places.sqlite` as history; the parent
/// row of a bookmark is its containing folder.
const FIREFOX_BOOKMARKS_SQL: &str = "\
    SELECT datetime(b.dateAdded / 1000000, 'unixepoch', 'localtime') AS added_time, \
           p.url, b.title, f.title \
    FROM moz_bookmarks b \
    JOIN moz_places p ON b.fk = p.id \
    JOIN moz_bookmarks f ON b.parent = f.id \
    WHERE b.dateAdded IS NOT NULL AND p.url LIKE 'http%' AND b.title IS NOT NULL";

pub fn parse(path: &Path) -> Result<Vec<BookmarkRecord>, Error> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|err| Error::extraction(path, err))?;

    let mut stmt = conn
        .prepare(FIREFOX_BOOKMARKS_SQL)
        .map_err(|err| Error::extraction(path, err))?;
    let rows = stmt
        .query_map([], |row| {
            let added_time: String = row.get(0)?;
            let url: String = row.get(1)?;
            let title: String = row.get(2)?;
            let folder: Option<String> = row.get(3)?;
            Ok((added_time, url, title, folder))
        })
        .map_err(|err| Error::extraction(path, err))?;

    let mut out = Vec::new();
    for row in rows {
        let (added_time, url, title, folder) = row.map_err(|err| Error::extraction(path, err))?;
        out.push(BookmarkRecord {
            timestamp: parse_local_timestamp(&added_time, path)?,
            url,
            title,
            folder: folder.unwrap_or_default(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::parse;
    use rusqlite::Connection;
    use tempfile::tempdir;

    #[test]
    fn extracts_firefox_bookmarks_with_folder_names() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("places.sqlite");
        let conn = Connection::open(&path).expect("conn");
        conn.execute(
            "CREATE TABLE moz_places (id INTEGER PRIMARY KEY, url TEXT)",
            [],
        )
        .expect("create places");
        conn.execute(
            "CREATE TABLE moz_bookmarks (id INTEGER PRIMARY KEY, fk INTEGER, parent INTEGER, \
             title TEXT, dateAdded INTEGER)",
            [],
        )
        .expect("create bookmarks");
        conn.execute(
            "INSERT INTO moz_places (id, url) VALUES (1, 'https://example.com/docs')",
            [],
        )
        .expect("insert place");
        // Folder row, then a bookmark inside it.
        conn.execute(
            "INSERT INTO moz_bookmarks (id, fk, parent, title, dateAdded) \
             VALUES (10, NULL, 0, 'Reference', NULL)",
            [],
        )
        .expect("insert folder");
        conn.execute(
            "INSERT INTO moz_bookmarks (id, fk, parent, title, dateAdded) \
             VALUES (11, 1, 10, 'Example Docs', 1700000000000000)",
            [],
        )
        .expect("insert bookmark");
        drop(conn);

        let records = parse(&path).expect("bookmarks");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "https://example.com/docs");
        assert_eq!(records[0].title, "Example Docs");
        assert_eq!(records[0].folder, "Reference");
        assert_eq!(records[0].timestamp.timestamp(), 1_700_000_000);
    }
}
