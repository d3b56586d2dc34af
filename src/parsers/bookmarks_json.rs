use std::path::Path;

use serde_json::Value;

use crate::error::Error;
use crate::parsers::{unix_epoch_local, webkit_micros_to_local};
use crate::records::BookmarkRecord;

/// Chromium-family `Bookmarks` file: a JSON document whose `roots` values are
/// folder trees. Leaf `date_added` is WebKit-epoch microseconds in a string.
pub fn parse(path: &Path) -> Result<Vec<BookmarkRecord>, Error> {
    let bytes = std::fs::read(path).map_err(|err| Error::extraction(path, err))?;
    let doc: Value = serde_json::from_slice(&bytes).map_err(|err| Error::parse(path, err))?;

    let mut out = Vec::new();
    if let Some(roots) = doc.get("roots").and_then(Value::as_object) {
        for root in roots.values() {
            collect(root, &mut out);
        }
    }
    Ok(out)
}

fn collect(node: &Value, out: &mut Vec<BookmarkRecord>) {
    let folder = node.get("name").and_then(Value::as_str).unwrap_or_default();
    let Some(children) = node.get("children").and_then(Value::as_array) else {
        return;
    };
    for child in children {
        match child.get("type").and_then(Value::as_str) {
            Some("url") => {
                let Some(url) = child.get("url").and_then(Value::as_str) else {
                    continue;
                };
                let title = child.get("name").and_then(Value::as_str).unwrap_or_default();
                let micros = child
                    .get("date_added")
                    .and_then(Value::as_str)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .unwrap_or(0);
                out.push(BookmarkRecord {
                    timestamp: webkit_micros_to_local(micros).unwrap_or_else(unix_epoch_local),
                    url: url.to_string(),
                    title: title.to_string(),
                    folder: folder.to_string(),
                });
            }
            Some("folder") => collect(child, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    fn fixture_json() -> String {
        // 2021-07-15 00:00:00 UTC in WebKit microseconds.
        let micros = (1_626_307_200i64 + 11_644_473_600) * 1_000_000;
        format!(
            r#"{{
                "roots": {{
                    "bookmark_bar": {{
                        "type": "folder",
                        "name": "Bookmarks bar",
                        "children": [
                            {{"type": "url", "name": "Example", "url": "https://example.com",
                              "date_added": "{micros}"}},
                            {{"type": "folder", "name": "Work", "children": [
                                {{"type": "url", "name": "Tracker", "url": "https://tracker.test/x",
                                  "date_added": "{micros}"}}
                            ]}}
                        ]
                    }},
                    "other": {{"type": "folder", "name": "Other bookmarks", "children": []}},
                    "sync_transaction_version": "1"
                }},
                "version": 1
            }}"#
        )
    }

    #[test]
    fn walks_nested_folders() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("Bookmarks");
        fs::write(&path, fixture_json()).expect("write");

        let records = parse(&path).expect("bookmarks");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].folder, "Bookmarks bar");
        assert_eq!(records[0].url, "https://example.com");
        assert_eq!(records[1].folder, "Work");
        assert_eq!(records[1].title, "Tracker");
        assert_eq!(records[1].timestamp.timestamp(), 1_626_307_200);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("Bookmarks");
        fs::write(&path, b"{ not json").expect("write");
        let err = parse(&path).expect_err("should fail");
        assert!(matches!(err, Error::Parse { .. }));
    }
}
