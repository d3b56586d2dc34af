use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};
use plist::{Dictionary, Value};

use crate::error::Error;
use crate::parsers::unix_epoch_local;
use crate::records::BookmarkRecord;

/// Safari `Bookmarks.plist`: a binary property list of nested
/// `WebBookmarkTypeList` folders with `WebBookmarkTypeLeaf` bookmarks.
/// Leaves carry no creation date in older exports; those fall back to the
/// Unix epoch.
pub fn parse(path: &Path) -> Result<Vec<BookmarkRecord>, Error> {
    let root = Value::from_file(path).map_err(|err| Error::parse(path, err))?;
    let mut out = Vec::new();
    if let Some(dict) = root.as_dictionary() {
        let title = dict.get("Title").and_then(Value::as_string).unwrap_or_default();
        collect(dict, title, &mut out);
    }
    Ok(out)
}

fn collect(dict: &Dictionary, folder: &str, out: &mut Vec<BookmarkRecord>) {
    let Some(children) = dict.get("Children").and_then(Value::as_array) else {
        return;
    };
    for child in children {
        let Some(node) = child.as_dictionary() else {
            continue;
        };
        match node.get("WebBookmarkType").and_then(Value::as_string) {
            Some("WebBookmarkTypeList") => {
                let name = node.get("Title").and_then(Value::as_string).unwrap_or(folder);
                collect(node, name, out);
            }
            Some("WebBookmarkTypeLeaf") => {
                let Some(url) = node.get("URLString").and_then(Value::as_string) else {
                    continue;
                };
                let title = node
                    .get("URIDictionary")
                    .and_then(Value::as_dictionary)
                    .and_then(|uri| uri.get("title"))
                    .and_then(Value::as_string)
                    .unwrap_or_default();
                out.push(BookmarkRecord {
                    timestamp: date_added(node),
                    url: url.to_string(),
                    title: title.to_string(),
                    folder: folder.to_string(),
                });
            }
            _ => {}
        }
    }
}

fn date_added(node: &Dictionary) -> DateTime<Local> {
    node.get("DateAdded")
        .and_then(Value::as_date)
        .map(|date| DateTime::<Utc>::from(SystemTime::from(date)).with_timezone(&Local))
        .unwrap_or_else(unix_epoch_local)
}
