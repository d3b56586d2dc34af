use chrono::{DateTime, Local};
use serde::Serialize;

/// One visit to a URL, normalized from whatever shape the source browser
/// stores. The timestamp always carries the local offset.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Local>,
    #[serde(rename = "URL")]
    pub url: String,
}

/// One saved bookmark with its containing folder's display name.
#[derive(Debug, Clone, Serialize)]
pub struct BookmarkRecord {
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Local>,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Folder")]
    pub folder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    History,
    Bookmarks,
}

impl RecordKind {
    /// Top-level key used by the JSON formatter.
    pub fn key(&self) -> &'static str {
        match self {
            RecordKind::History => "history",
            RecordKind::Bookmarks => "bookmarks",
        }
    }

    /// Fixed header tuple for the CSV formatter.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            RecordKind::History => &["Timestamp", "URL"],
            RecordKind::Bookmarks => &["Timestamp", "URL", "Title", "Folder"],
        }
    }
}

/// Seam between collections and the formatters. Implemented by the two
/// canonical record types only.
pub trait DomainRecord: Clone + Serialize {
    fn kind() -> RecordKind;
    fn timestamp(&self) -> DateTime<Local>;
    fn url(&self) -> &str;
}

impl DomainRecord for HistoryRecord {
    fn kind() -> RecordKind {
        RecordKind::History
    }

    fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    fn url(&self) -> &str {
        &self.url
    }
}

impl DomainRecord for BookmarkRecord {
    fn kind() -> RecordKind {
        RecordKind::Bookmarks
    }

    fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    fn url(&self) -> &str {
        &self.url
    }
}
