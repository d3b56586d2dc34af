use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::parsers;
use crate::platform::Platform;
use crate::records::BookmarkRecord;

pub type BookmarkParser = fn(&Path) -> Result<Vec<BookmarkRecord>, Error>;

/// Static description of one browser's on-disk layout and extraction method.
/// Paths are relative to the user's home directory, one level above the
/// profile directories where those exist.
pub struct BrowserDescriptor {
    pub name: &'static str,
    pub windows_path: Option<&'static str>,
    pub mac_path: Option<&'static str>,
    pub linux_path: Option<&'static str>,
    pub profile_support: bool,
    pub profile_dir_prefixes: &'static [&'static str],
    pub history_file: &'static str,
    pub bookmarks_file: &'static str,
    pub history_sql: &'static str,
    pub bookmark_parser: BookmarkParser,
}

impl BrowserDescriptor {
    pub fn platform_path(&self, platform: Platform) -> Option<&'static str> {
        match platform {
            Platform::Windows => self.windows_path,
            Platform::Mac => self.mac_path,
            Platform::Linux => self.linux_path,
            Platform::Other => None,
        }
    }

    pub fn storage_root(&self, platform: Platform, home: &Path) -> Option<PathBuf> {
        self.platform_path(platform).map(|relative| home.join(relative))
    }
}

/// Chromium stores visit times as microseconds since 1601-01-01; the query
/// shifts to the Unix epoch and converts to local wall-clock time so every
/// engine hands back the same two-column shape.
pub const CHROMIUM_HISTORY_SQL: &str = "\
    SELECT datetime(visits.visit_time / 1000000 - 11644473600, 'unixepoch', 'localtime') \
           AS visit_time, urls.url \
    FROM visits JOIN urls ON urls.id = visits.url \
    ORDER BY visit_time DESC";

pub const FIREFOX_HISTORY_SQL: &str = "\
    SELECT datetime(visit_date / 1000000, 'unixepoch', 'localtime') AS visit_time, url \
    FROM moz_historyvisits JOIN moz_places ON moz_historyvisits.place_id = moz_places.id \
    WHERE visit_date IS NOT NULL AND url LIKE 'http%' AND title IS NOT NULL";

/// Safari counts from the Mac epoch, 2001-01-01.
pub const SAFARI_HISTORY_SQL: &str = "\
    SELECT datetime(visit_time + 978307200, 'unixepoch', 'localtime') AS visit_time, url \
    FROM history_visits JOIN history_items ON history_items.id = history_visits.history_item \
    ORDER BY visit_time DESC";

const CHROMIUM_PROFILE_PREFIXES: &[&str] = &["Default*", "Profile*"];

pub static REGISTRY: &[BrowserDescriptor] = &[
    BrowserDescriptor {
        name: "Chrome",
        windows_path: Some("AppData/Local/Google/Chrome/User Data"),
        mac_path: Some("Library/Application Support/Google/Chrome"),
        linux_path: Some(".config/google-chrome"),
        profile_support: true,
        profile_dir_prefixes: CHROMIUM_PROFILE_PREFIXES,
        history_file: "History",
        bookmarks_file: "Bookmarks",
        history_sql: CHROMIUM_HISTORY_SQL,
        bookmark_parser: parsers::bookmarks_json::parse,
    },
    BrowserDescriptor {
        name: "Chromium",
        windows_path: Some("AppData/Local/chromium/User Data"),
        mac_path: None,
        linux_path: Some(".config/chromium"),
        profile_support: true,
        profile_dir_prefixes: CHROMIUM_PROFILE_PREFIXES,
        history_file: "History",
        bookmarks_file: "Bookmarks",
        history_sql: CHROMIUM_HISTORY_SQL,
        bookmark_parser: parsers::bookmarks_json::parse,
    },
    BrowserDescriptor {
        name: "Firefox",
        windows_path: Some("AppData/Roaming/Mozilla/Firefox/Profiles"),
        mac_path: Some("Library/Application Support/Firefox/Profiles"),
        linux_path: Some(".mozilla/firefox"),
        profile_support: true,
        profile_dir_prefixes: &[],
        history_file: "places.sqlite",
        bookmarks_file: "places.sqlite",
        history_sql: FIREFOX_HISTORY_SQL,
        bookmark_parser: parsers::bookmarks_db::parse,
    },
    BrowserDescriptor {
        name: "Safari",
        windows_path: None,
        mac_path: Some("Library/Safari"),
        linux_path: None,
        profile_support: false,
        profile_dir_prefixes: &[],
        history_file: "History.db",
        bookmarks_file: "Bookmarks.plist",
        history_sql: SAFARI_HISTORY_SQL,
        bookmark_parser: parsers::bookmarks_plist::parse,
    },
    BrowserDescriptor {
        name: "Edge",
        windows_path: Some("AppData/Local/Microsoft/Edge/User Data"),
        mac_path: None,
        linux_path: None,
        profile_support: true,
        profile_dir_prefixes: CHROMIUM_PROFILE_PREFIXES,
        history_file: "History",
        bookmarks_file: "Bookmarks",
        history_sql: CHROMIUM_HISTORY_SQL,
        bookmark_parser: parsers::bookmarks_json::parse,
    },
    BrowserDescriptor {
        name: "Opera",
        windows_path: Some("AppData/Roaming/Opera Software/Opera Stable"),
        mac_path: None,
        linux_path: Some(".config/opera"),
        profile_support: false,
        profile_dir_prefixes: &[],
        history_file: "History",
        bookmarks_file: "Bookmarks",
        history_sql: CHROMIUM_HISTORY_SQL,
        bookmark_parser: parsers::bookmarks_json::parse,
    },
    BrowserDescriptor {
        name: "OperaGX",
        windows_path: Some("AppData/Roaming/Opera Software/Opera GX Stable"),
        mac_path: None,
        linux_path: None,
        profile_support: false,
        profile_dir_prefixes: &[],
        history_file: "History",
        bookmarks_file: "Bookmarks",
        history_sql: CHROMIUM_HISTORY_SQL,
        bookmark_parser: parsers::bookmarks_json::parse,
    },
    BrowserDescriptor {
        name: "Brave",
        windows_path: None,
        mac_path: None,
        linux_path: Some(".config/BraveSoftware/Brave-Browser"),
        profile_support: true,
        profile_dir_prefixes: CHROMIUM_PROFILE_PREFIXES,
        history_file: "History",
        bookmarks_file: "Bookmarks",
        history_sql: CHROMIUM_HISTORY_SQL,
        bookmark_parser: parsers::bookmarks_json::parse,
    },
];

pub fn all() -> &'static [BrowserDescriptor] {
    REGISTRY
}

pub fn find(name: &str) -> Option<&'static BrowserDescriptor> {
    REGISTRY.iter().find(|desc| desc.name.eq_ignore_ascii_case(name))
}

/// Comma-separated browser names for CLI help and error messages.
pub fn available_names() -> String {
    REGISTRY
        .iter()
        .map(|desc| desc.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{all, find};
    use crate::platform::Platform;
    use std::path::Path;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("firefox").map(|d| d.name), Some("Firefox"));
        assert_eq!(find("OPERAGX").map(|d| d.name), Some("OperaGX"));
        assert!(find("netscape").is_none());
    }

    #[test]
    fn every_descriptor_supports_at_least_one_platform() {
        for desc in all() {
            assert!(
                desc.windows_path.is_some() || desc.mac_path.is_some() || desc.linux_path.is_some(),
                "{} has no platform path",
                desc.name
            );
        }
    }

    #[test]
    fn storage_root_joins_home_with_platform_path() {
        let chrome = find("chrome").expect("chrome");
        let root = chrome
            .storage_root(Platform::Linux, Path::new("/home/user"))
            .expect("root");
        assert_eq!(root, Path::new("/home/user/.config/google-chrome"));
        assert!(chrome.storage_root(Platform::Other, Path::new("/home/user")).is_none());
    }

    #[test]
    fn safari_is_mac_only_without_profiles() {
        let safari = find("safari").expect("safari");
        assert!(safari.platform_path(Platform::Windows).is_none());
        assert!(safari.platform_path(Platform::Linux).is_none());
        assert!(!safari.profile_support);
    }
}
