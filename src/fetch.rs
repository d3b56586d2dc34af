use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::browsers::{self, BrowserDescriptor};
use crate::error::Error;
use crate::output::OutputCollection;
use crate::parsers::history_db;
use crate::platform::Platform;
use crate::profiles;
use crate::records::{BookmarkRecord, HistoryRecord};
use crate::snapshot::SnapshotScope;

/// Fetch one browser's history on the current platform.
pub fn fetch_history(desc: &BrowserDescriptor) -> Result<OutputCollection<HistoryRecord>, Error> {
    fetch_history_from(desc, Platform::current(), &home_dir()?)
}

/// Fetch one browser's bookmarks on the current platform.
pub fn fetch_bookmarks(desc: &BrowserDescriptor) -> Result<OutputCollection<BookmarkRecord>, Error> {
    fetch_bookmarks_from(desc, Platform::current(), &home_dir()?)
}

/// History pipeline with injectable platform and home directory: resolve
/// profiles, snapshot each profile's database, normalize, merge, one sort
/// pass. A snapshot copy failure skips that profile only; a database open or
/// parse failure is fatal for the whole fetch.
pub fn fetch_history_from(
    desc: &BrowserDescriptor,
    platform: Platform,
    home: &Path,
) -> Result<OutputCollection<HistoryRecord>, Error> {
    let mut collection = OutputCollection::new();
    let Some(root) = resolve_root(desc, platform, home)? else {
        return Ok(collection);
    };
    let profile_dirs = profiles::resolve_profiles(
        &root,
        desc.history_file,
        desc.profile_support,
        desc.profile_dir_prefixes,
    );
    if profile_dirs.is_empty() {
        return Ok(collection);
    }

    let scope = SnapshotScope::new()?;
    for (index, profile) in profile_dirs.iter().enumerate() {
        let source = profiles::data_file_path(&root, profile, desc.history_file);
        let copy = match scope.copy_into(&source, &index.to_string()) {
            Ok(copy) => copy,
            Err(err) => {
                warn!("{}: skipping profile {}: {err}", desc.name, profile.display());
                continue;
            }
        };
        collection.append(history_db::extract_history(&copy, desc.history_sql)?);
    }
    collection.sort(false);
    Ok(collection)
}

/// Bookmark pipeline. Profiles are discovered by the bookmark file name; a
/// profile without one yields zero records rather than failing.
pub fn fetch_bookmarks_from(
    desc: &BrowserDescriptor,
    platform: Platform,
    home: &Path,
) -> Result<OutputCollection<BookmarkRecord>, Error> {
    let mut collection = OutputCollection::new();
    let Some(root) = resolve_root(desc, platform, home)? else {
        return Ok(collection);
    };
    let profile_dirs = profiles::resolve_profiles(
        &root,
        desc.bookmarks_file,
        desc.profile_support,
        desc.profile_dir_prefixes,
    );
    if profile_dirs.is_empty() {
        return Ok(collection);
    }

    let scope = SnapshotScope::new()?;
    for (index, profile) in profile_dirs.iter().enumerate() {
        let source = profiles::data_file_path(&root, profile, desc.bookmarks_file);
        if !source.exists() {
            continue;
        }
        let copy = match scope.copy_into(&source, &index.to_string()) {
            Ok(copy) => copy,
            Err(err) => {
                warn!("{}: skipping profile {}: {err}", desc.name, profile.display());
                continue;
            }
        };
        collection.append((desc.bookmark_parser)(&copy)?);
    }
    collection.sort(false);
    Ok(collection)
}

/// Aggregate history across the whole registry. Per-browser failures are
/// logged and skipped; the merged collection gets one final sort pass.
pub fn fetch_all_history() -> OutputCollection<HistoryRecord> {
    match home_dir() {
        Ok(home) => fetch_all_history_from(Platform::current(), &home),
        Err(err) => {
            warn!("{err}");
            OutputCollection::new()
        }
    }
}

pub fn fetch_all_history_from(platform: Platform, home: &Path) -> OutputCollection<HistoryRecord> {
    let mut merged = OutputCollection::new();
    for desc in browsers::all() {
        match fetch_history_from(desc, platform, home) {
            Ok(collection) => merged.extend(collection),
            Err(err) => warn!("skipping {} history: {err}", desc.name),
        }
    }
    merged.sort(false);
    merged
}

/// Aggregate bookmarks across the whole registry.
pub fn fetch_all_bookmarks() -> OutputCollection<BookmarkRecord> {
    match home_dir() {
        Ok(home) => fetch_all_bookmarks_from(Platform::current(), &home),
        Err(err) => {
            warn!("{err}");
            OutputCollection::new()
        }
    }
}

pub fn fetch_all_bookmarks_from(platform: Platform, home: &Path) -> OutputCollection<BookmarkRecord> {
    let mut merged = OutputCollection::new();
    for desc in browsers::all() {
        match fetch_bookmarks_from(desc, platform, home) {
            Ok(collection) => merged.extend(collection),
            Err(err) => warn!("skipping {} bookmarks: {err}", desc.name),
        }
    }
    merged.sort(false);
    merged
}

fn resolve_root(
    desc: &BrowserDescriptor,
    platform: Platform,
    home: &Path,
) -> Result<Option<PathBuf>, Error> {
    if platform == Platform::Other {
        info!("{} is unavailable on {platform}", desc.name);
        return Ok(None);
    }
    match desc.storage_root(platform, home) {
        Some(root) => Ok(Some(root)),
        None => Err(Error::UnsupportedBrowser {
            browser: desc.name.to_string(),
            platform,
        }),
    }
}

fn home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir().ok_or_else(|| Error::extraction(PathBuf::from("~"), "cannot locate home directory"))
}
