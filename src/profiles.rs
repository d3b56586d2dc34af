use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Discover profile directories under a browser's storage root.
///
/// Returns paths relative to `root`. A missing root means the browser is not
/// installed and yields an empty list. Browsers without profile support get a
/// single empty relative path, standing for the root itself. The order is
/// filesystem-walk order; callers sort the merged records later.
pub fn resolve_profiles(
    root: &Path,
    data_file_name: &str,
    profile_support: bool,
    prefixes: &[&str],
) -> Vec<PathBuf> {
    if !root.exists() {
        info!("no browser data at {}", root.display());
        return Vec::new();
    }
    if !profile_support {
        return vec![PathBuf::new()];
    }

    let mut found = Vec::new();
    walk(root, root, data_file_name, &mut found);

    if !prefixes.is_empty() {
        found.retain(|profile| first_segment_matches(profile, prefixes));
    }
    found
}

/// Full path of a profile's data file: `root/profile/file_name`.
pub fn data_file_path(root: &Path, profile: &Path, file_name: &str) -> PathBuf {
    root.join(profile).join(file_name)
}

fn walk(dir: &Path, root: &Path, data_file_name: &str, out: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("skipping unreadable directory {}: {err}", dir.display());
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, root, data_file_name, out);
        } else if entry.file_name().to_str() == Some(data_file_name) {
            let relative = dir.strip_prefix(root).unwrap_or(Path::new(""));
            out.push(relative.to_path_buf());
        }
    }
}

fn first_segment_matches(profile: &Path, prefixes: &[&str]) -> bool {
    let Some(first) = profile.iter().next().and_then(|s| s.to_str()) else {
        return false;
    };
    prefixes.iter().any(|prefix| {
        match prefix.strip_suffix('*') {
            Some(stem) => first.starts_with(stem),
            None => first == *prefix,
        }
    })
}
