use crate::model::DesktopEntry;
use crate::parser::parse_desktop_file;
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

/// A descriptor file that matched the query, with its parsed entry so the
/// caller does not need a second read.
pub struct Match {
    pub path: PathBuf,
    pub entry: DesktopEntry,
}

/// Enumerate .desktop files under the given directories and keep those
/// matching the query.
///
/// The query matches case-insensitively as a substring of the file name, the
/// parsed Name or the parsed Exec command. Every candidate is parsed, since a
/// Name or Exec match counts even when the file name alone does not. Files
/// that fail to parse are skipped without aborting the scan.
pub fn find_matches(query: &str, desktop_dirs: &[PathBuf]) -> Vec<Match> {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();

    for dir in desktop_dirs {
        if !dir.is_dir() {
            continue;
        }
        debug!("Scanning directory {:?}", dir);
        if let Ok(read_dir) = fs::read_dir(dir) {
            for dir_entry in read_dir.flatten() {
                let path = dir_entry.path();
                let file_name = match path.file_name().and_then(|s| s.to_str()) {
                    Some(name) => name.to_string(),
                    None => continue,
                };
                if !file_name.ends_with(".desktop") {
                    continue;
                }

                let entry = match parse_desktop_file(&path) {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!("Skipping {:?}: {}", path, err);
                        continue;
                    }
                };

                if file_name.to_lowercase().contains(&needle)
                    || entry.name.to_lowercase().contains(&needle)
                    || entry.exec.to_lowercase().contains(&needle)
                {
                    matches.push(Match { path, entry });
                }
            }
        }
    }

    info!("Scan: {} matching desktop files", matches.len());
    matches
}
