use crate::config::DEFAULT_ICON;
use crate::model::{DesktopAction, DesktopEntry};
use hashlink::LinkedHashMap;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DESKTOP_ENTRY_SECTION: &str = "Desktop Entry";
const DESKTOP_ACTION_PREFIX: &str = "Desktop Action ";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },
    #[error("{}: missing [Desktop Entry] section", .path.display())]
    MissingDesktopEntry { path: PathBuf },
    #[error("{}:{}: malformed line: {:?}", .path.display(), .line, .text)]
    MalformedLine {
        path: PathBuf,
        line: usize,
        text: String,
    },
}

/// Parse a .desktop file into its launchable fields.
///
/// Values are taken literally; no %-placeholder handling is performed.
pub fn parse_desktop_file(path: &Path) -> Result<DesktopEntry, ParseError> {
    debug!("Parsing desktop file {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut name = String::new();
    let mut exec_raw = String::new();
    let mut icon = DEFAULT_ICON.to_string();
    let mut actions: LinkedHashMap<String, DesktopAction> = LinkedHashMap::new();

    let mut in_section = false;
    let mut in_desktop_entry = false;
    let mut seen_desktop_entry = false;
    let mut current_action: Option<String> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            let section = line[1..line.len() - 1].trim();
            in_section = true;
            in_desktop_entry = section == DESKTOP_ENTRY_SECTION;
            if in_desktop_entry {
                seen_desktop_entry = true;
            }
            current_action = None;
            if section.starts_with(DESKTOP_ACTION_PREFIX) {
                // The action key is the last whitespace token of the section
                // name. A recurring key overwrites the earlier record but
                // keeps its original position.
                if let Some(key) = section.split_whitespace().last() {
                    let blank = DesktopAction {
                        name: String::new(),
                        exec: String::new(),
                    };
                    match actions.get_mut(key) {
                        Some(existing) => *existing = blank,
                        None => {
                            actions.insert(key.to_string(), blank);
                        }
                    }
                    current_action = Some(key.to_string());
                }
            }
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some(kv) => kv,
            None => {
                return Err(ParseError::MalformedLine {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
        };
        if !in_section {
            // key=value before any section header
            return Err(ParseError::MalformedLine {
                path: path.to_path_buf(),
                line: idx + 1,
                text: line.to_string(),
            });
        }
        let key = key.trim();
        let value = value.trim();

        if in_desktop_entry {
            if key.eq_ignore_ascii_case("Name") {
                name = value.to_string();
            } else if key.eq_ignore_ascii_case("Exec") {
                exec_raw = value.to_string();
            } else if key.eq_ignore_ascii_case("Icon") {
                icon = value.to_string();
            }
        } else if let Some(action_key) = &current_action {
            if let Some(action) = actions.get_mut(action_key) {
                if key.eq_ignore_ascii_case("Name") {
                    action.name = value.to_string();
                } else if key.eq_ignore_ascii_case("Exec") {
                    action.exec = value.to_string();
                }
            }
        }
    }

    if !seen_desktop_entry {
        return Err(ParseError::MissingDesktopEntry {
            path: path.to_path_buf(),
        });
    }

    // Only the first whitespace token of the primary Exec is kept; action
    // Exec values stay untruncated.
    let exec = exec_raw.split_whitespace().next().unwrap_or("").to_string();

    Ok(DesktopEntry {
        name,
        exec,
        icon,
        actions,
    })
}
