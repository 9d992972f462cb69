use hashlink::LinkedHashMap;

/// Parsed content of one .desktop descriptor file.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    pub name: String,          // Display name, may be empty
    pub exec: String,          // First whitespace token of the Exec line
    pub icon: String,          // Icon name, defaults to the fallback icon
    pub actions: LinkedHashMap<String, DesktopAction>,
}

/// A sub-launch variant declared in a [Desktop Action <key>] section.
#[derive(Debug, Clone)]
pub struct DesktopAction {
    pub name: String,
    pub exec: String,          // Full Exec value, kept untruncated
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub icon: String,            // Resolved icon path or the fallback icon
    pub label: String,
    pub description: String,
    pub exec: Option<String>,    // None for informational items
}
