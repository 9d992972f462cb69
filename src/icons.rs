use std::path::PathBuf;

/// Resolves an icon name to a concrete file path.
pub struct IconResolver {
    icon_dirs: Vec<PathBuf>,
    fallback: String,
}

impl IconResolver {
    pub fn new(icon_dirs: Vec<PathBuf>, fallback: String) -> Self {
        Self {
            icon_dirs,
            fallback,
        }
    }

    /// Probe `<dir>/<name>.png` under each icon directory in order and return
    /// the first existing file. Falls back to the default icon; never fails.
    pub fn resolve(&self, icon_name: &str) -> String {
        for dir in &self.icon_dirs {
            let candidate = dir.join(format!("{}.png", icon_name));
            if candidate.is_file() {
                return candidate.to_string_lossy().to_string();
            }
        }
        self.fallback.clone()
    }
}
