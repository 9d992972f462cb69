use appfinder::config::{Config, DEFAULT_ICON};
use std::path::PathBuf;

#[test]
fn defaults_cover_the_fixed_roots() {
    let config = Config::default();
    let search = &config.search;

    assert_eq!(
        search.desktop_dirs.first(),
        Some(&PathBuf::from("/usr/share/applications"))
    );
    assert_eq!(
        search.desktop_dirs.last(),
        Some(&PathBuf::from("/var/lib/flatpak/exports/share/applications"))
    );
    assert_eq!(
        search.icon_dirs.first(),
        Some(&PathBuf::from("/usr/share/icons/hicolor"))
    );
    assert_eq!(
        search.icon_dirs.last(),
        Some(&PathBuf::from("/usr/share/pixmaps"))
    );
    assert_eq!(search.fallback_icon, DEFAULT_ICON);
}

#[test]
fn empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.search.fallback_icon, DEFAULT_ICON);
    assert!(!config.search.desktop_dirs.is_empty());
    assert!(!config.search.icon_dirs.is_empty());
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config: Config = toml::from_str("[search]\ndesktop_dirs = [\"/tmp/apps\"]\n").unwrap();

    assert_eq!(config.search.desktop_dirs, vec![PathBuf::from("/tmp/apps")]);
    assert_eq!(config.search.fallback_icon, DEFAULT_ICON);
    assert!(!config.search.icon_dirs.is_empty());
}

#[test]
fn fallback_icon_can_be_overridden() {
    let config: Config =
        toml::from_str("[search]\nfallback_icon = \"/opt/icons/default.png\"\n").unwrap();
    assert_eq!(config.search.fallback_icon, "/opt/icons/default.png");
}
