use crate::config::SearchConfig;
use crate::icons::IconResolver;
use crate::model::ResultItem;
use crate::scanner::find_matches;

fn info_item(label: &str, description: &str, icon: &str) -> ResultItem {
    ResultItem {
        icon: icon.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        exec: None,
    }
}

/// Turn a raw query string into an ordered list of launchable items.
///
/// Never fails: empty queries and zero matches yield a single informational
/// item instead of an error.
pub fn build_results(raw_query: &str, search: &SearchConfig) -> Vec<ResultItem> {
    if raw_query.is_empty() {
        return vec![info_item(
            "Enter an application name to view or launch it",
            "For example: firefox or nemo",
            &search.fallback_icon,
        )];
    }

    let query = raw_query.trim();
    if query.is_empty() {
        return vec![info_item(
            "No application name provided",
            "Please enter an application name",
            &search.fallback_icon,
        )];
    }

    let matches = find_matches(query, &search.desktop_dirs);
    if matches.is_empty() {
        return vec![info_item(
            &format!("No .desktop file found for {}", query),
            "Please check the application name and try again",
            &search.fallback_icon,
        )];
    }

    let resolver = IconResolver::new(search.icon_dirs.clone(), search.fallback_icon.clone());
    let mut items = Vec::new();

    for m in matches {
        let icon = resolver.resolve(&m.entry.icon);
        if m.entry.actions.is_empty() {
            items.push(ResultItem {
                icon,
                label: format!("Launch {}", m.entry.name),
                description: format!("Exec: {}", m.entry.exec),
                exec: Some(m.entry.exec.clone()),
            });
        } else {
            // A file with actions only lists its actions; the primary launch
            // entry is suppressed. Action Exec strings are used in full.
            for action in m.entry.actions.values() {
                items.push(ResultItem {
                    icon: icon.clone(),
                    label: action.name.clone(),
                    description: format!("Exec: {}", action.exec),
                    exec: Some(action.exec.clone()),
                });
            }
        }
    }

    items
}
