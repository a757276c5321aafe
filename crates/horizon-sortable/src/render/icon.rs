//! Icon class selection and the trailing icon markup.

use crate::config::SortLinkConfig;
use crate::sort::SortDirection;

/// Base icon class for a column.
///
/// Rules are scanned in declaration order and the last rule listing the
/// column wins; columns no rule covers fall back to the default icon set.
pub(crate) fn select_icon(column: &str, config: &SortLinkConfig) -> String {
    let mut icon = config.default_icon_set.as_str();

    for rule in &config.columns {
        if rule.matches(column) {
            icon = &rule.class;
        }
    }

    icon.to_string()
}

/// Icon class for the column given its current per-column direction.
///
/// A sorted column gets its base icon class with the direction suffix;
/// an unsorted column gets the neutral sortable icon.
pub(crate) fn direction_icon(
    column: &str,
    direction: Option<SortDirection>,
    config: &SortLinkConfig,
) -> String {
    match direction {
        Some(direction) => format!(
            "{}{}",
            select_icon(column, config),
            config.direction_suffix(direction.is_ascending())
        ),
        None => config.sortable_icon.clone(),
    }
}

/// The markup that closes the link: `</a>` plus the optional icon element.
///
/// With `clickable_icon` the icon sits inside the anchor, before the
/// closing tag; otherwise it follows the anchor.
pub(crate) fn trailing_tag(icon: &str, config: &SortLinkConfig) -> String {
    if !config.enable_icons {
        return "</a>".to_string();
    }

    let separator = &config.icon_text_separator;

    if config.clickable_icon {
        format!("{}<i class=\"{}\"></i></a>", separator, icon)
    } else {
        format!("</a>{}<i class=\"{}\"></i>", separator, icon)
    }
}
