//! Anchor CSS class computation.

use crate::config::SortLinkConfig;
use crate::query::{DIRECTION_PARAM, QueryContext};
use crate::sort::SortState;

/// Build the ` class="…"` fragment for the anchor, or an empty string.
///
/// Class order: static anchor class, active class, direction class,
/// then the tokens of a caller-supplied `class` attribute (already taken
/// out of the attribute map by the renderer).
///
/// The direction class reads the coarse `direction` query parameter
/// (`asc` or anything else), not the per-column token direction from the
/// `sort` parameter; the two can disagree and the query parameter wins.
pub(crate) fn anchor_class_fragment(
    parameter: &str,
    attribute_class: Option<&str>,
    state: &SortState,
    context: &QueryContext,
    config: &SortLinkConfig,
) -> String {
    let mut classes: Vec<String> = vec![];

    if let Some(class) = &config.anchor_class {
        classes.push(class.clone());
    }

    let active = state.contains(parameter);

    if active && let Some(class) = &config.active_anchor_class {
        classes.push(class.clone());
    }

    if active && let Some(prefix) = &config.direction_anchor_class_prefix {
        let ascending = context.get(DIRECTION_PARAM) == Some("asc");
        classes.push(format!("{}{}", prefix, config.direction_suffix(ascending)));
    }

    if let Some(extra) = attribute_class {
        classes.extend(extra.split_whitespace().map(str::to_string));
    }

    if classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> SortLinkConfig {
        SortLinkConfig::new()
            .with_anchor_class("sort-link")
            .with_active_anchor_class("active")
            .with_direction_class_prefix("dir")
    }

    #[test]
    fn no_classes_configured() {
        let fragment = anchor_class_fragment(
            "name",
            None,
            &SortState::new(),
            &QueryContext::new("/items"),
            &SortLinkConfig::default(),
        );
        assert_eq!(fragment, "");
    }

    #[test]
    fn static_class_always_applies() {
        let fragment = anchor_class_fragment(
            "name",
            None,
            &SortState::new(),
            &QueryContext::new("/items"),
            &full_config(),
        );
        assert_eq!(fragment, " class=\"sort-link\"");
    }

    #[test]
    fn active_and_direction_classes_for_sorted_column() {
        let ctx = QueryContext::parse("/items", "sort=name&direction=asc");
        let state = SortState::from_query(&ctx);

        let fragment = anchor_class_fragment("name", None, &state, &ctx, &full_config());
        assert_eq!(fragment, " class=\"sort-link active dir-asc\"");
    }

    #[test]
    fn direction_class_defaults_to_desc_without_parameter() {
        let ctx = QueryContext::parse("/items", "sort=name");
        let state = SortState::from_query(&ctx);

        let fragment = anchor_class_fragment("name", None, &state, &ctx, &full_config());
        assert_eq!(fragment, " class=\"sort-link active dir-desc\"");
    }

    #[test]
    fn direction_class_follows_query_parameter_not_token() {
        // The token sorts descending but direction=asc wins for the class.
        let ctx = QueryContext::parse("/items", "sort=-name&direction=asc");
        let state = SortState::from_query(&ctx);

        let fragment = anchor_class_fragment("name", None, &state, &ctx, &full_config());
        assert_eq!(fragment, " class=\"sort-link active dir-asc\"");
    }

    #[test]
    fn inactive_column_gets_static_class_only() {
        let ctx = QueryContext::parse("/items", "sort=age&direction=asc");
        let state = SortState::from_query(&ctx);

        let fragment = anchor_class_fragment("name", None, &state, &ctx, &full_config());
        assert_eq!(fragment, " class=\"sort-link\"");
    }

    #[test]
    fn attribute_class_tokens_appended() {
        let fragment = anchor_class_fragment(
            "name",
            Some("th-link  wide"),
            &SortState::new(),
            &QueryContext::new("/items"),
            &full_config(),
        );
        assert_eq!(fragment, " class=\"sort-link th-link wide\"");
    }

    #[test]
    fn attribute_class_alone() {
        let fragment = anchor_class_fragment(
            "name",
            Some("th-link"),
            &SortState::new(),
            &QueryContext::new("/items"),
            &SortLinkConfig::default(),
        );
        assert_eq!(fragment, " class=\"th-link\"");
    }
}
