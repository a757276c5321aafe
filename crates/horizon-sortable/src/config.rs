//! Resolved configuration for sort-link rendering.
//!
//! [`SortLinkConfig`] is a plain immutable value resolved once by the
//! embedding application (from its own settings layer) and passed to the
//! renderer. Every option has a usable default, so `SortLinkConfig::default()`
//! produces a working configuration.

use std::fmt;
use std::sync::Arc;

/// Maps a set of column names to an icon CSS class.
///
/// Rules are evaluated in declaration order and the last rule listing a
/// column wins, so later rules can narrow earlier, broader ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRule {
    /// Icon CSS class to use (without direction suffix).
    pub class: String,
    /// Column names this rule applies to.
    pub rows: Vec<String>,
}

impl IconRule {
    /// Create a rule mapping the given columns to an icon class.
    pub fn new(
        class: impl Into<String>,
        rows: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            class: class.into(),
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether this rule covers the given column.
    pub fn matches(&self, column: &str) -> bool {
        self.rows.iter().any(|row| row == column)
    }
}

/// Callback applied to link titles before rendering.
///
/// Cloneable so a configuration can be shared across threads; the callback
/// itself must be `Send + Sync`.
#[derive(Clone)]
pub struct TitleFormatter(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl TitleFormatter {
    /// Wrap a formatting callback.
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the formatter to a title.
    pub fn format(&self, title: &str) -> String {
        (self.0)(title)
    }
}

impl fmt::Debug for TitleFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TitleFormatter(..)")
    }
}

/// Resolved sort-link options.
#[derive(Debug, Clone)]
pub struct SortLinkConfig {
    /// Separator between relation and column in a qualified specifier.
    pub relation_column_separator: String,
    /// When set, [`RenderedLink::title_injection`](crate::render::RenderedLink::title_injection)
    /// exposes the resolved title under this key.
    pub inject_title_as: Option<String>,
    /// Whether explicitly supplied titles run through the formatting function.
    pub format_custom_titles: bool,
    /// Formatting callback applied to title text.
    pub formatting_function: Option<TitleFormatter>,
    /// Fallback icon class when no [`IconRule`] matches the column.
    pub default_icon_set: String,
    /// Ordered icon-override rules; the last matching rule wins.
    pub columns: Vec<IconRule>,
    /// Icon class shown when the column is not part of the current sort.
    pub sortable_icon: String,
    /// Suffix appended to icon and direction classes for ascending order.
    pub asc_suffix: String,
    /// Suffix appended to icon and direction classes for descending order.
    pub desc_suffix: String,
    /// Whether trailing icon markup is emitted at all.
    pub enable_icons: bool,
    /// Text inserted between the link text and the icon element.
    pub icon_text_separator: String,
    /// Whether the icon sits inside the clickable anchor.
    pub clickable_icon: bool,
    /// Static CSS class applied to every rendered anchor.
    pub anchor_class: Option<String>,
    /// CSS class applied when the column is part of the current sort.
    pub active_anchor_class: Option<String>,
    /// Prefix for a direction-indicating class driven by the `direction`
    /// query parameter.
    pub direction_anchor_class_prefix: Option<String>,
}

impl Default for SortLinkConfig {
    fn default() -> Self {
        Self {
            relation_column_separator: ".".to_string(),
            inject_title_as: None,
            format_custom_titles: true,
            formatting_function: None,
            default_icon_set: "fa fa-sort".to_string(),
            columns: vec![],
            sortable_icon: "fa fa-sort".to_string(),
            asc_suffix: "-asc".to_string(),
            desc_suffix: "-desc".to_string(),
            enable_icons: true,
            icon_text_separator: String::new(),
            clickable_icon: false,
            anchor_class: None,
            active_anchor_class: None,
            direction_anchor_class_prefix: None,
        }
    }
}

impl SortLinkConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relation/column separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.relation_column_separator = separator.into();
        self
    }

    /// Set the formatting function.
    pub fn with_formatter(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.formatting_function = Some(TitleFormatter::new(f));
        self
    }

    /// Add an icon-override rule.
    pub fn with_icon_rule(mut self, rule: IconRule) -> Self {
        self.columns.push(rule);
        self
    }

    /// Set the static anchor class.
    pub fn with_anchor_class(mut self, class: impl Into<String>) -> Self {
        self.anchor_class = Some(class.into());
        self
    }

    /// Set the active anchor class.
    pub fn with_active_anchor_class(mut self, class: impl Into<String>) -> Self {
        self.active_anchor_class = Some(class.into());
        self
    }

    /// Set the direction class prefix.
    pub fn with_direction_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.direction_anchor_class_prefix = Some(prefix.into());
        self
    }

    /// Expose the resolved title under the given key after rendering.
    pub fn with_title_injection(mut self, key: impl Into<String>) -> Self {
        self.inject_title_as = Some(key.into());
        self
    }

    /// Suffix for the given direction.
    pub(crate) fn direction_suffix(&self, ascending: bool) -> &str {
        if ascending {
            &self.asc_suffix
        } else {
            &self.desc_suffix
        }
    }
}
