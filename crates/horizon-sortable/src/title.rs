//! Link titles and title resolution.

use crate::config::SortLinkConfig;

/// The text shown inside a rendered anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTitle {
    /// Plain text: HTML-escaped on assembly and subject to the configured
    /// formatting function.
    Text(String),
    /// Pre-rendered markup: embedded verbatim, bypassing both formatting
    /// and escaping.
    Html(String),
}

impl LinkTitle {
    /// Create a plain-text title.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a pre-rendered HTML title.
    pub fn html(value: impl Into<String>) -> Self {
        Self::Html(value.into())
    }

    /// The underlying string, whichever variant this is.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(value) | Self::Html(value) => value,
        }
    }

    /// Whether this title is pre-rendered markup.
    pub fn is_html(&self) -> bool {
        matches!(self, Self::Html(_))
    }
}

impl From<&str> for LinkTitle {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for LinkTitle {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Resolve the title to render for a column.
///
/// Pre-rendered HTML titles pass through untouched. A missing title
/// defaults to the column name and always reaches the formatting function;
/// an explicitly supplied text title only does so when
/// `format_custom_titles` is enabled.
pub fn resolve_title(
    title: Option<LinkTitle>,
    column: &str,
    config: &SortLinkConfig,
) -> LinkTitle {
    let text = match title {
        Some(LinkTitle::Html(html)) => return LinkTitle::Html(html),
        Some(LinkTitle::Text(text)) => {
            if !config.format_custom_titles {
                return LinkTitle::Text(text);
            }
            text
        }
        None => column.to_string(),
    };

    match &config.formatting_function {
        Some(formatter) => LinkTitle::Text(formatter.format(&text)),
        None => LinkTitle::Text(text),
    }
}
