//! Sort-link rendering.
//!
//! [`SortLink`] collects the per-invocation inputs with a fluent builder;
//! [`SortLinkRenderer`] holds the resolved configuration and turns a link
//! plus the current [`QueryContext`] into anchor markup.

use crate::column::ColumnSpec;
use crate::config::SortLinkConfig;
use crate::error::Result;
use crate::query::{self, QueryContext, QueryValue};
use crate::render::escape::escape_html;
use crate::render::{classes, icon};
use crate::sort::SortState;
use crate::title::{LinkTitle, resolve_title};

/// Inputs for a single sort link.
///
/// # Example
///
/// ```ignore
/// let link = SortLink::new("author.name")
///     .title("Author")
///     .query_param("filter", "active")
///     .attribute("rel", "nofollow");
/// let html = renderer.render(&link, &ctx)?;
/// ```
#[derive(Debug, Clone)]
pub struct SortLink {
    specifier: String,
    title: Option<LinkTitle>,
    query_params: Vec<(String, QueryValue)>,
    attributes: Vec<(String, String)>,
}

impl SortLink {
    /// Create a link for a column specifier.
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            title: None,
            query_params: vec![],
            attributes: vec![],
        }
    }

    /// Set the link title; defaults to the column name when absent.
    pub fn title(mut self, title: impl Into<LinkTitle>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add an extra query parameter (lowest merge precedence).
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params
            .push((name.into(), QueryValue::Single(value.into())));
        self
    }

    /// Add an extra list-valued query parameter.
    pub fn query_param_list(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.query_params.push((name.into(), QueryValue::list(values)));
        self
    }

    /// Add an anchor attribute.
    ///
    /// `class` is folded into the computed class list and `href` overrides
    /// the base path of the generated URL; everything else is emitted
    /// verbatim on the anchor.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// The column specifier this link was created with.
    pub fn specifier(&self) -> &str {
        &self.specifier
    }
}

/// A rendered link plus its resolved title.
///
/// Callers that configured `inject_title_as` read the key/title pair from
/// [`title_injection`](Self::title_injection) and store it wherever their
/// request context lives; nothing is ever written to shared state.
#[derive(Debug, Clone)]
pub struct RenderedLink {
    html: String,
    resolved_title: LinkTitle,
    inject_title_as: Option<String>,
}

impl RenderedLink {
    /// The anchor markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume the rendered link, returning the markup.
    pub fn into_html(self) -> String {
        self.html
    }

    /// The title after defaulting and formatting.
    pub fn resolved_title(&self) -> &LinkTitle {
        &self.resolved_title
    }

    /// The configured injection key and the resolved title, when
    /// `inject_title_as` is set.
    pub fn title_injection(&self) -> Option<(&str, &LinkTitle)> {
        self.inject_title_as
            .as_deref()
            .map(|key| (key, &self.resolved_title))
    }
}

/// Renders sort links for one resolved configuration.
///
/// Rendering is a pure function of the link, the query context, and the
/// configuration; a renderer can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct SortLinkRenderer {
    config: SortLinkConfig,
}

impl SortLinkRenderer {
    /// Create a renderer from a resolved configuration.
    pub fn new(config: SortLinkConfig) -> Self {
        Self { config }
    }

    /// The configuration this renderer uses.
    pub fn config(&self) -> &SortLinkConfig {
        &self.config
    }

    /// Render a link to anchor markup.
    pub fn render(&self, link: &SortLink, context: &QueryContext) -> Result<String> {
        self.render_resolved(link, context).map(RenderedLink::into_html)
    }

    /// Render a link, keeping the resolved title alongside the markup.
    pub fn render_resolved(&self, link: &SortLink, context: &QueryContext) -> Result<RenderedLink> {
        let spec = ColumnSpec::parse(&link.specifier, &self.config.relation_column_separator)?;
        let title = resolve_title(link.title.clone(), spec.column(), &self.config);

        let state = SortState::from_query(context);
        let direction = state.direction_of(spec.parameter());

        let icon_class = icon::direction_icon(spec.column(), direction, &self.config);
        let trailing = icon::trailing_tag(&icon_class, &self.config);

        let mut attributes = link.attributes.clone();
        let attribute_class = take_attribute(&mut attributes, "class");
        let href = take_attribute(&mut attributes, "href");

        let class_fragment = classes::anchor_class_fragment(
            spec.parameter(),
            attribute_class.as_deref(),
            &state,
            context,
            &self.config,
        );
        let attribute_fragment = attribute_fragment(&attributes);

        let sort_value = state.toggle(spec.parameter()).encode();
        let query_string = query::build_query_string(&link.query_params, context, sort_value);

        let base = href.as_deref().unwrap_or(context.path());
        let url = format!("{}?{}", base, query_string);

        let text = match &title {
            LinkTitle::Html(html) => html.clone(),
            LinkTitle::Text(text) => escape_html(text),
        };

        let html = format!(
            "<a{} href=\"{}\"{}>{}{}",
            class_fragment, url, attribute_fragment, text, trailing
        );

        tracing::trace!(specifier = %link.specifier, url = %url, "rendered sort link");

        Ok(RenderedLink {
            html,
            resolved_title: title,
            inject_title_as: self.config.inject_title_as.clone(),
        })
    }
}

/// Remove an attribute by name, returning its value.
fn take_attribute(attributes: &mut Vec<(String, String)>, name: &str) -> Option<String> {
    attributes
        .iter()
        .position(|(existing, _)| existing == name)
        .map(|index| attributes.remove(index).1)
}

/// Render remaining attributes: ` name` for empty values, ` name="value"`
/// otherwise.
fn attribute_fragment(attributes: &[(String, String)]) -> String {
    let mut fragment = String::new();

    for (name, value) in attributes {
        fragment.push(' ');
        fragment.push_str(name);
        if !value.is_empty() {
            fragment.push_str("=\"");
            fragment.push_str(value);
            fragment.push('"');
        }
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_fragment_forms() {
        let attributes = vec![
            ("rel".to_string(), "nofollow".to_string()),
            ("download".to_string(), String::new()),
        ];
        assert_eq!(attribute_fragment(&attributes), " rel=\"nofollow\" download");
        assert_eq!(attribute_fragment(&[]), "");
    }

    #[test]
    fn take_attribute_removes_entry() {
        let mut attributes = vec![
            ("class".to_string(), "wide".to_string()),
            ("rel".to_string(), "nofollow".to_string()),
        ];

        assert_eq!(take_attribute(&mut attributes, "class").as_deref(), Some("wide"));
        assert_eq!(take_attribute(&mut attributes, "class"), None);
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn render_minimal_link() {
        let renderer = SortLinkRenderer::default();
        let ctx = QueryContext::new("/items");

        let html = renderer.render(&SortLink::new("name"), &ctx).unwrap();
        assert_eq!(
            html,
            "<a href=\"/items?sort=name\">name</a><i class=\"fa fa-sort\"></i>"
        );
    }

    #[test]
    fn render_escapes_text_title() {
        let renderer = SortLinkRenderer::default();
        let ctx = QueryContext::new("/items");

        let link = SortLink::new("name").title("Name & Rank");
        let html = renderer.render(&link, &ctx).unwrap();
        assert!(html.contains(">Name &amp; Rank</a>"));
    }

    #[test]
    fn render_embeds_html_title_raw() {
        let renderer = SortLinkRenderer::default();
        let ctx = QueryContext::new("/items");

        let link = SortLink::new("name").title(LinkTitle::html("<b>Name</b>"));
        let html = renderer.render(&link, &ctx).unwrap();
        assert!(html.contains("><b>Name</b></a>"));
    }

    #[test]
    fn href_attribute_overrides_base_path() {
        let renderer = SortLinkRenderer::default();
        let ctx = QueryContext::new("/items");

        let link = SortLink::new("name").attribute("href", "/archive");
        let html = renderer.render(&link, &ctx).unwrap();
        assert!(html.contains(" href=\"/archive?sort=name\""));
        // The href attribute itself must not be re-emitted.
        assert_eq!(html.matches("href").count(), 1);
    }

    #[test]
    fn title_injection_exposed_when_configured() {
        let config = SortLinkConfig::new().with_title_injection("column_title");
        let renderer = SortLinkRenderer::new(config);
        let ctx = QueryContext::new("/items");

        let rendered = renderer
            .render_resolved(&SortLink::new("name").title("Name"), &ctx)
            .unwrap();

        let (key, title) = rendered.title_injection().unwrap();
        assert_eq!(key, "column_title");
        assert_eq!(title, &LinkTitle::text("Name"));
    }

    #[test]
    fn title_injection_absent_by_default() {
        let renderer = SortLinkRenderer::default();
        let ctx = QueryContext::new("/items");

        let rendered = renderer
            .render_resolved(&SortLink::new("name"), &ctx)
            .unwrap();
        assert!(rendered.title_injection().is_none());
    }
}
