//! Read-only query state of the current request.
//!
//! [`QueryContext`] carries the current path and query parameters into a
//! render call. It is built explicitly by the embedding application (from
//! whatever request type its framework provides) rather than fetched from
//! ambient state, so a render call never touches anything global.

use url::form_urlencoded;

/// Name of the query parameter holding the comma-separated sort tokens.
pub const SORT_PARAM: &str = "sort";

/// Name of the pagination parameter, never carried into generated links.
pub const PAGE_PARAM: &str = "page";

/// Name of the coarse direction parameter driving direction CSS classes.
pub const DIRECTION_PARAM: &str = "direction";

/// A query parameter value: a single scalar or a repeated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A single `key=value` entry.
    Single(String),
    /// A repeated `key=a&key=b` entry.
    List(Vec<String>),
}

impl QueryValue {
    /// Create a scalar value.
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    /// Create a list value.
    pub fn list(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Get the scalar form of this value, if any.
    ///
    /// Lists yield their first element.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::List(values) => values.first().map(String::as_str),
        }
    }

    /// Whether this value survives persistence filtering.
    ///
    /// Empty scalars are dropped; lists always pass, even empty ones.
    pub fn persists(&self) -> bool {
        match self {
            Self::Single(value) => !value.is_empty(),
            Self::List(_) => true,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

/// Current request path and query parameters.
///
/// Parameter order is preserved: it determines the order of persisted
/// parameters in generated links.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    path: String,
    params: Vec<(String, QueryValue)>,
}

impl QueryContext {
    /// Create a context for a path with no query parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: vec![],
        }
    }

    /// Create a context from a path and pre-built parameters.
    pub fn with_params(
        path: impl Into<String>,
        params: impl IntoIterator<Item = (impl Into<String>, QueryValue)>,
    ) -> Self {
        Self {
            path: path.into(),
            params: params
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// Parse a context from a raw query string (without the leading `?`).
    ///
    /// Repeated keys are folded into [`QueryValue::List`] in first-seen
    /// position.
    pub fn parse(path: impl Into<String>, raw_query: &str) -> Self {
        let mut params: Vec<(String, QueryValue)> = vec![];

        for (name, value) in form_urlencoded::parse(raw_query.as_bytes()) {
            let name = name.into_owned();
            let value = value.into_owned();

            match params.iter().position(|(existing, _)| *existing == name) {
                Some(index) => match &mut params[index].1 {
                    QueryValue::Single(first) => {
                        let first = std::mem::take(first);
                        params[index].1 = QueryValue::List(vec![first, value]);
                    }
                    QueryValue::List(values) => values.push(value),
                },
                None => params.push((name, QueryValue::Single(value))),
            }
        }

        Self {
            path: path.into(),
            params,
        }
    }

    /// The current request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All query parameters in request order.
    pub fn params(&self) -> &[(String, QueryValue)] {
        &self.params
    }

    /// Look up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&QueryValue> {
        self.params
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Look up the scalar form of a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.param(name).and_then(QueryValue::as_str)
    }

    /// Check whether a parameter is present.
    pub fn has(&self, name: &str) -> bool {
        self.param(name).is_some()
    }

    /// Parameters carried into generated links.
    ///
    /// Excludes `sort` and `page` unconditionally and drops empty scalar
    /// values.
    pub fn persisted_params(&self) -> Vec<(String, QueryValue)> {
        self.params
            .iter()
            .filter(|(name, _)| name != SORT_PARAM && name != PAGE_PARAM)
            .filter(|(name, value)| {
                if value.persists() {
                    true
                } else {
                    tracing::trace!("dropping empty query parameter '{}'", name);
                    false
                }
            })
            .cloned()
            .collect()
    }
}

/// Insert or overwrite a parameter, keeping the position of the first
/// occurrence and removing any later duplicates of the same key.
fn upsert(params: &mut Vec<(String, QueryValue)>, name: String, value: QueryValue) {
    match params.iter().position(|(existing, _)| *existing == name) {
        Some(index) => {
            params[index].1 = value;
            let mut next = index + 1;
            while next < params.len() {
                if params[next].0 == name {
                    params.remove(next);
                } else {
                    next += 1;
                }
            }
        }
        None => params.push((name, value)),
    }
}

/// Build the query string for a generated link.
///
/// Merge precedence, lowest to highest: caller-supplied extra parameters,
/// persisted request parameters, the new `sort` value. A later source
/// overwrites an earlier value in place; new keys append. `sort_value` of
/// `None` means the toggled state is empty and the key is omitted.
pub(crate) fn build_query_string(
    extra: &[(String, QueryValue)],
    context: &QueryContext,
    sort_value: Option<String>,
) -> String {
    let mut merged: Vec<(String, QueryValue)> = extra.to_vec();

    for (name, value) in context.persisted_params() {
        upsert(&mut merged, name, value);
    }

    if let Some(sort) = sort_value {
        upsert(&mut merged, SORT_PARAM.to_string(), QueryValue::Single(sort));
    }

    serialize_params(&merged)
}

/// Serialize parameters in order; list values emit repeated pairs.
fn serialize_params(params: &[(String, QueryValue)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (name, value) in params {
        match value {
            QueryValue::Single(value) => {
                serializer.append_pair(name, value);
            }
            QueryValue::List(values) => {
                for value in values {
                    serializer.append_pair(name, value);
                }
            }
        }
    }

    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_folds_repeated_keys() {
        let ctx = QueryContext::parse("/items", "a=1&b=2&a=3");

        assert_eq!(
            ctx.param("a"),
            Some(&QueryValue::list(["1", "3"])),
        );
        assert_eq!(ctx.get("b"), Some("2"));
        assert_eq!(ctx.params().len(), 2);
        assert!(ctx.has("a"));
        assert!(!ctx.has("c"));
    }

    #[test]
    fn parse_decodes_values() {
        let ctx = QueryContext::parse("/items", "q=a%20b&tag=x%2By");
        assert_eq!(ctx.get("q"), Some("a b"));
        assert_eq!(ctx.get("tag"), Some("x+y"));
    }

    #[test]
    fn persisted_excludes_sort_and_page() {
        let ctx = QueryContext::parse("/items", "sort=name&page=3&filter=active");
        let persisted = ctx.persisted_params();

        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].0, "filter");
    }

    #[test]
    fn persisted_drops_empty_scalars_keeps_lists() {
        let ctx = QueryContext::with_params(
            "/items",
            [
                ("empty", QueryValue::single("")),
                ("tags", QueryValue::list(Vec::<String>::new())),
                ("q", QueryValue::single("x")),
            ],
        );
        let persisted = ctx.persisted_params();

        assert_eq!(persisted.len(), 2);
        assert_eq!(persisted[0].0, "tags");
        assert_eq!(persisted[1].0, "q");
    }

    #[test]
    fn build_query_merge_precedence() {
        let ctx = QueryContext::parse("/items", "filter=active&page=2");
        let extra = vec![
            ("filter".to_string(), QueryValue::single("stale")),
            ("tab".to_string(), QueryValue::single("all")),
        ];

        let query = build_query_string(&extra, &ctx, Some("name".to_string()));

        // Persisted value overwrites the extra one at its original position.
        assert_eq!(query, "filter=active&tab=all&sort=name");
    }

    #[test]
    fn build_query_omits_empty_sort() {
        let ctx = QueryContext::parse("/items", "q=term");
        let query = build_query_string(&[], &ctx, None);
        assert_eq!(query, "q=term");
    }

    #[test]
    fn build_query_keeps_caller_sort_when_toggle_empties() {
        // `sort` is never persisted from the request, but a caller-supplied
        // extra parameter is its own source and survives an empty toggle.
        let ctx = QueryContext::parse("/items", "sort=-name");
        let extra = vec![("sort".to_string(), QueryValue::single("name"))];

        let query = build_query_string(&extra, &ctx, None);
        assert_eq!(query, "sort=name");
    }

    #[test]
    fn build_query_encodes_pairs() {
        let ctx = QueryContext::new("/items");
        let extra = vec![("q".to_string(), QueryValue::single("a b&c"))];
        let query = build_query_string(&extra, &ctx, None);
        assert_eq!(query, "q=a+b%26c");
    }

    #[test]
    fn list_values_serialize_as_repeated_pairs() {
        let params = vec![("tag".to_string(), QueryValue::list(["x", "y"]))];
        assert_eq!(serialize_params(&params), "tag=x&tag=y");
    }
}
