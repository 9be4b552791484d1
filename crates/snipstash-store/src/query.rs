//! Optional search filters composed into a single SQL predicate.

/// Search filters for the snippet store.
///
/// Absent filters impose no constraint; every supplied filter must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFilter {
    /// Case-insensitive substring match against title or code.
    pub query: Option<String>,
    /// Exact category match. Records without a category never match.
    pub category: Option<String>,
    /// Exact language match.
    pub language: Option<String>,
}

impl SnippetFilter {
    /// Build a filter from raw request parameters. Empty or whitespace-only
    /// values count as absent, so an empty `q=` takes the no-filter path
    /// instead of matching everything via an empty substring.
    pub fn new(
        query: Option<String>,
        category: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            query: normalize(query),
            category: normalize(category),
            language: normalize(language),
        }
    }

    /// True when no filter is supplied.
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.category.is_none() && self.language.is_none()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// SQL text plus positional parameters, ready for prepare/query.
pub(crate) struct ParameterizedQuery {
    pub sql: String,
    pub params: Vec<String>,
}

const SELECT_COLUMNS: &str =
    "SELECT id, title, code, language, category, created_at FROM snippets";
const ORDER: &str = "ORDER BY created_at DESC, id ASC";

/// Query for every snippet, newest first, ties in insertion order.
pub(crate) fn build_list_query() -> String {
    format!("{SELECT_COLUMNS} {ORDER}")
}

/// Compose the supplied filters into one conjunctive WHERE clause.
///
/// Each filter contributes a condition and its parameter only when present;
/// the conditions are then joined with AND. No filters means no WHERE clause
/// at all, which makes the result identical to [`build_list_query`].
pub(crate) fn build_search_query(filter: &SnippetFilter) -> ParameterizedQuery {
    let mut conditions = Vec::new();
    let mut params = Vec::new();
    let mut param_idx = 1;

    if let Some(q) = &filter.query {
        conditions.push(format!(
            "(lower(title) LIKE ?{param_idx} OR lower(code) LIKE ?{param_idx})"
        ));
        params.push(format!("%{}%", q.to_lowercase()));
        param_idx += 1;
    }

    if let Some(category) = &filter.category {
        conditions.push(format!("category = ?{param_idx}"));
        params.push(category.clone());
        param_idx += 1;
    }

    if let Some(language) = &filter.language {
        conditions.push(format!("language = ?{param_idx}"));
        params.push(language.clone());
        // param_idx += 1; // not needed, last param
    }

    let sql = if conditions.is_empty() {
        build_list_query()
    } else {
        format!("{SELECT_COLUMNS} WHERE {} {ORDER}", conditions.join(" AND "))
    };

    ParameterizedQuery { sql, params }
}
