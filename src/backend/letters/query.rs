/**
 * Search Query Compiler
 *
 * This module compiles the optional search filters from the query string
 * into a single parameterized SQL statement plus an ordered list of typed
 * bind parameters.
 *
 * # Representation
 *
 * Filters accumulate in a `PredicateList`: each pushed predicate receives
 * its positional placeholder (`$1`, `$2`, ...) at push time, so the
 * clause text and the parameter vector can never drift out of step and no
 * caller-supplied text is ever spliced into the SQL.
 *
 * # Filter Semantics
 *
 * - `field=subject` - natural-language full-text search over subjects
 * - `field=from` / `field=to` - case-insensitive substring containment
 *   against sender email / recipient email
 * - any other non-empty `field` with a non-empty `query` - validation error
 * - `startDate` / `endDate` - inclusive calendar-date bounds; unparseable
 *   dates are silently ignored
 * - `sortOrder` - `asc` or `desc` (case-insensitive), anything else
 *   falls back to `desc`
 *
 * Results are always ordered by signature count in the requested
 * direction with creation time (newest first) as the tie-break, and
 * capped at 100 rows.
 */

use chrono::NaiveDate;
use serde::Deserialize;

use crate::backend::error::ApiError;

/// Hard cap on search results; there is no pagination cursor
pub const MAX_RESULTS: i64 = 100;

/// Raw search parameters as they arrive on the query string
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub field: Option<String>,
    pub query: Option<String>,
    pub sort_order: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Normalized sort direction for the signature-count ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Normalize a raw value; anything but `asc`/`desc` falls back to `Desc`
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A typed bind parameter, in positional order
#[derive(Debug, Clone, PartialEq)]
pub enum BindParam {
    Text(String),
    Date(NaiveDate),
}

/// Compiled search: the SQL text and its bind parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSearch {
    pub sql: String,
    pub params: Vec<BindParam>,
}

/// Ordered predicate accumulator
///
/// `push` substitutes the `$?` marker in the clause template with the
/// next positional placeholder and records the parameter, keeping clause
/// text and parameter order in lockstep.
#[derive(Debug, Default)]
struct PredicateList {
    clauses: Vec<String>,
    params: Vec<BindParam>,
}

impl PredicateList {
    fn push(&mut self, template: &str, param: BindParam) {
        let placeholder = format!("${}", self.params.len() + 1);
        self.clauses.push(template.replace("$?", &placeholder));
        self.params.push(param);
    }

    fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }
}

const BASE_SELECT: &str = "\
SELECT
    l.id, l.sender_id, l.recipient_email, l.subject, l.body, l.created_at,
    u.email AS sender_email,
    COUNT(s.letter_id) AS signature_count,
    FALSE AS is_signed
FROM letters l
LEFT JOIN signatures s ON l.id = s.letter_id
LEFT JOIN users u ON l.sender_id = u.id";

/// Compile search parameters into a parameterized query
///
/// # Errors
///
/// `Validation` when `query` is non-empty but `field` names an unknown
/// search field. All other unusable input (bad dates, odd sort values)
/// is silently normalized or ignored.
pub fn compile(params: &SearchParams) -> Result<CompiledSearch, ApiError> {
    let mut predicates = PredicateList::default();

    if let Some(date) = parse_date(params.start_date.as_deref()) {
        predicates.push("DATE(l.created_at) >= $?", BindParam::Date(date));
    }
    if let Some(date) = parse_date(params.end_date.as_deref()) {
        predicates.push("DATE(l.created_at) <= $?", BindParam::Date(date));
    }

    let field = params.field.as_deref().unwrap_or("");
    let query = params.query.as_deref().unwrap_or("");
    if !field.is_empty() && !query.is_empty() {
        match field {
            "subject" => predicates.push(
                "to_tsvector('english', l.subject) @@ websearch_to_tsquery('english', $?)",
                BindParam::Text(query.to_string()),
            ),
            "from" => predicates.push(
                "u.email ILIKE $?",
                BindParam::Text(format!("%{query}%")),
            ),
            "to" => predicates.push(
                "l.recipient_email ILIKE $?",
                BindParam::Text(format!("%{query}%")),
            ),
            other => {
                return Err(ApiError::validation(format!(
                    "unknown search field \"{other}\""
                )))
            }
        }
    }

    let order = SortOrder::parse(params.sort_order.as_deref());
    let sql = format!(
        "{BASE_SELECT}{}\nGROUP BY l.id, u.id\nORDER BY signature_count {}, l.created_at DESC\nLIMIT {MAX_RESULTS}",
        predicates.where_sql(),
        order.as_sql(),
    );

    Ok(CompiledSearch {
        sql,
        params: predicates.params,
    })
}

/// Parse a calendar date, ignoring anything unparseable
fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(
        field: Option<&str>,
        query: Option<&str>,
        sort: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> SearchParams {
        SearchParams {
            field: field.map(String::from),
            query: query.map(String::from),
            sort_order: sort.map(String::from),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    #[test]
    fn test_no_filters_selects_everything() {
        let compiled = compile(&SearchParams::default()).unwrap();
        assert!(!compiled.sql.contains("WHERE"));
        assert!(compiled
            .sql
            .contains("ORDER BY signature_count DESC, l.created_at DESC"));
        assert!(compiled.sql.ends_with("LIMIT 100"));
        assert_eq!(compiled.params, vec![]);
    }

    #[test]
    fn test_subject_uses_full_text_search() {
        let compiled =
            compile(&params(Some("subject"), Some("climate"), None, None, None)).unwrap();
        assert!(compiled
            .sql
            .contains("websearch_to_tsquery('english', $1)"));
        assert_eq!(compiled.params, vec![BindParam::Text("climate".into())]);
    }

    #[test]
    fn test_from_uses_substring_containment() {
        let compiled = compile(&params(Some("from"), Some("alice"), None, None, None)).unwrap();
        assert!(compiled.sql.contains("u.email ILIKE $1"));
        assert_eq!(compiled.params, vec![BindParam::Text("%alice%".into())]);
    }

    #[test]
    fn test_to_matches_recipient_email() {
        let compiled = compile(&params(Some("to"), Some("mayor"), None, None, None)).unwrap();
        assert!(compiled.sql.contains("l.recipient_email ILIKE $1"));
        assert_eq!(compiled.params, vec![BindParam::Text("%mayor%".into())]);
    }

    #[test]
    fn test_unknown_field_is_a_validation_error() {
        let err = compile(&params(Some("body"), Some("hello"), None, None, None)).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_unknown_field_without_query_is_ignored() {
        let compiled = compile(&params(Some("body"), None, None, None, None)).unwrap();
        assert!(!compiled.sql.contains("WHERE"));
    }

    #[test]
    fn test_dates_and_text_keep_positional_order() {
        let compiled = compile(&params(
            Some("to"),
            Some("council"),
            None,
            Some("2024-01-01"),
            Some("2024-12-31"),
        ))
        .unwrap();
        assert!(compiled.sql.contains("DATE(l.created_at) >= $1"));
        assert!(compiled.sql.contains("DATE(l.created_at) <= $2"));
        assert!(compiled.sql.contains("l.recipient_email ILIKE $3"));
        assert_eq!(
            compiled.params,
            vec![
                BindParam::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
                BindParam::Date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
                BindParam::Text("%council%".into()),
            ]
        );
    }

    #[test]
    fn test_unparseable_dates_are_ignored() {
        let compiled = compile(&params(None, None, None, Some("last tuesday"), Some("2024-13-40")))
            .unwrap();
        assert!(!compiled.sql.contains("WHERE"));
        assert_eq!(compiled.params, vec![]);
    }

    #[test]
    fn test_sort_order_normalization() {
        assert_eq!(SortOrder::parse(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("ASC")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("sideways")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(None), SortOrder::Desc);
    }

    #[test]
    fn test_ascending_order_keeps_newest_first_tiebreak() {
        let compiled = compile(&params(None, None, Some("asc"), None, None)).unwrap();
        assert!(compiled
            .sql
            .contains("ORDER BY signature_count ASC, l.created_at DESC"));
    }

    #[test]
    fn test_injection_shaped_input_stays_parameterized() {
        let hostile = "'; DROP TABLE letters; --";
        let compiled = compile(&params(Some("to"), Some(hostile), None, None, None)).unwrap();
        assert!(!compiled.sql.contains(hostile));
        assert_eq!(
            compiled.params,
            vec![BindParam::Text(format!("%{hostile}%"))]
        );
    }
}
