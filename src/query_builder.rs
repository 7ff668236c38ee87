//! Builder for ads query-language (`SELECT ... FROM resource WHERE ...`) text.
//!
//! The search endpoint takes the query as a single string with no parameter
//! binding, so every value passed to a `where_*` method is emitted as a
//! quoted, escaped literal. Field and resource names are trusted input.
//! Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use ads_insights_sdk::QueryBuilder;
//! let query = QueryBuilder::new("campaign")
//!     .select(&["campaign.id", "metrics.clicks"])
//!     .where_ne("campaign.status", "REMOVED")
//!     .order_by(&["metrics.clicks DESC"])
//!     .limit(10)
//!     .build();
//! ```

/// Builds ads query-language strings with escaped literals.
pub struct QueryBuilder {
    select_fields: Vec<String>,
    from_resource: String,
    where_clauses: Vec<String>,
    order_by_fields: Vec<String>,
    limit_val: Option<usize>,
}

impl QueryBuilder {
    /// Create a builder reading from the given resource (e.g. `"campaign"`).
    pub fn new(resource: &str) -> Self {
        Self {
            select_fields: Vec::new(),
            from_resource: resource.to_string(),
            where_clauses: Vec::new(),
            order_by_fields: Vec::new(),
            limit_val: None,
        }
    }

    /// Append fields to the SELECT list.
    pub fn select(&mut self, fields: &[&str]) -> &mut Self {
        self.select_fields
            .extend(fields.iter().map(|f| f.to_string()));
        self
    }

    /// Add a raw condition. Nothing in `condition` is escaped.
    pub fn where_clause(&mut self, condition: &str) -> &mut Self {
        self.where_clauses.push(condition.to_string());
        self
    }

    /// Add `{field} = '{value}'`.
    pub fn where_eq(&mut self, field: &str, value: &str) -> &mut Self {
        self.where_clauses
            .push(format!("{} = {}", field, quote(value)));
        self
    }

    /// Add `{field} != '{value}'`.
    pub fn where_ne(&mut self, field: &str, value: &str) -> &mut Self {
        self.where_clauses
            .push(format!("{} != {}", field, quote(value)));
        self
    }

    /// Add `{field} >= '{value}'`.
    pub fn where_gte(&mut self, field: &str, value: &str) -> &mut Self {
        self.where_clauses
            .push(format!("{} >= {}", field, quote(value)));
        self
    }

    /// Add `{field} <= '{value}'`.
    pub fn where_lte(&mut self, field: &str, value: &str) -> &mut Self {
        self.where_clauses
            .push(format!("{} <= {}", field, quote(value)));
        self
    }

    /// Add `{field} BETWEEN '{from}' AND '{to}'` (inclusive on both ends).
    pub fn where_between(&mut self, field: &str, from: &str, to: &str) -> &mut Self {
        self.where_clauses.push(format!(
            "{} BETWEEN {} AND {}",
            field,
            quote(from),
            quote(to)
        ));
        self
    }

    /// Add ORDER BY clauses (e.g. `"segments.date ASC"`).
    pub fn order_by(&mut self, clauses: &[&str]) -> &mut Self {
        self.order_by_fields
            .extend(clauses.iter().map(|c| c.to_string()));
        self
    }

    /// Set the maximum number of rows to return.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Build the final query string.
    pub fn build(&self) -> String {
        let mut parts = vec![
            format!("SELECT {}", self.select_fields.join(", ")),
            format!("FROM {}", self.from_resource),
        ];

        if !self.where_clauses.is_empty() {
            parts.push(format!("WHERE {}", self.where_clauses.join(" AND ")));
        }

        if !self.order_by_fields.is_empty() {
            parts.push(format!("ORDER BY {}", self.order_by_fields.join(", ")));
        }

        if let Some(n) = self.limit_val {
            parts.push(format!("LIMIT {}", n));
        }

        parts.join("\n")
    }
}

/// Quote a literal, escaping backslashes and single quotes.
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}
