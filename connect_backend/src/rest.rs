//! Query strings understood by the REST data interface (PostgREST syntax).

use std::fmt::Display;

/// Characters with a meaning inside `or=(...)`/`in.(...)` lists.
const RESERVED: &[char] = &[',', '.', ':', '(', ')', '"', '\\', ' '];

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Filter {
    Eq(&'static str, String),
    In(&'static str, Vec<String>),
    ILike(&'static str, String),
    Or(Vec<Filter>),
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Display) -> Self {
        Self::Eq(column, value.to_string())
    }

    pub fn is_in<V: Display>(column: &'static str, values: impl IntoIterator<Item = V>) -> Self {
        Self::In(column, values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Case-insensitive match of `%term%`.
    pub fn contains(column: &'static str, term: &str) -> Self {
        Self::ILike(column, format!("%{term}%"))
    }

    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::Or(filters.into_iter().collect())
    }

    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::And(filters.into_iter().collect())
    }

    /// The `key=value` pair this filter occupies in a query string.
    pub fn query_pair(&self) -> (String, String) {
        match self {
            Self::Eq(column, value) => (column.to_string(), format!("eq.{value}")),
            Self::In(column, values) => (column.to_string(), format!("in.{}", list(values))),
            Self::ILike(column, pattern) => (column.to_string(), format!("ilike.{pattern}")),
            Self::Or(filters) => ("or".to_string(), format!("({})", nested(filters))),
            Self::And(filters) => ("and".to_string(), format!("({})", nested(filters))),
        }
    }

    fn render_nested(&self) -> String {
        match self {
            Self::Eq(column, value) => format!("{column}.eq.{}", quote(value)),
            Self::In(column, values) => format!("{column}.in.{}", list(values)),
            Self::ILike(column, pattern) => format!("{column}.ilike.{}", quote(pattern)),
            Self::Or(filters) => format!("or({})", nested(filters)),
            Self::And(filters) => format!("and({})", nested(filters)),
        }
    }
}

fn nested(filters: &[Filter]) -> String {
    filters
        .iter()
        .map(Filter::render_nested)
        .collect::<Vec<_>>()
        .join(",")
}

fn list(values: &[String]) -> String {
    format!(
        "({})",
        values
            .iter()
            .map(|value| quote(value))
            .collect::<Vec<_>>()
            .join(",")
    )
}

fn quote(value: &str) -> String {
    if !value.is_empty() && !value.contains(RESERVED) {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[derive(Clone, Copy, Debug)]
pub enum Order {
    Asc,
    Desc,
}

/// Everything after `?` in a `/rest/v1/{table}` request.
#[derive(Clone, Debug, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn select(columns: &str) -> Self {
        Self {
            pairs: vec![("select".to_string(), columns.to_string())],
        }
    }

    pub fn filtered(filter: Filter) -> Self {
        Self::default().filter(filter)
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.pairs.push(filter.query_pair());
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        let direction = match order {
            Order::Asc => "asc",
            Order::Desc => "desc",
        };
        self.pairs
            .push(("order".to_string(), format!("{column}.{direction}")));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.pairs.push(("limit".to_string(), limit.to_string()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
