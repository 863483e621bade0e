//! Dynamic SQL for property search.
//!
//! Filters are appended only when present. Every value is bound through a
//! positional `$n` placeholder, numbered in bind order, with the row limit
//! always bound last.

use sea_orm::{DbBackend, Statement, Value};

use crate::domain::PropertySearch;

const SELECT: &str = "SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating";
const FROM: &str = "FROM properties";
const JOIN: &str = "LEFT JOIN property_reviews ON properties.id = property_reviews.property_id";
const GROUP_BY: &str = "GROUP BY properties.id";
const ORDER_BY: &str = "ORDER BY properties.cost_per_night";

/// Property search statement under construction.
#[derive(Debug, Default)]
pub struct PropertyQuery {
    conditions: Vec<String>,
    having: Option<String>,
    limit: String,
    values: Vec<Value>,
}

impl PropertyQuery {
    /// Build the search statement for `search`, returning at most `limit` rows.
    pub fn new(search: &PropertySearch, limit: u64) -> Self {
        let mut query = Self::default();

        if let Some(owner_id) = search.owner_id {
            let p = query.bind(owner_id);
            query.conditions.push(format!("properties.owner_id = {}", p));
        }

        // Wildcards typed by the user match literally.
        if let Some(pattern) = search.city_pattern() {
            let p = query.bind(pattern);
            query
                .conditions
                .push(format!("properties.city LIKE {} ESCAPE '\\'", p));
        }

        if let Some(cents) = search.minimum_cents() {
            let p = query.bind(cents);
            query.conditions.push(format!("properties.cost_per_night >= {}", p));
        }

        if let Some(cents) = search.maximum_cents() {
            let p = query.bind(cents);
            query.conditions.push(format!("properties.cost_per_night <= {}", p));
        }

        // Rating filters the aggregate, so it goes in HAVING after GROUP BY.
        if let Some(rating) = search.minimum_rating {
            let p = query.bind(rating);
            query.having = Some(format!("HAVING AVG(property_reviews.rating) >= {}", p));
        }

        let p = query.bind(i64::try_from(limit).unwrap_or(i64::MAX));
        query.limit = format!("LIMIT {}", p);

        query
    }

    /// Push a parameter and return its placeholder.
    fn bind(&mut self, value: impl Into<Value>) -> String {
        self.values.push(value.into());
        format!("${}", self.values.len())
    }

    /// Rendered SQL text.
    pub fn sql(&self) -> String {
        let mut lines = vec![SELECT.to_string(), FROM.to_string(), JOIN.to_string()];

        if !self.conditions.is_empty() {
            lines.push(format!("WHERE {}", self.conditions.join(" AND ")));
        }

        lines.push(GROUP_BY.to_string());

        if let Some(having) = &self.having {
            lines.push(having.clone());
        }

        lines.push(ORDER_BY.to_string());
        lines.push(self.limit.clone());

        lines.join("\n")
    }

    /// Parameters in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Finish into an executable PostgreSQL statement.
    pub fn into_statement(self) -> Statement {
        let sql = self.sql();
        Statement::from_sql_and_values(DbBackend::Postgres, sql, self.values)
    }
}
