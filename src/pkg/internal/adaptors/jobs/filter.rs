//! Builds the `findAll` statement. Each active filter becomes one predicate
//! whose value is bound through the query builder, so caller text never ends
//! up in the SQL itself.

use sqlx::{Postgres, QueryBuilder, types::BigDecimal};

use super::{JOB_COLUMNS, spec::JobFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    AtLeast,
    GreaterThan,
    ContainsIgnoreCase,
}

impl Comparison {
    pub fn operator(&self) -> &'static str {
        match self {
            Comparison::AtLeast => ">=",
            Comparison::GreaterThan => ">",
            Comparison::ContainsIgnoreCase => "ILIKE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Integer(i32),
    Decimal(BigDecimal),
    Pattern(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: &'static str,
    pub comparison: Comparison,
    pub value: Bound,
}

impl JobFilter {
    /// Active predicates in placeholder order.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(min_salary) = self.min_salary {
            predicates.push(Predicate {
                column: "salary",
                comparison: Comparison::AtLeast,
                value: Bound::Integer(min_salary),
            });
        }
        if self.has_equity == Some(true) {
            predicates.push(Predicate {
                column: "equity",
                comparison: Comparison::GreaterThan,
                value: Bound::Decimal(BigDecimal::from(0)),
            });
        }
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            predicates.push(Predicate {
                column: "title",
                comparison: Comparison::ContainsIgnoreCase,
                value: Bound::Pattern(contains_pattern(title)),
            });
        }
        predicates
    }
}

/// Wraps `text` for a substring LIKE match, escaping LIKE metacharacters so
/// they match literally.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub fn push_predicates<'args>(qb: &mut QueryBuilder<'args, Postgres>, predicates: Vec<Predicate>) {
    for (i, predicate) in predicates.into_iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " })
            .push(predicate.column)
            .push(" ")
            .push(predicate.comparison.operator())
            .push(" ");
        match predicate.value {
            Bound::Integer(v) => qb.push_bind(v),
            Bound::Decimal(v) => qb.push_bind(v),
            Bound::Pattern(v) => qb.push_bind(v),
        };
    }
}

pub fn select_jobs(filter: &JobFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM jobs", JOB_COLUMNS));
    push_predicates(&mut qb, filter.predicates());
    qb.push(" ORDER BY salary DESC, id");
    tracing::debug!("job filter query: {}", qb.sql());
    qb
}
