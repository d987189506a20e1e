//! Filter clause primitives.
//!
//! A [`Condition`] pairs a column (or aggregate expression) and an operator
//! with one bound value. Conditions carry no placeholder index of their own:
//! [`Sql`] assigns it at the moment the condition is appended.

use crate::sql::Sql;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// Comparison operator with its operand.
///
/// # Example
/// ```ignore
/// use lightbnb_db::Op;
///
/// Op::eq(3)
/// Op::gte(50_000)
/// Op::like("%Paris%".to_string())
/// ```
#[derive(Debug, Clone)]
pub enum Op<T> {
    /// Equal: column = value
    Eq(T),
    /// Greater than or equal: column >= value
    Gte(T),
    /// Less than or equal: column <= value
    Lte(T),
    /// LIKE pattern match
    Like(T),
    /// Case-insensitive LIKE (PostgreSQL ILIKE)
    Ilike(T),
}

impl<T> Op<T> {
    /// Create an equality condition.
    pub fn eq(val: T) -> Self {
        Op::Eq(val)
    }

    /// Create a greater-than-or-equal condition.
    pub fn gte(val: T) -> Self {
        Op::Gte(val)
    }

    /// Create a less-than-or-equal condition.
    pub fn lte(val: T) -> Self {
        Op::Lte(val)
    }

    /// Create a LIKE pattern match condition.
    pub fn like(val: T) -> Self {
        Op::Like(val)
    }

    /// Create a case-insensitive ILIKE pattern match condition.
    pub fn ilike(val: T) -> Self {
        Op::Ilike(val)
    }

    fn into_parts(self) -> (&'static str, T) {
        match self {
            Op::Eq(v) => ("=", v),
            Op::Gte(v) => (">=", v),
            Op::Lte(v) => ("<=", v),
            Op::Like(v) => ("LIKE", v),
            Op::Ilike(v) => ("ILIKE", v),
        }
    }
}

#[derive(Debug, Clone)]
enum ConditionInner {
    /// Raw SQL condition with no parameters.
    Raw(String),
    Expr {
        target: String,
        operator: &'static str,
        value: Arc<dyn ToSql + Send + Sync>,
    },
}

/// A single boolean clause over one bound value.
#[derive(Debug, Clone)]
pub struct Condition(ConditionInner);

impl Condition {
    /// Create a condition comparing `target` against a bound value.
    ///
    /// `target` is written into the SQL text as-is; pass a column name or an
    /// aggregate expression that the surrounding statement defines.
    pub fn new<T>(target: impl Into<String>, op: Op<T>) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        let (operator, value) = op.into_parts();
        Condition(ConditionInner::Expr {
            target: target.into(),
            operator,
            value: Arc::new(value),
        })
    }

    /// Create a raw SQL condition.
    ///
    /// The fragment is not parameterized; never build it from user input.
    pub fn raw(sql: impl Into<String>) -> Self {
        Condition(ConditionInner::Raw(sql.into()))
    }

    /// Create an equality condition: target = value
    pub fn eq<T>(target: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::new(target, Op::Eq(value))
    }

    /// Create a greater-than-or-equal condition: target >= value
    pub fn gte<T>(target: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::new(target, Op::Gte(value))
    }

    /// Create a less-than-or-equal condition: target <= value
    pub fn lte<T>(target: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::new(target, Op::Lte(value))
    }

    /// Create a LIKE condition: target LIKE pattern
    pub fn like<T>(target: impl Into<String>, pattern: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::new(target, Op::Like(pattern))
    }

    /// Create a case-insensitive ILIKE condition: target ILIKE pattern
    pub fn ilike<T>(target: impl Into<String>, pattern: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::new(target, Op::Ilike(pattern))
    }

    /// Number of parameters this condition binds.
    pub fn param_count(&self) -> usize {
        match &self.0 {
            ConditionInner::Raw(_) => 0,
            ConditionInner::Expr { .. } => 1,
        }
    }

    /// Append this condition into a [`Sql`] builder.
    pub fn append_to_sql(&self, sql: &mut Sql) {
        match &self.0 {
            ConditionInner::Raw(s) => {
                sql.push(s);
            }
            ConditionInner::Expr {
                target,
                operator,
                value,
            } => {
                sql.push(target);
                sql.push(" ");
                sql.push(operator);
                sql.push(" ");
                sql.push_bind_value(value.clone());
            }
        }
    }
}
