//! Generic INSERT builder.
//!
//! An [`InsertRecord`] is an ordered list of `(column, value)` pairs. Its key
//! order decides both the column list and the placeholder order, so the two
//! stay positionally aligned.
//!
//! ```ignore
//! let q = build_insert(
//!     "properties",
//!     InsertRecord::new().set("title", "A").set("cost_per_night", 100),
//! );
//! // INSERT INTO properties (title, cost_per_night) VALUES ($1, $2) RETURNING *
//! ```

use crate::sql::Sql;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// Ordered column/value mapping for one row.
///
/// Column names are written into the statement as given; a key that does not
/// exist on the target table fails when the statement executes.
#[derive(Clone, Default)]
pub struct InsertRecord {
    fields: Vec<(String, Arc<dyn ToSql + Send + Sync>)>,
}

impl InsertRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set a column value.
    pub fn set<T: ToSql + Send + Sync + 'static>(mut self, column: &str, value: T) -> Self {
        self.fields.push((column.to_string(), Arc::new(value)));
        self
    }

    /// Set an optional column value (None => leave the column out).
    pub fn set_opt<T: ToSql + Send + Sync + 'static>(self, column: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> Vec<&str> {
        self.fields.iter().map(|(c, _)| c.as_str()).collect()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no column has been set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl std::fmt::Debug for InsertRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(c, v)| (c, v)))
            .finish()
    }
}

/// A payload that knows which table it is inserted into.
pub trait Insertable: Sized {
    /// Target table.
    const TABLE: &'static str;

    /// Convert into the ordered record handed to [`build_insert`].
    fn into_record(self) -> InsertRecord;

    /// Build the `INSERT ... RETURNING *` statement for this payload.
    fn insert_sql(self) -> Sql {
        build_insert(Self::TABLE, self.into_record())
    }
}

/// Build `INSERT INTO <table> (<cols>) VALUES ($1..$n) RETURNING *`.
///
/// An empty record renders `INSERT INTO <table> DEFAULT VALUES RETURNING *`.
pub fn build_insert(table: &str, record: InsertRecord) -> Sql {
    let mut q = Sql::new(format!("INSERT INTO {table}"));
    if record.is_empty() {
        q.push(" DEFAULT VALUES");
    } else {
        q.push(" (").push(&record.columns().join(", ")).push(") VALUES (");
        for (i, (_, value)) in record.fields.into_iter().enumerate() {
            if i > 0 {
                q.push(", ");
            }
            q.push_bind_value(value);
        }
        q.push(")");
    }
    q.push(" RETURNING *");
    q.tag(format!("{table}.insert"));
    q
}
