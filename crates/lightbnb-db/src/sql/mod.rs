//! Dynamic SQL builder.
//!
//! `Sql` composes statements out of raw fragments and bound values without
//! manually tracking placeholder indices.
//!
//! # Example
//!
//! ```ignore
//! use lightbnb_db::sql;
//!
//! let mut q = sql("SELECT * FROM users");
//! if let Some(email) = email {
//!     q.push(" WHERE email = ").push_bind(email);
//! }
//! q.limit(10);
//!
//! let users: Vec<User> = q.fetch_all_as(&conn).await?;
//! ```

mod builder;


pub use builder::Sql;

/// Start building a SQL statement.
pub fn sql(initial_sql: impl Into<String>) -> Sql {
    Sql::new(initial_sql)
}
