//! # lightbnb-db
//!
//! PostgreSQL data-access layer for the LightBnB vacation-rental listings.
//!
//! - **Parameterized only**: every value travels as a bound `$N` parameter,
//!   rendered together with the SQL text by [`Sql`]
//! - **Typed rows**: [`User`], [`Property`], [`PropertyListing`], [`Reservation`]
//!   via the [`FromRow`] trait
//! - **Explicit outcomes**: lookups return `DbResult<Option<T>>`, so "no such
//!   row" and "query failed" never look alike
//! - **One round trip per call**: no transactions, no caching
//!
//! ```ignore
//! use lightbnb_db::{DbConfig, SearchOptions, create_pool, get_all_properties};
//!
//! let pool = create_pool(&DbConfig::from_env()?)?;
//! let client = pool.get().await?;
//!
//! let options = SearchOptions::new()
//!     .city("vancouver")
//!     .maximum_price_per_night(90_000)
//!     .minimum_rating(4.0);
//! let listings = get_all_properties(&client, &options, Some(20)).await?;
//! ```

pub mod client;
pub mod condition;
pub mod config;
pub mod error;
pub mod insert;
pub mod models;
pub mod repo;
pub mod row;
pub mod search;
pub mod sql;

pub use client::GenericClient;
pub use condition::{Condition, Op};
pub use config::DbConfig;
pub use error::{DbError, DbResult, DbResultExt};
pub use insert::{InsertRecord, Insertable, build_insert};
pub use models::{NewProperty, NewUser, Property, PropertyListing, Reservation, User};
pub use repo::{
    add_property, add_user, get_all_properties, get_all_reservations, get_user_with_email,
    get_user_with_id, search_properties,
};
pub use row::{FromRow, RowExt};
pub use search::{
    CityMatch, DEFAULT_LIMIT, PriceRange, PropertySearch, SearchOptions, build_property_search,
};
pub use sql::{Sql, sql};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::create_pool;
