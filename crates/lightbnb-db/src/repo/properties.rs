use crate::client::GenericClient;
use crate::error::DbResult;
use crate::insert::Insertable;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::search::{PropertySearch, SearchOptions, build_property_search};

/// Get listings matching `options`, cheapest first, at most `limit` rows
/// (10 when `None`).
pub async fn get_all_properties(
    conn: &impl GenericClient,
    options: &SearchOptions,
    limit: Option<i64>,
) -> DbResult<Vec<PropertyListing>> {
    build_property_search(options, limit).fetch_all_as(conn).await
}

/// Run a fully configured [`PropertySearch`].
pub async fn search_properties(
    conn: &impl GenericClient,
    search: &PropertySearch,
) -> DbResult<Vec<PropertyListing>> {
    search.build().fetch_all_as(conn).await
}

/// Insert a listing and return the stored row.
pub async fn add_property(conn: &impl GenericClient, property: NewProperty) -> DbResult<Property> {
    property.insert_sql().fetch_one_as(conn).await
}
