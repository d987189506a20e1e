use crate::client::GenericClient;
use crate::error::DbResult;
use crate::models::Reservation;
use crate::search::DEFAULT_LIMIT;
use crate::sql::{Sql, sql};

const RESERVATIONS_FOR_GUEST: &str = "SELECT reservations.*, properties.title AS property_title, \
     properties.cost_per_night, avg(property_reviews.rating)::float8 AS average_rating\n\
     FROM reservations\n\
     JOIN properties ON reservations.property_id = properties.id\n\
     LEFT JOIN property_reviews ON property_reviews.reservation_id = reservations.id\n\
     WHERE reservations.guest_id = ";

/// Statement behind [`get_all_reservations`]: two parameters, guest id then limit.
pub fn build_reservations_query(guest_id: i32, limit: Option<i64>) -> Sql {
    let mut q = sql(RESERVATIONS_FOR_GUEST).tagged("reservations.by_guest");
    q.push_bind(guest_id);
    q.push("\nGROUP BY properties.id, reservations.id");
    q.push("\nORDER BY reservations.start_date");
    q.limit(limit.unwrap_or(DEFAULT_LIMIT));
    q
}

/// Get a guest's reservations, earliest start date first.
pub async fn get_all_reservations(
    conn: &impl GenericClient,
    guest_id: i32,
    limit: Option<i64>,
) -> DbResult<Vec<Reservation>> {
    build_reservations_query(guest_id, limit)
        .fetch_all_as(conn)
        .await
}
