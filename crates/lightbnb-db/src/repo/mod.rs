//! Repository functions: one statement per call.
//!
//! Single-row lookups return `Ok(None)` when nothing matches; any executor
//! failure is returned as `Err`.

mod properties;
mod reservations;
mod users;

#[cfg(test)]
mod tests;

pub use properties::{add_property, get_all_properties, search_properties};
pub use reservations::{build_reservations_query, get_all_reservations};
pub use users::{add_user, get_user_with_email, get_user_with_id};
