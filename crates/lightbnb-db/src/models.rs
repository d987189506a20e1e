//! Domain rows returned by the repository functions.

use crate::error::DbResult;
use crate::insert::{InsertRecord, Insertable};
use crate::row::{FromRow, RowExt};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A row of `users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Password hash as stored; never the plain text.
    pub password: String,
}

impl FromRow for User {
    fn from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            name: row.try_get_column("name")?,
            email: row.try_get_column("email")?,
            password: row.try_get_column("password")?,
        })
    }
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Insertable for NewUser {
    const TABLE: &'static str = "users";

    fn into_record(self) -> InsertRecord {
        InsertRecord::new()
            .set("name", self.name)
            .set("email", self.email)
            .set("password", self.password)
    }
}

/// A row of `properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly cost in the smallest currency unit.
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

impl FromRow for Property {
    fn from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            owner_id: row.try_get_column("owner_id")?,
            title: row.try_get_column("title")?,
            description: row.try_get_column("description")?,
            thumbnail_photo_url: row.try_get_column("thumbnail_photo_url")?,
            cover_photo_url: row.try_get_column("cover_photo_url")?,
            cost_per_night: row.try_get_column("cost_per_night")?,
            parking_spaces: row.try_get_column("parking_spaces")?,
            number_of_bathrooms: row.try_get_column("number_of_bathrooms")?,
            number_of_bedrooms: row.try_get_column("number_of_bedrooms")?,
            country: row.try_get_column("country")?,
            street: row.try_get_column("street")?,
            city: row.try_get_column("city")?,
            province: row.try_get_column("province")?,
            post_code: row.try_get_column("post_code")?,
            active: row.try_get_column("active")?,
        })
    }
}

/// Payload for creating a listing.
///
/// Optional counts fall back to the column defaults by being left out of the
/// INSERT entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: Option<i32>,
    pub number_of_bathrooms: Option<i32>,
    pub number_of_bedrooms: Option<i32>,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

impl Insertable for NewProperty {
    const TABLE: &'static str = "properties";

    fn into_record(self) -> InsertRecord {
        InsertRecord::new()
            .set("owner_id", self.owner_id)
            .set("title", self.title)
            .set("description", self.description)
            .set("thumbnail_photo_url", self.thumbnail_photo_url)
            .set("cover_photo_url", self.cover_photo_url)
            .set("cost_per_night", self.cost_per_night)
            .set_opt("parking_spaces", self.parking_spaces)
            .set_opt("number_of_bathrooms", self.number_of_bathrooms)
            .set_opt("number_of_bedrooms", self.number_of_bedrooms)
            .set("country", self.country)
            .set("street", self.street)
            .set("city", self.city)
            .set("province", self.province)
            .set("post_code", self.post_code)
    }
}

/// A listing from the property search: the property plus its average rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    /// `None` when the property has no reviews yet.
    pub average_rating: Option<f64>,
}

impl FromRow for PropertyListing {
    fn from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            property: Property::from_row(row)?,
            average_rating: row.try_get_column("average_rating")?,
        })
    }
}

/// A guest's reservation joined with the reserved property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
    pub property_title: String,
    pub cost_per_night: i32,
    pub average_rating: Option<f64>,
}

impl FromRow for Reservation {
    fn from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            start_date: row.try_get_column("start_date")?,
            end_date: row.try_get_column("end_date")?,
            property_id: row.try_get_column("property_id")?,
            guest_id: row.try_get_column("guest_id")?,
            property_title: row.try_get_column("property_title")?,
            cost_per_night: row.try_get_column("cost_per_night")?,
            average_rating: row.try_get_column("average_rating")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_columns_follow_field_order() {
        let record = NewUser {
            name: "John Doe".to_string(),
            email: "johndoe@outlook.com".to_string(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmez".to_string(),
        }
        .into_record();
        assert_eq!(record.columns(), vec!["name", "email", "password"]);
    }

    #[test]
    fn new_property_skips_unset_counts() {
        let record = NewProperty {
            owner_id: 1,
            title: "Speed lamp".to_string(),
            cost_per_night: 93061,
            parking_spaces: Some(6),
            ..Default::default()
        }
        .into_record();

        let columns = record.columns();
        assert!(columns.contains(&"parking_spaces"));
        assert!(!columns.contains(&"number_of_bathrooms"));
        assert!(!columns.contains(&"number_of_bedrooms"));
        assert_eq!(columns.first(), Some(&"owner_id"));
        assert_eq!(record.len(), 12);
    }

    #[test]
    fn listing_serializes_flat() {
        let listing = PropertyListing {
            property: Property {
                id: 1,
                owner_id: 2,
                title: "Blank corner".to_string(),
                description: None,
                thumbnail_photo_url: "t.jpg".to_string(),
                cover_photo_url: "c.jpg".to_string(),
                cost_per_night: 85234,
                parking_spaces: 6,
                number_of_bathrooms: 6,
                number_of_bedrooms: 7,
                country: "Canada".to_string(),
                street: "651 Nami Road".to_string(),
                city: "Bohbatev".to_string(),
                province: "Alberta".to_string(),
                post_code: "83680".to_string(),
                active: true,
            },
            average_rating: Some(4.2),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["city"], "Bohbatev");
        assert_eq!(json["average_rating"], 4.2);
        assert!(json.get("property").is_none());
    }
}
