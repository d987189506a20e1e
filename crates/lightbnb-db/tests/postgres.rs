//! Round trips against a live database.
//!
//! Skipped unless `DATABASE_URL` is set. Every test works on session-local
//! TEMP tables that shadow the real schema, so nothing persists.

use lightbnb_db::{
    DbError, NewProperty, NewUser, SearchOptions, add_property, add_user, get_all_properties,
    get_all_reservations, get_user_with_email, get_user_with_id,
};

const SCHEMA: &str = "
CREATE TEMP TABLE users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL
);
CREATE TEMP TABLE properties (
    id SERIAL PRIMARY KEY,
    owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    thumbnail_photo_url VARCHAR(255) NOT NULL,
    cover_photo_url VARCHAR(255) NOT NULL,
    cost_per_night INTEGER NOT NULL DEFAULT 0,
    parking_spaces INTEGER NOT NULL DEFAULT 0,
    number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
    number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
    country VARCHAR(255) NOT NULL,
    street VARCHAR(255) NOT NULL,
    city VARCHAR(255) NOT NULL,
    province VARCHAR(255) NOT NULL,
    post_code VARCHAR(255) NOT NULL,
    active BOOLEAN NOT NULL DEFAULT TRUE
);
CREATE TEMP TABLE reservations (
    id SERIAL PRIMARY KEY,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
);
CREATE TEMP TABLE property_reviews (
    id SERIAL PRIMARY KEY,
    guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    reservation_id INTEGER NOT NULL REFERENCES reservations(id) ON DELETE CASCADE,
    rating SMALLINT NOT NULL DEFAULT 0,
    message TEXT
);
";

async fn try_connect() -> Option<tokio_postgres::Client> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let (client, connection) = tokio_postgres::connect(&database_url, tokio_postgres::NoTls)
        .await
        .expect("Failed to connect to DATABASE_URL with NoTls");
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("tokio-postgres connection error: {e}");
        }
    });
    client.batch_execute(SCHEMA).await.expect("create temp schema");
    Some(client)
}

fn listing(owner_id: i32, title: &str, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: title.to_string(),
        description: Some("description".to_string()),
        thumbnail_photo_url: "https://example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://example.com/cover.jpg".to_string(),
        cost_per_night,
        parking_spaces: Some(1),
        number_of_bathrooms: None,
        number_of_bedrooms: Some(2),
        country: "Canada".to_string(),
        street: "1 Main St".to_string(),
        city: city.to_string(),
        province: "Quebec".to_string(),
        post_code: "H0H 0H0".to_string(),
    }
}

#[tokio::test]
async fn user_round_trip() {
    let Some(client) = try_connect().await else {
        return;
    };

    let created = add_user(
        &client,
        NewUser {
            name: "Devin Sanders".to_string(),
            email: "tristanjacobs@gmail.com".to_string(),
            password: "hash".to_string(),
        },
    )
    .await
    .unwrap();

    let by_email = get_user_with_email(&client, "tristanjacobs@gmail.com")
        .await
        .unwrap();
    assert_eq!(by_email.as_ref(), Some(&created));

    let by_id = get_user_with_id(&client, created.id).await.unwrap();
    assert_eq!(by_id, Some(created));

    assert!(get_user_with_email(&client, "missing@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_unique_violation() {
    let Some(client) = try_connect().await else {
        return;
    };

    let user = NewUser {
        name: "Eva Stanley".to_string(),
        email: "sebastianguerra@ymail.com".to_string(),
        password: "hash".to_string(),
    };
    add_user(&client, user.clone()).await.unwrap();
    let err = add_user(&client, user).await.unwrap_err();
    assert!(matches!(err, DbError::UniqueViolation(_)), "{err}");
}

#[tokio::test]
async fn search_filters_and_orders_listings() {
    let Some(client) = try_connect().await else {
        return;
    };

    let owner = add_user(
        &client,
        NewUser {
            name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
            password: "hash".to_string(),
        },
    )
    .await
    .unwrap();

    let cheap = add_property(&client, listing(owner.id, "Cheap", "Montreal", 40_000))
        .await
        .unwrap();
    let mid = add_property(&client, listing(owner.id, "Mid", "Montreal", 60_000))
        .await
        .unwrap();
    add_property(&client, listing(owner.id, "Pricey", "Toronto", 95_000))
        .await
        .unwrap();
    assert_eq!(mid.number_of_bathrooms, 0);

    client
        .batch_execute(&format!(
            "INSERT INTO reservations (start_date, end_date, property_id, guest_id)
                 VALUES ('2018-09-11', '2018-09-26', {mid}, {guest}),
                        ('2018-01-04', '2018-02-01', {cheap}, {guest});
             INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating)
                 VALUES ({guest}, {mid}, 1, 5), ({guest}, {cheap}, 2, 2);",
            mid = mid.id,
            cheap = cheap.id,
            guest = owner.id,
        ))
        .await
        .unwrap();

    let montreal = get_all_properties(&client, &SearchOptions::new().city("montreal"), None)
        .await
        .unwrap();
    let titles: Vec<&str> = montreal.iter().map(|l| l.property.title.as_str()).collect();
    assert_eq!(titles, vec!["Cheap", "Mid"]);

    let bounded = SearchOptions::new()
        .minimum_price_per_night(50_000)
        .maximum_price_per_night(90_000);
    let in_range = get_all_properties(&client, &bounded, None).await.unwrap();
    assert_eq!(in_range.len(), 1);
    assert_eq!(in_range[0].property.id, mid.id);

    let well_rated = get_all_properties(&client, &SearchOptions::new().minimum_rating(4.0), None)
        .await
        .unwrap();
    assert_eq!(well_rated.len(), 1);
    assert_eq!(well_rated[0].average_rating, Some(5.0));

    let limited = get_all_properties(&client, &SearchOptions::default(), Some(2))
        .await
        .unwrap();
    assert_eq!(limited.len(), 2);

    let reservations = get_all_reservations(&client, owner.id, None).await.unwrap();
    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].property_title, "Cheap");
    assert!(reservations[0].start_date < reservations[1].start_date);
}
