//! Property search example
//!
//! Run with: cargo run --example search -p lightbnb-db -- vancouver 4
//!
//! Set DATABASE_URL (or PGHOST/PGDATABASE/PGUSER/PGPASSWORD) in a .env file or
//! the environment. `RUST_LOG=lightbnb.sql=debug` shows the executed SQL.

use lightbnb_db::{
    DbConfig, DbResultExt, SearchOptions, create_pool, get_all_properties, get_all_reservations,
    get_user_with_email,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let city = args.next();
    let minimum_rating: Option<f64> = args.next().map(|r| r.parse()).transpose()?;

    let config = DbConfig::from_env()?;
    let pool = create_pool(&config)?;
    let client = pool.get().await?;

    let mut options = SearchOptions::new();
    if let Some(city) = city {
        options = options.city(city);
    }
    if let Some(rating) = minimum_rating {
        options = options.minimum_rating(rating);
    }

    let listings = get_all_properties(&client, &options, Some(10)).await?;
    println!("{} listing(s)", listings.len());
    for listing in &listings {
        let rating = listing
            .average_rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5}  {:<40} {:<20} {:>8}  {}",
            listing.property.id,
            listing.property.title,
            listing.property.city,
            listing.property.cost_per_night,
            rating
        );
    }

    // Lookups distinguish "no such user" from a failed query.
    match get_user_with_email(&client, "tristanjacobs@gmail.com").await? {
        Some(user) => {
            let reservations = get_all_reservations(&client, user.id, None)
                .await
                .or_log("example.reservations")
                .unwrap_or_default();
            println!("{} has {} reservation(s)", user.name, reservations.len());
        }
        None => println!("no user with that email"),
    }

    Ok(())
}
