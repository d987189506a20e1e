use super::*;
use crate::client::GenericClient;
use crate::error::{DbError, DbResult};
use crate::models::NewUser;
use crate::search::SearchOptions;
use std::sync::Mutex;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

/// Returns no rows and remembers every statement it was handed.
#[derive(Default)]
struct EmptyClient {
    seen: Mutex<Vec<(String, usize)>>,
}

impl EmptyClient {
    fn statements(&self) -> Vec<(String, usize)> {
        self.seen.lock().unwrap().clone()
    }
}

impl GenericClient for EmptyClient {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> DbResult<Vec<Row>> {
        self.seen.lock().unwrap().push((sql.to_string(), params.len()));
        Ok(vec![])
    }
    async fn execute(&self, _: &str, _: &[&(dyn ToSql + Sync)]) -> DbResult<u64> {
        Ok(0)
    }
}

struct BrokenClient;

impl GenericClient for BrokenClient {
    async fn query(&self, _: &str, _: &[&(dyn ToSql + Sync)]) -> DbResult<Vec<Row>> {
        Err(DbError::Connection("connection refused".to_string()))
    }
    async fn execute(&self, _: &str, _: &[&(dyn ToSql + Sync)]) -> DbResult<u64> {
        Err(DbError::Connection("connection refused".to_string()))
    }
}

#[tokio::test]
async fn unknown_email_is_none_not_error() {
    let client = EmptyClient::default();
    let user = get_user_with_email(&client, "nobody@example.com").await.unwrap();
    assert!(user.is_none());

    let statements = client.statements();
    assert_eq!(
        statements,
        vec![("SELECT * FROM users WHERE email = $1".to_string(), 1)]
    );
}

#[tokio::test]
async fn unknown_id_is_none_not_error() {
    let client = EmptyClient::default();
    assert!(get_user_with_id(&client, 404).await.unwrap().is_none());
    assert_eq!(client.statements()[0].0, "SELECT * FROM users WHERE id = $1");
}

#[tokio::test]
async fn lookup_failure_is_distinguishable_from_no_data() {
    let err = get_user_with_email(&BrokenClient, "a@b.c").await.unwrap_err();
    assert!(matches!(err, DbError::Connection(_)));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn add_user_issues_insert_returning() {
    let client = EmptyClient::default();
    let user = NewUser {
        name: "John Doe".to_string(),
        email: "johndoe@outlook.com".to_string(),
        password: "hash".to_string(),
    };

    // The stub returns no row, which an INSERT ... RETURNING never does.
    let err = add_user(&client, user).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        client.statements(),
        vec![(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *".to_string(),
            3
        )]
    );
}

#[tokio::test]
async fn reservations_bind_guest_and_limit() {
    let client = EmptyClient::default();
    let reservations = get_all_reservations(&client, 7, None).await.unwrap();
    assert!(reservations.is_empty());

    let (sql, param_count) = client.statements().remove(0);
    assert_eq!(param_count, 2);
    assert!(sql.contains("WHERE reservations.guest_id = $1"));
    assert!(sql.contains("ORDER BY reservations.start_date"));
    assert!(sql.ends_with("LIMIT $2"));
}

#[test]
fn reservations_default_limit_is_ten() {
    let q = build_reservations_query(7, None);
    assert_eq!(q.params_debug(), vec!["7", "10"]);
    let q = build_reservations_query(7, Some(3));
    assert_eq!(q.params_debug(), vec!["7", "3"]);
}

#[tokio::test]
async fn property_search_runs_built_statement() {
    let client = EmptyClient::default();
    let options = SearchOptions::new().city("vancouver").minimum_rating(4.0);
    let listings = get_all_properties(&client, &options, Some(5)).await.unwrap();
    assert!(listings.is_empty());

    let (sql, param_count) = client.statements().remove(0);
    assert_eq!(param_count, 3);
    assert!(sql.contains("properties.city LIKE $1"));
    assert!(sql.contains("LIMIT $3"));
}

#[tokio::test]
async fn property_search_failure_propagates() {
    let err = get_all_properties(&BrokenClient, &SearchOptions::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Connection(_)));
}
