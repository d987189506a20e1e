use crate::client::GenericClient;
use crate::error::DbResult;
use crate::insert::Insertable;
use crate::models::{NewUser, User};
use crate::sql::sql;

/// Get a single user by email.
pub async fn get_user_with_email(conn: &impl GenericClient, email: &str) -> DbResult<Option<User>> {
    sql("SELECT * FROM users WHERE email = ")
        .bind(email.to_string())
        .tagged("users.by_email")
        .fetch_opt_as(conn)
        .await
}

/// Get a single user by id.
pub async fn get_user_with_id(conn: &impl GenericClient, id: i32) -> DbResult<Option<User>> {
    sql("SELECT * FROM users WHERE id = ")
        .bind(id)
        .tagged("users.by_id")
        .fetch_opt_as(conn)
        .await
}

/// Insert a user and return the stored row.
pub async fn add_user(conn: &impl GenericClient, user: NewUser) -> DbResult<User> {
    user.insert_sql().fetch_one_as(conn).await
}
