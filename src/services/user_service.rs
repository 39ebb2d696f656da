use surrealdb::{engine::any::Any, Surreal};

use crate::{
    error::{Error, Result},
    helpers::thing_helpers::create_user_thing,
    models::user::{UpsertUser, User},
};

pub struct UserService;

impl UserService {
    pub async fn get_user(db: &Surreal<Any>, user_id: &str) -> Result<Option<User>> {
        let mut response = db
            .query("SELECT * FROM $user;")
            .bind(("user", create_user_thing(user_id)))
            .await?;
        let user: Option<User> = response.take(0)?;
        Ok(user)
    }

    /// Insert, or overwrite every profile field of an existing row. The
    /// creation timestamp survives; `updated_at` is refreshed.
    pub async fn upsert_user(db: &Surreal<Any>, user: UpsertUser) -> Result<User> {
        let sql = "
            UPSERT $user SET
                email = $email,
                first_name = $first_name,
                last_name = $last_name,
                profile_image_url = $profile_image_url,
                updated_at = time::now();
        ";

        let mut response = db
            .query(sql)
            .bind(("user", create_user_thing(&user.id)))
            .bind(("email", user.email))
            .bind(("first_name", user.first_name))
            .bind(("last_name", user.last_name))
            .bind(("profile_image_url", user.profile_image_url))
            .await?;

        let upserted: Option<User> = response.take(0)?;
        upserted.ok_or(Error::DbError(format!("Could not upsert user {}", user.id)))
    }
}
