use serde::{Deserialize, Serialize};
use surrealdb::{sql::Thing, Datetime};

use crate::helpers::thing_helpers::serialize_id;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct User {
    #[serde(serialize_with = "serialize_id")]
    pub id: Thing,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

/// Profile as asserted by the identity provider. Every field but the id is
/// overwritten on upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl UpsertUser {
    /// True when the stored profile already matches what the provider asserts.
    pub fn matches(&self, user: &User) -> bool {
        self.email == user.email
            && self.first_name == user.first_name
            && self.last_name == user.last_name
            && self.profile_image_url == user.profile_image_url
    }
}
