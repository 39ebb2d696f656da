use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use surrealdb::{sql::Thing, Datetime};
use validator::Validate;

use crate::{
    helpers::thing_helpers::serialize_id, models::song::Song,
    validators::request_validator::RequestModel,
};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Favorite {
    #[serde(serialize_with = "serialize_id")]
    pub id: Thing,
    #[serde(serialize_with = "serialize_id")]
    pub user_id: Thing,
    #[serde(serialize_with = "serialize_id")]
    pub song_id: Thing,
    pub created_at: Datetime,
}

/// Favorite joined with the song it points at.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteWithSong {
    #[serde(serialize_with = "serialize_id")]
    pub id: Thing,
    #[serde(serialize_with = "serialize_id")]
    pub user_id: Thing,
    #[serde(serialize_with = "serialize_id")]
    pub song_id: Thing,
    pub created_at: Datetime,
    pub song: Song,
}

#[derive(Debug, Serialize, Clone)]
pub struct NewFavorite {
    pub user_id: Thing,
    pub song_id: Thing,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FavoritePayload {
    #[serde(default, deserialize_with = "deserialize_song_id")]
    pub song_id: Option<String>,
}

/// Accepts the id as a string or a number. Anything else counts as missing.
fn deserialize_song_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    };
    Ok(id)
}

impl RequestModel for FavoritePayload {
    const INVALID_MESSAGE: &'static str = "Invalid favorite data";
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCheck {
    pub is_favorite: bool,
}
