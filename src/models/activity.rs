use serde::{Deserialize, Serialize};
use surrealdb::{sql::Thing, Datetime};

use crate::{
    helpers::thing_helpers::{serialize_id, serialize_opt_id},
    models::edit_suggestion::SuggestionStatus,
};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SongActivity {
    #[serde(serialize_with = "serialize_id")]
    pub id: Thing,
    pub title: String,
    pub artist: String,
    pub created_at: Datetime,
    #[serde(
        rename(deserialize = "created_by"),
        default,
        serialize_with = "serialize_opt_id"
    )]
    pub user_id: Option<Thing>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LyricsActivity {
    #[serde(serialize_with = "serialize_id")]
    pub id: Thing,
    #[serde(serialize_with = "serialize_id")]
    pub song_id: Thing,
    pub language: String,
    pub created_at: Datetime,
    #[serde(
        rename(deserialize = "contributor_id"),
        default,
        serialize_with = "serialize_opt_id"
    )]
    pub user_id: Option<Thing>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SuggestionActivity {
    #[serde(serialize_with = "serialize_id")]
    pub id: Thing,
    #[serde(serialize_with = "serialize_id")]
    pub song_id: Thing,
    pub status: SuggestionStatus,
    pub created_at: Datetime,
    #[serde(
        rename(deserialize = "suggested_by"),
        default,
        serialize_with = "serialize_opt_id"
    )]
    pub user_id: Option<Thing>,
}

/// Entry of the activity feed, tagged with `type` on the wire.
#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActivityItem {
    Song(SongActivity),
    Lyrics(LyricsActivity),
    Suggestion(SuggestionActivity),
}

impl ActivityItem {
    pub fn created_at(&self) -> &Datetime {
        match self {
            Self::Song(item) => &item.created_at,
            Self::Lyrics(item) => &item.created_at,
            Self::Suggestion(item) => &item.created_at,
        }
    }
}
