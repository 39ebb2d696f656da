use serde::{Deserialize, Serialize};
use surrealdb::{sql::Thing, Datetime};
use validator::Validate;

use crate::{
    helpers::thing_helpers::{serialize_id, serialize_opt_id},
    models::lyrics::SongLyrics,
    validators::request_validator::{validate_language, validate_tags, RequestModel},
};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Song {
    #[serde(serialize_with = "serialize_id")]
    pub id: Thing,

    pub title: String,
    pub artist: String,
    pub primary_language: String,
    #[serde(default)]
    pub tags: Vec<String>,

    // Stats
    #[serde(default)]
    pub view_count: i64,

    // Relations
    #[serde(default, serialize_with = "serialize_opt_id")]
    pub created_by: Option<Thing>,

    pub created_at: Datetime,
    pub updated_at: Datetime,
}

#[derive(Debug, Serialize, Clone)]
pub struct SongWithLyrics {
    #[serde(flatten)]
    pub song: Song,
    pub lyrics: Vec<SongLyrics>,
}

/// Row content for `CREATE song`. Store defaults fill in the rest.
#[derive(Debug, Serialize, Clone)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub primary_language: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Thing>,
}

/// Partial update merged into an existing song.
#[derive(Debug, Serialize, Clone, Default)]
pub struct SongChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSongPayload {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub artist: String,
    #[validate(custom = "validate_language")]
    pub primary_language: String,
    #[validate(custom = "validate_tags")]
    pub tags: Option<Vec<String>>,
}

impl RequestModel for NewSongPayload {
    const INVALID_MESSAGE: &'static str = "Invalid song data";
}

impl NewSongPayload {
    pub fn into_new_song(self, created_by: Option<Thing>) -> NewSong {
        NewSong {
            title: self.title,
            artist: self.artist,
            primary_language: self.primary_language,
            tags: self.tags.unwrap_or_default(),
            created_by,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSongPayload {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub artist: Option<String>,
    #[validate(custom = "validate_language")]
    pub primary_language: Option<String>,
    #[validate(custom = "validate_tags")]
    pub tags: Option<Vec<String>>,
}

impl RequestModel for UpdateSongPayload {
    const INVALID_MESSAGE: &'static str = "Invalid song data";
}

impl From<UpdateSongPayload> for SongChanges {
    fn from(payload: UpdateSongPayload) -> Self {
        Self {
            title: payload.title,
            artist: payload.artist,
            primary_language: payload.primary_language,
            tags: payload.tags,
        }
    }
}
