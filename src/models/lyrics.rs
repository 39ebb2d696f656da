use serde::{Deserialize, Serialize};
use surrealdb::{sql::Thing, Datetime};
use validator::Validate;

use crate::{
    helpers::thing_helpers::{serialize_id, serialize_opt_id},
    validators::request_validator::{validate_language, RequestModel},
};

/// One language variant of a song's text.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SongLyrics {
    #[serde(serialize_with = "serialize_id")]
    pub id: Thing,
    #[serde(serialize_with = "serialize_id")]
    pub song_id: Thing,
    pub language: String,
    pub content: String,
    #[serde(default)]
    pub is_original: bool,
    #[serde(default, serialize_with = "serialize_opt_id")]
    pub contributor_id: Option<Thing>,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

#[derive(Debug, Serialize, Clone)]
pub struct NewSongLyrics {
    pub song_id: Thing,
    pub language: String,
    pub content: String,
    pub is_original: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_id: Option<Thing>,
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct LyricsChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_original: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLyricsPayload {
    #[validate(custom = "validate_language")]
    pub language: String,
    #[validate(length(min = 1, max = 50000))]
    pub content: String,
    pub is_original: Option<bool>,
}

impl RequestModel for NewLyricsPayload {
    const INVALID_MESSAGE: &'static str = "Invalid lyrics data";
}

impl NewLyricsPayload {
    pub fn into_new_lyrics(self, song_id: Thing, contributor_id: Option<Thing>) -> NewSongLyrics {
        NewSongLyrics {
            song_id,
            language: self.language,
            content: self.content,
            is_original: self.is_original.unwrap_or(false),
            contributor_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLyricsPayload {
    #[validate(custom = "validate_language")]
    pub language: Option<String>,
    #[validate(length(min = 1, max = 50000))]
    pub content: Option<String>,
    pub is_original: Option<bool>,
}

impl RequestModel for UpdateLyricsPayload {
    const INVALID_MESSAGE: &'static str = "Invalid lyrics data";
}

impl From<UpdateLyricsPayload> for LyricsChanges {
    fn from(payload: UpdateLyricsPayload) -> Self {
        Self {
            language: payload.language,
            content: payload.content,
            is_original: payload.is_original,
        }
    }
}
