use surrealdb::{engine::any::Any, Surreal};

use crate::{
    error::{Error, Result},
    helpers::{
        record_helpers::ensure_referenced,
        thing_helpers::{create_lyrics_thing, create_song_thing, LYRICS_TABLE},
    },
    models::{
        lyrics::{LyricsChanges, NewSongLyrics, SongLyrics},
        Stamped,
    },
};

pub struct LyricsService;

impl LyricsService {
    /// Original-language lyrics first, then the rest by language name.
    pub async fn get_song_lyrics(db: &Surreal<Any>, song_id: &str) -> Result<Vec<SongLyrics>> {
        let sql = "
            SELECT * FROM song_lyrics
            WHERE song_id = $song
            ORDER BY is_original DESC, language ASC;
        ";

        let mut response = db
            .query(sql)
            .bind(("song", create_song_thing(song_id)))
            .await?;
        let lyrics: Vec<SongLyrics> = response.take(0)?;
        Ok(lyrics)
    }

    pub async fn create_song_lyrics(
        db: &Surreal<Any>,
        lyrics: NewSongLyrics,
    ) -> Result<SongLyrics> {
        ensure_referenced(db, &lyrics.song_id).await?;

        db.create(LYRICS_TABLE)
            .content(lyrics)
            .await?
            .ok_or(Error::DbError("Could not create lyrics".into()))
    }

    pub async fn update_song_lyrics(
        db: &Surreal<Any>,
        lyrics_id: &str,
        changes: LyricsChanges,
    ) -> Result<Option<SongLyrics>> {
        let mut response = db
            .query("UPDATE $lyrics MERGE $changes;")
            .bind(("lyrics", create_lyrics_thing(lyrics_id)))
            .bind(("changes", Stamped::now(changes)))
            .await?;
        let lyrics: Option<SongLyrics> = response.take(0)?;
        Ok(lyrics)
    }
}
