use surrealdb::{engine::any::Any, Surreal};

use crate::{
    error::{Error, Result},
    helpers::thing_helpers::{create_song_thing, SONG_TABLE},
    models::{
        song::{NewSong, Song, SongChanges, SongWithLyrics},
        Stamped,
    },
    services::lyrics_service::LyricsService,
};

pub struct SongService;

impl SongService {
    pub async fn get_songs(db: &Surreal<Any>, limit: u32, offset: u32) -> Result<Vec<Song>> {
        let sql = format!(
            "SELECT * FROM song ORDER BY created_at DESC LIMIT {} START {};",
            limit, offset
        );
        let mut response = db.query(sql).await?;
        let songs: Vec<Song> = response.take(0)?;
        Ok(songs)
    }

    pub async fn get_song(db: &Surreal<Any>, song_id: &str) -> Result<Option<Song>> {
        let mut response = db
            .query("SELECT * FROM $song;")
            .bind(("song", create_song_thing(song_id)))
            .await?;
        let song: Option<Song> = response.take(0)?;
        Ok(song)
    }

    pub async fn get_song_with_lyrics(
        db: &Surreal<Any>,
        song_id: &str,
    ) -> Result<Option<SongWithLyrics>> {
        let Some(song) = Self::get_song(db, song_id).await? else {
            return Ok(None);
        };

        let lyrics = LyricsService::get_song_lyrics(db, song_id).await?;

        Ok(Some(SongWithLyrics { song, lyrics }))
    }

    pub async fn create_song(db: &Surreal<Any>, song: NewSong) -> Result<Song> {
        db.create(SONG_TABLE)
            .content(song)
            .await?
            .ok_or(Error::DbError("Could not create song".into()))
    }

    /// Merges the given fields and refreshes `updated_at`. `None` when the
    /// song does not exist.
    pub async fn update_song(
        db: &Surreal<Any>,
        song_id: &str,
        changes: SongChanges,
    ) -> Result<Option<Song>> {
        let mut response = db
            .query("UPDATE $song MERGE $changes;")
            .bind(("song", create_song_thing(song_id)))
            .bind(("changes", Stamped::now(changes)))
            .await?;
        let song: Option<Song> = response.take(0)?;
        Ok(song)
    }

    /// Case-insensitive substring match on title or artist, or exact tag
    /// membership. Most viewed first; no scoring.
    pub async fn search_songs(db: &Surreal<Any>, term: &str, limit: u32) -> Result<Vec<Song>> {
        let sql = format!(
            "SELECT * FROM song
            WHERE string::lowercase(title) CONTAINS $needle
                OR string::lowercase(artist) CONTAINS $needle
                OR tags CONTAINS $term
            ORDER BY view_count DESC
            LIMIT {};",
            limit
        );

        let mut response = db
            .query(sql)
            .bind(("needle", term.to_lowercase()))
            .bind(("term", term.to_string()))
            .await?;
        let songs: Vec<Song> = response.take(0)?;
        Ok(songs)
    }

    /// Single-statement increment; concurrent views never lose a count.
    pub async fn increment_view_count(db: &Surreal<Any>, song_id: &str) -> Result<()> {
        db.query("UPDATE $song SET view_count += 1 RETURN NONE;")
            .bind(("song", create_song_thing(song_id)))
            .await?
            .check()?;
        Ok(())
    }

    pub async fn get_popular_songs(db: &Surreal<Any>, limit: u32) -> Result<Vec<Song>> {
        let sql = format!(
            "SELECT * FROM song ORDER BY view_count DESC, created_at DESC LIMIT {};",
            limit
        );
        let mut response = db.query(sql).await?;
        let songs: Vec<Song> = response.take(0)?;
        Ok(songs)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{database::test_db, models::lyrics::NewSongLyrics};

    pub(crate) fn new_song(title: &str, artist: &str, tags: &[&str]) -> NewSong {
        NewSong {
            title: title.to_string(),
            artist: artist.to_string(),
            primary_language: "English".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_by: None,
        }
    }

    fn key(song: &Song) -> String {
        song.id.id.to_raw()
    }

    #[tokio::test]
    async fn test_create_song_applies_defaults() {
        let db = test_db().await;

        let song = SongService::create_song(&db, new_song("Amazing Grace", "John Newton", &[]))
            .await
            .unwrap();

        assert_eq!(song.view_count, 0);
        assert!(song.tags.is_empty());
        assert!(song.created_by.is_none());
        assert_eq!(song.id.tb, "song");
    }

    #[tokio::test]
    async fn test_get_missing_song() {
        let db = test_db().await;
        assert!(SongService::get_song(&db, "missing").await.unwrap().is_none());
        assert!(SongService::get_song_with_lyrics(&db, "missing")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_increment_view_count_by_one() {
        let db = test_db().await;
        let song = SongService::create_song(&db, new_song("Be Thou My Vision", "Trad.", &[]))
            .await
            .unwrap();
        let id = key(&song);

        for expected in 1..=3 {
            SongService::increment_view_count(&db, &id).await.unwrap();
            let stored = SongService::get_song(&db, &id).await.unwrap().unwrap();
            assert_eq!(stored.view_count, expected);
        }
    }

    #[tokio::test]
    async fn test_increment_missing_song_is_noop() {
        let db = test_db().await;
        SongService::increment_view_count(&db, "ghost").await.unwrap();
        assert!(SongService::get_song(&db, "ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_songs_newest_first_with_paging() {
        let db = test_db().await;
        for title in ["First", "Second", "Third"] {
            SongService::create_song(&db, new_song(title, "Someone", &[]))
                .await
                .unwrap();
        }

        let page = SongService::get_songs(&db, 2, 0).await.unwrap();
        let titles: Vec<&str> = page.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second"]);

        let rest = SongService::get_songs(&db, 2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].title, "First");
    }

    #[tokio::test]
    async fn test_search_matches_title_artist_and_tags() {
        let db = test_db().await;
        let grace =
            SongService::create_song(&db, new_song("Amazing Grace", "John Newton", &["hymn"]))
                .await
                .unwrap();
        SongService::create_song(
            &db,
            new_song("How Great Thou Art", "Carl Boberg", &["worship"]),
        )
        .await
        .unwrap();
        SongService::create_song(&db, new_song("Oceans", "Hillsong United", &["grace"]))
            .await
            .unwrap();

        SongService::increment_view_count(&db, &key(&grace)).await.unwrap();

        let by_title = SongService::search_songs(&db, "GRACE", 20).await.unwrap();
        let titles: Vec<&str> = by_title.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Grace"]);

        let by_tag = SongService::search_songs(&db, "grace", 20).await.unwrap();
        let titles: Vec<&str> = by_tag.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Grace", "Oceans"]);

        let by_artist = SongService::search_songs(&db, "boberg", 20).await.unwrap();
        assert_eq!(by_artist.len(), 1);
        assert_eq!(by_artist[0].artist, "Carl Boberg");

        let none = SongService::search_songs(&db, "zzz", 20).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_popular_songs_by_views() {
        let db = test_db().await;
        let quiet = SongService::create_song(&db, new_song("Quiet", "A", &[]))
            .await
            .unwrap();
        let loud = SongService::create_song(&db, new_song("Loud", "B", &[]))
            .await
            .unwrap();

        for _ in 0..3 {
            SongService::increment_view_count(&db, &key(&loud)).await.unwrap();
        }
        SongService::increment_view_count(&db, &key(&quiet)).await.unwrap();

        let popular = SongService::get_popular_songs(&db, 1).await.unwrap();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].title, "Loud");
        assert_eq!(popular[0].view_count, 3);
    }

    #[tokio::test]
    async fn test_update_song_merges_fields() {
        let db = test_db().await;
        let song =
            SongService::create_song(&db, new_song("Amazing Grase", "John Newton", &["hymn"]))
                .await
                .unwrap();

        let changes = SongChanges {
            title: Some("Amazing Grace".to_string()),
            ..Default::default()
        };
        let updated = SongService::update_song(&db, &key(&song), changes)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Amazing Grace");
        assert_eq!(updated.artist, "John Newton");
        assert_eq!(updated.tags, vec!["hymn".to_string()]);
        assert!(updated.updated_at >= song.updated_at);

        let missing = SongService::update_song(&db, "ghost", SongChanges::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_song_with_lyrics_orders_original_first() {
        let db = test_db().await;
        let song = SongService::create_song(&db, new_song("Amazing Grace", "John Newton", &[]))
            .await
            .unwrap();

        for (language, is_original) in [("Spanish", false), ("English", true), ("French", false)] {
            LyricsService::create_song_lyrics(
                &db,
                NewSongLyrics {
                    song_id: song.id.clone(),
                    language: language.to_string(),
                    content: format!("{language} text"),
                    is_original,
                    contributor_id: None,
                },
            )
            .await
            .unwrap();
        }

        let with_lyrics = SongService::get_song_with_lyrics(&db, &key(&song))
            .await
            .unwrap()
            .unwrap();
        let languages: Vec<&str> = with_lyrics
            .lyrics
            .iter()
            .map(|l| l.language.as_str())
            .collect();
        assert_eq!(languages, vec!["English", "French", "Spanish"]);
    }
}
