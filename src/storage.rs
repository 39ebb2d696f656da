use async_trait::async_trait;
use surrealdb::{engine::any::Any, Surreal};

use crate::{
    error::Result,
    models::{
        activity::ActivityItem,
        edit_suggestion::{EditSuggestion, NewEditSuggestion, SuggestionStatus},
        favorite::{Favorite, FavoriteWithSong, NewFavorite},
        lyrics::{LyricsChanges, NewSongLyrics, SongLyrics},
        song::{NewSong, Song, SongChanges, SongWithLyrics},
        user::{UpsertUser, User},
    },
    services::{
        activity_service::ActivityService, edit_suggestion_service::EditSuggestionService,
        favorite_service::FavoriteService, lyrics_service::LyricsService,
        song_service::SongService, user_service::UserService,
    },
};

/// Everything the route layer may ask of the store. Reads report absence as
/// `None` or an empty list; only writes fail on bad references.
#[async_trait]
pub trait Storage: Send + Sync {
    // -- Users
    async fn get_user(&self, id: &str) -> Result<Option<User>>;
    async fn upsert_user(&self, user: UpsertUser) -> Result<User>;

    // -- Songs
    async fn get_songs(&self, limit: u32, offset: u32) -> Result<Vec<Song>>;
    async fn get_song(&self, id: &str) -> Result<Option<Song>>;
    async fn get_song_with_lyrics(&self, id: &str) -> Result<Option<SongWithLyrics>>;
    async fn create_song(&self, song: NewSong) -> Result<Song>;
    async fn update_song(&self, id: &str, changes: SongChanges) -> Result<Option<Song>>;
    async fn search_songs(&self, query: &str, limit: u32) -> Result<Vec<Song>>;
    async fn increment_view_count(&self, id: &str) -> Result<()>;

    // -- Lyrics
    async fn get_song_lyrics(&self, song_id: &str) -> Result<Vec<SongLyrics>>;
    async fn create_song_lyrics(&self, lyrics: NewSongLyrics) -> Result<SongLyrics>;
    async fn update_song_lyrics(
        &self,
        id: &str,
        changes: LyricsChanges,
    ) -> Result<Option<SongLyrics>>;

    // -- Favorites
    async fn get_user_favorites(&self, user_id: &str) -> Result<Vec<FavoriteWithSong>>;
    async fn add_favorite(&self, favorite: NewFavorite) -> Result<Favorite>;
    async fn remove_favorite(&self, user_id: &str, song_id: &str) -> Result<()>;
    async fn is_favorite(&self, user_id: &str, song_id: &str) -> Result<bool>;

    // -- Edit suggestions
    async fn get_edit_suggestions(
        &self,
        status: Option<SuggestionStatus>,
    ) -> Result<Vec<EditSuggestion>>;
    async fn create_edit_suggestion(&self, suggestion: NewEditSuggestion)
        -> Result<EditSuggestion>;
    async fn update_edit_suggestion_status(
        &self,
        id: &str,
        status: SuggestionStatus,
        reviewer_id: &str,
    ) -> Result<EditSuggestion>;

    // -- Statistics
    async fn get_popular_songs(&self, limit: u32) -> Result<Vec<Song>>;
    async fn get_recent_activity(&self, limit: u32) -> Result<Vec<ActivityItem>>;
}

/// `Storage` over a SurrealDB handle.
#[derive(Clone)]
pub struct DatabaseStorage {
    db: Surreal<Any>,
}

impl DatabaseStorage {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        UserService::get_user(&self.db, id).await
    }

    async fn upsert_user(&self, user: UpsertUser) -> Result<User> {
        UserService::upsert_user(&self.db, user).await
    }

    async fn get_songs(&self, limit: u32, offset: u32) -> Result<Vec<Song>> {
        SongService::get_songs(&self.db, limit, offset).await
    }

    async fn get_song(&self, id: &str) -> Result<Option<Song>> {
        SongService::get_song(&self.db, id).await
    }

    async fn get_song_with_lyrics(&self, id: &str) -> Result<Option<SongWithLyrics>> {
        SongService::get_song_with_lyrics(&self.db, id).await
    }

    async fn create_song(&self, song: NewSong) -> Result<Song> {
        SongService::create_song(&self.db, song).await
    }

    async fn update_song(&self, id: &str, changes: SongChanges) -> Result<Option<Song>> {
        SongService::update_song(&self.db, id, changes).await
    }

    async fn search_songs(&self, query: &str, limit: u32) -> Result<Vec<Song>> {
        SongService::search_songs(&self.db, query, limit).await
    }

    async fn increment_view_count(&self, id: &str) -> Result<()> {
        SongService::increment_view_count(&self.db, id).await
    }

    async fn get_song_lyrics(&self, song_id: &str) -> Result<Vec<SongLyrics>> {
        LyricsService::get_song_lyrics(&self.db, song_id).await
    }

    async fn create_song_lyrics(&self, lyrics: NewSongLyrics) -> Result<SongLyrics> {
        LyricsService::create_song_lyrics(&self.db, lyrics).await
    }

    async fn update_song_lyrics(
        &self,
        id: &str,
        changes: LyricsChanges,
    ) -> Result<Option<SongLyrics>> {
        LyricsService::update_song_lyrics(&self.db, id, changes).await
    }

    async fn get_user_favorites(&self, user_id: &str) -> Result<Vec<FavoriteWithSong>> {
        FavoriteService::get_user_favorites(&self.db, user_id).await
    }

    async fn add_favorite(&self, favorite: NewFavorite) -> Result<Favorite> {
        FavoriteService::add_favorite(&self.db, favorite).await
    }

    async fn remove_favorite(&self, user_id: &str, song_id: &str) -> Result<()> {
        FavoriteService::remove_favorite(&self.db, user_id, song_id).await
    }

    async fn is_favorite(&self, user_id: &str, song_id: &str) -> Result<bool> {
        FavoriteService::is_favorite(&self.db, user_id, song_id).await
    }

    async fn get_edit_suggestions(
        &self,
        status: Option<SuggestionStatus>,
    ) -> Result<Vec<EditSuggestion>> {
        EditSuggestionService::get_edit_suggestions(&self.db, status).await
    }

    async fn create_edit_suggestion(
        &self,
        suggestion: NewEditSuggestion,
    ) -> Result<EditSuggestion> {
        EditSuggestionService::create_edit_suggestion(&self.db, suggestion).await
    }

    async fn update_edit_suggestion_status(
        &self,
        id: &str,
        status: SuggestionStatus,
        reviewer_id: &str,
    ) -> Result<EditSuggestion> {
        EditSuggestionService::update_edit_suggestion_status(&self.db, id, status, reviewer_id)
            .await
    }

    async fn get_popular_songs(&self, limit: u32) -> Result<Vec<Song>> {
        SongService::get_popular_songs(&self.db, limit).await
    }

    async fn get_recent_activity(&self, limit: u32) -> Result<Vec<ActivityItem>> {
        ActivityService::get_recent_activity(&self.db, limit).await
    }
}
