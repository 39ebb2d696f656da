use serde::Deserialize;
use surrealdb::{engine::any::Any, sql::Thing, Datetime, Surreal};

use crate::{
    error::{Error, Result},
    helpers::{
        record_helpers::{ensure_referenced, CountResult},
        thing_helpers::{create_song_thing, create_user_thing, FAVORITE_TABLE},
    },
    models::{
        favorite::{Favorite, FavoriteWithSong, NewFavorite},
        song::Song,
    },
};

/// Favorite row with `song_id` fetched into the full song.
#[derive(Debug, Deserialize)]
struct FetchedFavorite {
    id: Thing,
    user_id: Thing,
    song_id: Song,
    created_at: Datetime,
}

impl From<FetchedFavorite> for FavoriteWithSong {
    fn from(row: FetchedFavorite) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            song_id: row.song_id.id.clone(),
            created_at: row.created_at,
            song: row.song_id,
        }
    }
}

pub struct FavoriteService;

impl FavoriteService {
    pub async fn get_user_favorites(
        db: &Surreal<Any>,
        user_id: &str,
    ) -> Result<Vec<FavoriteWithSong>> {
        let sql = "
            SELECT * FROM favorite
            WHERE user_id = $user
            ORDER BY created_at DESC
            FETCH song_id;
        ";

        let mut response = db
            .query(sql)
            .bind(("user", create_user_thing(user_id)))
            .await?;
        let rows: Vec<FetchedFavorite> = response.take(0)?;

        Ok(rows.into_iter().map(FavoriteWithSong::from).collect())
    }

    pub async fn add_favorite(db: &Surreal<Any>, favorite: NewFavorite) -> Result<Favorite> {
        ensure_referenced(db, &favorite.song_id).await?;

        db.create(FAVORITE_TABLE)
            .content(favorite)
            .await?
            .ok_or(Error::DbError("Could not add favorite".into()))
    }

    /// Deletes every row for the pair, so duplicates cannot linger.
    pub async fn remove_favorite(db: &Surreal<Any>, user_id: &str, song_id: &str) -> Result<()> {
        db.query("DELETE favorite WHERE user_id = $user AND song_id = $song;")
            .bind(("user", create_user_thing(user_id)))
            .bind(("song", create_song_thing(song_id)))
            .await?
            .check()?;
        Ok(())
    }

    pub async fn is_favorite(db: &Surreal<Any>, user_id: &str, song_id: &str) -> Result<bool> {
        let sql = "
            SELECT count() AS total FROM favorite
            WHERE user_id = $user AND song_id = $song
            GROUP ALL;
        ";

        let mut response = db
            .query(sql)
            .bind(("user", create_user_thing(user_id)))
            .bind(("song", create_song_thing(song_id)))
            .await?;
        let count: Option<CountResult> = response.take(0)?;

        Ok(count.map(|c| c.total).unwrap_or(0) > 0)
    }
}
