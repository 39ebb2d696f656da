use futures::try_join;
use serde::de::DeserializeOwned;
use surrealdb::{engine::any::Any, Surreal};

use crate::{
    error::Result,
    models::activity::{ActivityItem, LyricsActivity, SongActivity, SuggestionActivity},
};

pub struct ActivityService;

impl ActivityService {
    /// Newest songs, lyrics and suggestions, each limited on its own, then
    /// merged and cut to `limit`. Not a true global top-N: a category can be
    /// truncated before the merge sees it.
    pub async fn get_recent_activity(db: &Surreal<Any>, limit: u32) -> Result<Vec<ActivityItem>> {
        let (songs, lyrics, suggestions) = try_join!(
            Self::recent::<SongActivity>(
                db,
                "SELECT id, title, artist, created_at, created_by FROM song",
                limit,
            ),
            Self::recent::<LyricsActivity>(
                db,
                "SELECT id, song_id, language, created_at, contributor_id FROM song_lyrics",
                limit,
            ),
            Self::recent::<SuggestionActivity>(
                db,
                "SELECT id, song_id, status, created_at, suggested_by FROM edit_suggestion",
                limit,
            ),
        )?;

        let mut activity: Vec<ActivityItem> = songs
            .into_iter()
            .map(ActivityItem::Song)
            .chain(lyrics.into_iter().map(ActivityItem::Lyrics))
            .chain(suggestions.into_iter().map(ActivityItem::Suggestion))
            .collect();

        activity.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        activity.truncate(limit as usize);

        Ok(activity)
    }

    async fn recent<T: DeserializeOwned + Send>(
        db: &Surreal<Any>,
        select: &str,
        limit: u32,
    ) -> Result<Vec<T>> {
        let sql = format!("{} ORDER BY created_at DESC LIMIT {};", select, limit);
        let mut response = db.query(sql).await?;
        let rows: Vec<T> = response.take(0)?;
        Ok(rows)
    }
}
