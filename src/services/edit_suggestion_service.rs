use surrealdb::{engine::any::Any, Surreal};

use crate::{
    error::{Error, Result},
    helpers::{
        record_helpers::{ensure_referenced, record_exists},
        thing_helpers::{
            create_edit_suggestion_thing, create_user_thing, thing_to_id, EDIT_SUGGESTION_TABLE,
        },
    },
    models::{
        edit_suggestion::{
            EditSuggestion, NewEditSuggestion, PendingEditSuggestion, SuggestionStatus,
        },
        lyrics::LyricsChanges,
    },
    services::lyrics_service::LyricsService,
};

pub struct EditSuggestionService;

impl EditSuggestionService {
    pub async fn get_edit_suggestions(
        db: &Surreal<Any>,
        status: Option<SuggestionStatus>,
    ) -> Result<Vec<EditSuggestion>> {
        let mut response = match status {
            Some(status) => {
                let sql = "
                    SELECT * FROM edit_suggestion
                    WHERE status = $status
                    ORDER BY created_at DESC;
                ";
                db.query(sql).bind(("status", status)).await?
            }
            None => {
                db.query("SELECT * FROM edit_suggestion ORDER BY created_at DESC;")
                    .await?
            }
        };

        let suggestions: Vec<EditSuggestion> = response.take(0)?;
        Ok(suggestions)
    }

    pub async fn create_edit_suggestion(
        db: &Surreal<Any>,
        suggestion: NewEditSuggestion,
    ) -> Result<EditSuggestion> {
        ensure_referenced(db, &suggestion.song_id).await?;
        if let Some(lyrics_id) = &suggestion.lyrics_id {
            ensure_referenced(db, lyrics_id).await?;
        }

        db.create(EDIT_SUGGESTION_TABLE)
            .content(PendingEditSuggestion::from(suggestion))
            .await?
            .ok_or(Error::DbError("Could not create edit suggestion".into()))
    }

    /// Moves a pending suggestion to `approved` or `rejected`. Reviewed rows
    /// are never touched again. Approval copies the suggested text into the
    /// linked lyrics as a separate write.
    pub async fn update_edit_suggestion_status(
        db: &Surreal<Any>,
        suggestion_id: &str,
        status: SuggestionStatus,
        reviewer_id: &str,
    ) -> Result<EditSuggestion> {
        if !status.is_review_outcome() {
            return Err(Error::InvalidSuggestionStatus {
                status: status.as_ref().to_string(),
            });
        }

        let suggestion_thing = create_edit_suggestion_thing(suggestion_id);

        let sql = "
            UPDATE $suggestion SET
                status = $status,
                reviewed_by = $reviewer,
                updated_at = time::now()
            WHERE status = 'pending';
        ";

        let mut response = db
            .query(sql)
            .bind(("suggestion", suggestion_thing.clone()))
            .bind(("status", status))
            .bind(("reviewer", create_user_thing(reviewer_id)))
            .await?;
        let updated: Option<EditSuggestion> = response.take(0)?;

        let Some(updated) = updated else {
            return if record_exists(db, suggestion_thing).await? {
                Err(Error::SuggestionAlreadyReviewed {
                    id: suggestion_id.to_string(),
                })
            } else {
                Err(Error::EditSuggestionNotFound {
                    id: suggestion_id.to_string(),
                })
            };
        };

        if status == SuggestionStatus::Approved {
            if let Some(lyrics_id) = &updated.lyrics_id {
                let changes = LyricsChanges {
                    content: Some(updated.suggested_content.clone()),
                    ..Default::default()
                };
                let applied =
                    LyricsService::update_song_lyrics(db, &thing_to_id(lyrics_id), changes).await?;
                if applied.is_none() {
                    tracing::warn!(
                        "approved suggestion {} points at missing lyrics {}",
                        suggestion_id,
                        lyrics_id
                    );
                }
            }
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        database::test_db,
        models::{lyrics::NewSongLyrics, song::Song},
        services::song_service::{tests::new_song, SongService},
    };

    async fn seeded() -> (Surreal<Any>, Song, String) {
        let db = test_db().await;
        let song =
            SongService::create_song(&db, new_song("Holy, Holy, Holy", "Reginald Heber", &[]))
                .await
                .unwrap();
        let lyrics = LyricsService::create_song_lyrics(
            &db,
            NewSongLyrics {
                song_id: song.id.clone(),
                language: "English".to_string(),
                content: "Holy, holy, holy! Lord God Almighty".to_string(),
                is_original: true,
                contributor_id: None,
            },
        )
        .await
        .unwrap();
        (db, song, thing_to_id(&lyrics.id))
    }

    fn suggestion(song: &Song, lyrics_id: Option<&str>, content: &str) -> NewEditSuggestion {
        NewEditSuggestion {
            song_id: song.id.clone(),
            lyrics_id: lyrics_id.map(crate::helpers::thing_helpers::create_lyrics_thing),
            suggested_content: content.to_string(),
            reason: Some("typo".to_string()),
            suggested_by: create_user_thing("suggester"),
        }
    }

    #[tokio::test]
    async fn test_new_suggestion_is_pending() {
        let (db, song, lyrics_id) = seeded().await;

        let created = EditSuggestionService::create_edit_suggestion(
            &db,
            suggestion(&song, Some(&lyrics_id), "Holy, holy, holy! Lord God Almighty!"),
        )
        .await
        .unwrap();

        assert_eq!(created.status, SuggestionStatus::Pending);
        assert!(created.reviewed_by.is_none());
        assert_eq!(created.reason.as_deref(), Some("typo"));
    }

    #[tokio::test]
    async fn test_filter_by_status() {
        let (db, song, _) = seeded().await;

        let first =
            EditSuggestionService::create_edit_suggestion(&db, suggestion(&song, None, "one"))
                .await
                .unwrap();
        EditSuggestionService::create_edit_suggestion(&db, suggestion(&song, None, "two"))
            .await
            .unwrap();
        EditSuggestionService::update_edit_suggestion_status(
            &db,
            &thing_to_id(&first.id),
            SuggestionStatus::Rejected,
            "reviewer",
        )
        .await
        .unwrap();

        let all = EditSuggestionService::get_edit_suggestions(&db, None)
            .await
            .unwrap();
        let contents: Vec<&str> = all.iter().map(|s| s.suggested_content.as_str()).collect();
        assert_eq!(contents, vec!["two", "one"]);

        let pending =
            EditSuggestionService::get_edit_suggestions(&db, Some(SuggestionStatus::Pending))
                .await
                .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].suggested_content, "two");

        let rejected =
            EditSuggestionService::get_edit_suggestions(&db, Some(SuggestionStatus::Rejected))
                .await
                .unwrap();
        assert_eq!(rejected.len(), 1);
        assert_eq!(
            rejected[0].reviewed_by.as_ref().map(thing_to_id).as_deref(),
            Some("reviewer")
        );
    }

    #[tokio::test]
    async fn test_pending_is_not_a_review_outcome() {
        let (db, song, _) = seeded().await;
        let created =
            EditSuggestionService::create_edit_suggestion(&db, suggestion(&song, None, "text"))
                .await
                .unwrap();
        let id = thing_to_id(&created.id);

        let err = EditSuggestionService::update_edit_suggestion_status(
            &db,
            &id,
            SuggestionStatus::Pending,
            "reviewer",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSuggestionStatus { .. }));

        let unchanged = EditSuggestionService::get_edit_suggestions(&db, None)
            .await
            .unwrap();
        assert_eq!(unchanged[0].status, SuggestionStatus::Pending);
        assert!(unchanged[0].reviewed_by.is_none());
        assert_eq!(unchanged[0].updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_review_happens_once() {
        let (db, song, _) = seeded().await;
        let created =
            EditSuggestionService::create_edit_suggestion(&db, suggestion(&song, None, "text"))
                .await
                .unwrap();
        let id = thing_to_id(&created.id);

        EditSuggestionService::update_edit_suggestion_status(
            &db,
            &id,
            SuggestionStatus::Rejected,
            "r1",
        )
        .await
        .unwrap();

        let err = EditSuggestionService::update_edit_suggestion_status(
            &db,
            &id,
            SuggestionStatus::Approved,
            "r2",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::SuggestionAlreadyReviewed { .. }));

        let missing = EditSuggestionService::update_edit_suggestion_status(
            &db,
            "ghost",
            SuggestionStatus::Approved,
            "r2",
        )
        .await
        .unwrap_err();
        assert!(matches!(missing, Error::EditSuggestionNotFound { .. }));
    }

    #[tokio::test]
    async fn test_approval_applies_content() {
        let (db, song, lyrics_id) = seeded().await;
        let created = EditSuggestionService::create_edit_suggestion(
            &db,
            suggestion(&song, Some(&lyrics_id), "Holy, holy, holy! Lord God Almighty!"),
        )
        .await
        .unwrap();

        let approved = EditSuggestionService::update_edit_suggestion_status(
            &db,
            &thing_to_id(&created.id),
            SuggestionStatus::Approved,
            "reviewer",
        )
        .await
        .unwrap();
        assert_eq!(approved.status, SuggestionStatus::Approved);

        let lyrics = LyricsService::get_song_lyrics(&db, &thing_to_id(&song.id))
            .await
            .unwrap();
        assert_eq!(lyrics[0].content, "Holy, holy, holy! Lord God Almighty!");
    }
}
