use serde::Deserialize;
use surrealdb::{engine::any::Any, sql::Thing, Surreal};

use crate::{helpers::thing_helpers::thing_to_id, Error, Result};

#[derive(Deserialize)]
struct RecordId {
    #[allow(dead_code)]
    id: Thing,
}

#[derive(Deserialize)]
pub struct CountResult {
    pub total: u64,
}

pub async fn record_exists(db: &Surreal<Any>, record: Thing) -> Result<bool> {
    let mut response = db
        .query("SELECT id FROM $record;")
        .bind(("record", record))
        .await?;
    let found: Option<RecordId> = response.take(0)?;
    Ok(found.is_some())
}

/// Stands in for a foreign key: writes that reference a missing row fail the
/// way a relational constraint violation would.
pub async fn ensure_referenced(db: &Surreal<Any>, record: &Thing) -> Result<()> {
    if record_exists(db, record.clone()).await? {
        Ok(())
    } else {
        Err(Error::ReferenceNotFound {
            table: record.tb.clone(),
            id: thing_to_id(record),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{database::test_db, helpers::thing_helpers::create_song_thing};

    #[tokio::test]
    async fn test_record_exists() {
        let db = test_db().await;
        let sql = "
            CREATE song:grace SET
                title = 'Amazing Grace',
                artist = 'John Newton',
                primary_language = 'English';
        ";
        db.query(sql)
            .await
            .unwrap()
            .check()
            .unwrap();

        assert!(record_exists(&db, create_song_thing("grace")).await.unwrap());
        assert!(record_exists(&db, create_song_thing("song:grace")).await.unwrap());
        assert!(!record_exists(&db, create_song_thing("this_id_does_not_exist"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_missing_reference_is_reported() {
        let db = test_db().await;

        let err = ensure_referenced(&db, &create_song_thing("ghost"))
            .await
            .unwrap_err();
        match err {
            Error::ReferenceNotFound { table, id } => {
                assert_eq!(table, "song");
                assert_eq!(id, "ghost");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
