use surrealdb::{
    engine::any::{self, Any},
    opt::auth::Root,
    Surreal,
};

use crate::{config::DbConfig, Result};

const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
    DEFINE FIELD IF NOT EXISTS created_at ON user TYPE datetime DEFAULT time::now();
    DEFINE FIELD IF NOT EXISTS updated_at ON user TYPE datetime DEFAULT time::now();

    DEFINE TABLE IF NOT EXISTS song SCHEMALESS;
    DEFINE FIELD IF NOT EXISTS title ON song TYPE string;
    DEFINE FIELD IF NOT EXISTS artist ON song TYPE string;
    DEFINE FIELD IF NOT EXISTS primary_language ON song TYPE string;
    DEFINE FIELD IF NOT EXISTS tags ON song TYPE array<string> DEFAULT [];
    DEFINE FIELD IF NOT EXISTS view_count ON song TYPE int DEFAULT 0 ASSERT $value >= 0;
    DEFINE FIELD IF NOT EXISTS created_at ON song TYPE datetime DEFAULT time::now();
    DEFINE FIELD IF NOT EXISTS updated_at ON song TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS song_created_at ON song FIELDS created_at;
    DEFINE INDEX IF NOT EXISTS song_view_count ON song FIELDS view_count;

    DEFINE TABLE IF NOT EXISTS song_lyrics SCHEMALESS;
    DEFINE FIELD IF NOT EXISTS song_id ON song_lyrics TYPE record<song>;
    DEFINE FIELD IF NOT EXISTS language ON song_lyrics TYPE string;
    DEFINE FIELD IF NOT EXISTS content ON song_lyrics TYPE string;
    DEFINE FIELD IF NOT EXISTS is_original ON song_lyrics TYPE bool DEFAULT false;
    DEFINE FIELD IF NOT EXISTS created_at ON song_lyrics TYPE datetime DEFAULT time::now();
    DEFINE FIELD IF NOT EXISTS updated_at ON song_lyrics TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS song_lyrics_song ON song_lyrics FIELDS song_id;

    DEFINE TABLE IF NOT EXISTS favorite SCHEMALESS;
    DEFINE FIELD IF NOT EXISTS user_id ON favorite TYPE record<user>;
    DEFINE FIELD IF NOT EXISTS song_id ON favorite TYPE record<song>;
    DEFINE FIELD IF NOT EXISTS created_at ON favorite TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS favorite_user_song ON favorite FIELDS user_id, song_id;

    DEFINE TABLE IF NOT EXISTS edit_suggestion SCHEMALESS;
    DEFINE FIELD IF NOT EXISTS song_id ON edit_suggestion TYPE record<song>;
    DEFINE FIELD IF NOT EXISTS suggested_content ON edit_suggestion TYPE string;
    DEFINE FIELD IF NOT EXISTS status ON edit_suggestion TYPE string DEFAULT 'pending'
        ASSERT $value IN ['pending', 'approved', 'rejected'];
    DEFINE FIELD IF NOT EXISTS suggested_by ON edit_suggestion TYPE record<user>;
    DEFINE FIELD IF NOT EXISTS created_at ON edit_suggestion TYPE datetime DEFAULT time::now();
    DEFINE FIELD IF NOT EXISTS updated_at ON edit_suggestion TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS edit_suggestion_status ON edit_suggestion FIELDS status;
"#;

/// Opens the store and selects namespace/database. Root sign-in only happens
/// when credentials are configured; embedded engines run without them.
pub async fn connect(config: &DbConfig) -> Result<Surreal<Any>> {
    tracing::info!("Connecting to database at: {}", config.url);

    let db = any::connect(&config.url).await?;

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        db.signin(Root { username, password }).await?;
    }

    db.use_ns(&config.namespace).use_db(&config.database).await?;

    Ok(db)
}

pub async fn define_schema(db: &Surreal<Any>) -> Result<()> {
    db.query(SCHEMA).await?.check()?;
    tracing::info!("Database schema applied");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_db() -> Surreal<Any> {
    let db = any::connect("mem://").await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    define_schema(&db).await.unwrap();
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let db = test_db().await;
        define_schema(&db).await.unwrap();
    }
}
