pub mod activity_service;
pub mod edit_suggestion_service;
pub mod favorite_service;
pub mod lyrics_service;
pub mod song_service;
pub mod user_service;
