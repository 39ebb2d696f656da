pub mod activity_controller;
pub mod auth_controller;
pub mod edit_suggestion_controller;
pub mod favorite_controller;
pub mod lyrics_controller;
pub mod song_controller;
