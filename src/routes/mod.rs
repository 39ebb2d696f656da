pub mod activity_routes;
pub mod auth_routes;
pub mod edit_suggestion_routes;
pub mod favorite_routes;
pub mod song_routes;
