pub mod add_favorite;
pub mod get_user_favorites;
pub mod remove_favorite;
