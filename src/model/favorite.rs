//! DTOs for favorite join records.
//!
//! All five favorite tables serialize to the same shape, so a single
//! `FavoriteDto` covers them; `item_id` is the id of the favorited row in
//! whichever catalog table the route addressed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub item_id: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::planet_favorite::Model> for FavoriteDto {
    fn from(favorite: entity::planet_favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            item_id: favorite.planet_id,
            created_at: favorite.created_at,
        }
    }
}

impl From<entity::specie_favorite::Model> for FavoriteDto {
    fn from(favorite: entity::specie_favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            item_id: favorite.specie_id,
            created_at: favorite.created_at,
        }
    }
}

impl From<entity::vehicle_favorite::Model> for FavoriteDto {
    fn from(favorite: entity::vehicle_favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            item_id: favorite.vehicle_id,
            created_at: favorite.created_at,
        }
    }
}

impl From<entity::starship_favorite::Model> for FavoriteDto {
    fn from(favorite: entity::starship_favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            item_id: favorite.starship_id,
            created_at: favorite.created_at,
        }
    }
}

impl From<entity::person_favorite::Model> for FavoriteDto {
    fn from(favorite: entity::person_favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            item_id: favorite.person_id,
            created_at: favorite.created_at,
        }
    }
}

/// A user's favorites grouped by catalog type.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub planets: Vec<FavoriteDto>,
    pub species: Vec<FavoriteDto>,
    pub vehicles: Vec<FavoriteDto>,
    pub starships: Vec<FavoriteDto>,
    pub people: Vec<FavoriteDto>,
}
