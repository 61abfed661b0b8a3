use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A registered user of the catalog.
///
/// Serialization never includes `password`, which holds an Argon2 PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "user")]
#[schema(as = User)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    #[schema(write_only)]
    pub password: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people_favorite::Entity")]
    PeopleFavorite,
    #[sea_orm(has_many = "super::favorite_film::Entity")]
    FavoriteFilm,
}

impl Related<super::people_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleFavorite.def()
    }
}

impl Related<super::favorite_film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteFilm.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
