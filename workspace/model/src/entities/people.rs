use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A character of the catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "people")]
#[schema(as = People)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub specie: String,
    /// Free-form creation timestamp, stored as text.
    pub created: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people_favorite::Entity")]
    PeopleFavorite,
    #[sea_orm(has_many = "super::people_film::Entity")]
    PeopleFilm,
}

impl Related<super::people_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleFavorite.def()
    }
}

impl Related<super::people_film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleFilm.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
