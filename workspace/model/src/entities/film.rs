use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "film")]
#[schema(as = Film)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub director: String,
    pub created: String,
    pub edited: NaiveDate,
    pub release_date: NaiveDate,
}

/// A film owns every association row pointing at it: favorites, cast,
/// planets and vehicles are all removed with the film.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_film::Entity")]
    FavoriteFilm,
    #[sea_orm(has_many = "super::people_film::Entity")]
    PeopleFilm,
    #[sea_orm(has_many = "super::film_planet::Entity")]
    FilmPlanet,
    #[sea_orm(has_many = "super::film_vehicle::Entity")]
    FilmVehicle,
}

impl Related<super::favorite_film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteFilm.def()
    }
}

impl Related<super::people_film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleFilm.def()
    }
}

impl Related<super::film_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmPlanet.def()
    }
}

impl Related<super::film_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmVehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
