use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "planet")]
#[schema(as = Planet)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub diameter: String,
    pub climate: String,
    pub terrain: String,
    pub surface_water: String,
    pub created: String,
    pub edited: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_planet::Entity")]
    FilmPlanet,
}

impl Related<super::film_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmPlanet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
