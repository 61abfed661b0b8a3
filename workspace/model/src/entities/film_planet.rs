use super::{film, planet};
use crate::association::Association;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "filmplanet")]
#[schema(as = FilmPlanet)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub film_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub planet_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "film::Entity",
        from = "Column::FilmId",
        to = "film::Column::Id",
        on_delete = "Cascade"
    )]
    Film,
    #[sea_orm(
        belongs_to = "planet::Entity",
        from = "Column::PlanetId",
        to = "planet::Column::Id",
        on_delete = "Cascade"
    )]
    Planet,
}

impl Related<film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl Related<planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Association for Entity {
    type Left = film::Entity;
    type Right = planet::Entity;

    fn left_column() -> Column {
        Column::FilmId
    }

    fn right_column() -> Column {
        Column::PlanetId
    }

    fn right_key() -> planet::Column {
        planet::Column::Id
    }

    fn pair(left_id: i32, right_id: i32) -> ActiveModel {
        ActiveModel {
            film_id: Set(left_id),
            planet_id: Set(right_id),
        }
    }

    fn right_id(model: &Model) -> i32 {
        model.planet_id
    }
}

impl ActiveModelBehavior for ActiveModel {}
