use super::{film, people};
use crate::association::Association;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::Serialize;
use utoipa::ToSchema;

/// A character appearing in a film.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "peoplefilm")]
#[schema(as = PeopleFilm)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub film_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub people_id: i32,
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
        belongs_to = "people::Entity",
        from = "Column::PeopleId",
        to = "people::Column::Id",
        on_delete = "Cascade"
    )]
    People,
}

impl Related<film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl Related<people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Association for Entity {
    type Left = film::Entity;
    type Right = people::Entity;

    fn left_column() -> Column {
        Column::FilmId
    }

    fn right_column() -> Column {
        Column::PeopleId
    }

    fn right_key() -> people::Column {
        people::Column::Id
    }

    fn pair(left_id: i32, right_id: i32) -> ActiveModel {
        ActiveModel {
            film_id: Set(left_id),
            people_id: Set(right_id),
        }
    }

    fn right_id(model: &Model) -> i32 {
        model.people_id
    }
}

impl ActiveModelBehavior for ActiveModel {}
