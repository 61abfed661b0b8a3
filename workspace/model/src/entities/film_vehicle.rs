use super::{film, vehicle};
use crate::association::Association;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "filmvehicle")]
#[schema(as = FilmVehicle)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub film_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub vehicle_id: i32,
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
        belongs_to = "vehicle::Entity",
        from = "Column::VehicleId",
        to = "vehicle::Column::Id",
        on_delete = "Cascade"
    )]
    Vehicle,
}

impl Related<film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl Related<vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Association for Entity {
    type Left = film::Entity;
    type Right = vehicle::Entity;

    fn left_column() -> Column {
        Column::FilmId
    }

    fn right_column() -> Column {
        Column::VehicleId
    }

    fn right_key() -> vehicle::Column {
        vehicle::Column::Id
    }

    fn pair(left_id: i32, right_id: i32) -> ActiveModel {
        ActiveModel {
            film_id: Set(left_id),
            vehicle_id: Set(right_id),
        }
    }

    fn right_id(model: &Model) -> i32 {
        model.vehicle_id
    }
}

impl ActiveModelBehavior for ActiveModel {}
