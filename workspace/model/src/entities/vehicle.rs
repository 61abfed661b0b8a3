use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "vehicle")]
#[schema(as = Vehicle)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub vehicles_class: String,
    pub created: String,
    pub edited: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_vehicle::Entity")]
    FilmVehicle,
}

impl Related<super::film_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmVehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
