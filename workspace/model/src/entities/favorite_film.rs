use super::{film, user};
use crate::association::Association;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::Serialize;
use utoipa::ToSchema;

/// A user's favorite film.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "favorite_film")]
#[schema(as = FavoriteFilm)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub film_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "user::Entity",
        from = "Column::UserId",
        to = "user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "film::Entity",
        from = "Column::FilmId",
        to = "film::Column::Id",
        on_delete = "Cascade"
    )]
    Film,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl Association for Entity {
    type Left = user::Entity;
    type Right = film::Entity;

    fn left_column() -> Column {
        Column::UserId
    }

    fn right_column() -> Column {
        Column::FilmId
    }

    fn right_key() -> film::Column {
        film::Column::Id
    }

    fn pair(left_id: i32, right_id: i32) -> ActiveModel {
        ActiveModel {
            user_id: Set(left_id),
            film_id: Set(right_id),
        }
    }

    fn right_id(model: &Model) -> i32 {
        model.film_id
    }
}

impl ActiveModelBehavior for ActiveModel {}
