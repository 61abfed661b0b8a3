use super::{people, user};
use crate::association::Association;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::Serialize;
use utoipa::ToSchema;

/// A user's favorite character.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "people_favorite")]
#[schema(as = PeopleFavorite)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub people_id: i32,
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
        belongs_to = "people::Entity",
        from = "Column::PeopleId",
        to = "people::Column::Id",
        on_delete = "Cascade"
    )]
    People,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Association for Entity {
    type Left = user::Entity;
    type Right = people::Entity;

    fn left_column() -> Column {
        Column::UserId
    }

    fn right_column() -> Column {
        Column::PeopleId
    }

    fn right_key() -> people::Column {
        people::Column::Id
    }

    fn pair(left_id: i32, right_id: i32) -> ActiveModel {
        ActiveModel {
            user_id: Set(left_id),
            people_id: Set(right_id),
        }
    }

    fn right_id(model: &Model) -> i32 {
        model.people_id
    }
}

impl ActiveModelBehavior for ActiveModel {}
