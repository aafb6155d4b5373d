use crate::labels::EntityLabels;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
    /// media key of the profile photo, under the `profile_pics` folder
    #[sea_orm(default_value = "profile_pics/default.jpg")]
    pub photo: String,
    #[sea_orm(unique)]
    pub user_id: i32,
}

impl EntityLabels for Entity {
    const VERBOSE_NAME: &'static str = "Profilis";
    const VERBOSE_NAME_PLURAL: &'static str = "Profiliai";

    fn column_label(col: Column) -> Option<&'static str> {
        match col {
            Column::Photo => Some("Nuotrauka"),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
