use crate::labels::EntityLabels;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "order_comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// stamped once when the comment is inserted, immutable afterwards
    pub date_created: DateTime<Utc>,
    pub content: String,
    pub order_id: i32,
    pub author_id: Option<i32>,
}

impl EntityLabels for Entity {
    const VERBOSE_NAME: &'static str = "Komentaras";
    const VERBOSE_NAME_PLURAL: &'static str = "Komentarai";

    fn column_label(col: Column) -> Option<&'static str> {
        match col {
            Column::DateCreated => Some("Data"),
            Column::Content => Some("Komentaras"),
            Column::AuthorId => Some("Autorius"),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
