use crate::labels::EntityLabels;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub name: String,
    /// price in whole currency units, no rounding or locale logic
    pub price: i32,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl EntityLabels for Entity {
    const VERBOSE_NAME: &'static str = "Paslauga";
    const VERBOSE_NAME_PLURAL: &'static str = "Paslaugos";

    fn column_label(col: Column) -> Option<&'static str> {
        match col {
            Column::Name => Some("Pavadinimas"),
            Column::Price => Some("Kaina"),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLine,
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
