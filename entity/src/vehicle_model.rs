use crate::labels::EntityLabels;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "vehicle_model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub make: String,
    pub model: String,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.make, self.model)
    }
}

impl EntityLabels for Entity {
    const VERBOSE_NAME: &'static str = "Automobilio modelis";
    const VERBOSE_NAME_PLURAL: &'static str = "Automobilio modeliai";

    fn column_label(col: Column) -> Option<&'static str> {
        match col {
            Column::Make => Some("Gamintojas"),
            Column::Model => Some("Modelis"),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicle,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
