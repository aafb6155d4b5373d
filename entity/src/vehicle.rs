use crate::labels::EntityLabels;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub plate: String,
    pub vin: String,
    /// free text owner name, kept even when `owner_id` links a registered user
    pub owner_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// media key of the vehicle photo, under the `vehicles` folder
    pub photo: Option<String>,
    pub owner_id: Option<i32>,
    pub vehicle_model_id: Option<i32>,
}

impl EntityLabels for Entity {
    const VERBOSE_NAME: &'static str = "Automobilis";
    const VERBOSE_NAME_PLURAL: &'static str = "Automobiliai";

    fn column_label(col: Column) -> Option<&'static str> {
        match col {
            Column::Plate => Some("Valstybinis numeris"),
            Column::Vin => Some("VIN kodas"),
            Column::OwnerName | Column::OwnerId => Some("Savininkas"),
            Column::Description => Some("Aprašymas"),
            Column::Photo => Some("Nuotrauka"),
            Column::VehicleModelId => Some("Automobilio modelis"),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::vehicle_model::Entity",
        from = "Column::VehicleModelId",
        to = "super::vehicle_model::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    VehicleModel,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::vehicle_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleModel.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
