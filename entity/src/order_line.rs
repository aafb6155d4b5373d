use crate::labels::EntityLabels;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One billable service instance within an order.
///
/// lines are owned by their order and die with it, while `service_id`
/// is nulled out when the referenced service is deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "order_line")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub service_id: Option<i32>,
    pub quantity: i32,
}

impl EntityLabels for Entity {
    const VERBOSE_NAME: &'static str = "Užsakymo eilutė";
    const VERBOSE_NAME_PLURAL: &'static str = "Užsakymo eilutės";

    fn column_label(col: Column) -> Option<&'static str> {
        match col {
            Column::ServiceId => Some("Paslauga"),
            Column::Quantity => Some("Kiekis"),
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
        belongs_to = "super::service::Entity",
        from = "Column::ServiceId",
        to = "super::service::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Service,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
