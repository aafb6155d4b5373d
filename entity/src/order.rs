use crate::labels::EntityLabels;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// stamped once when the order is inserted, immutable afterwards
    pub date: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: OrderStatus,
    pub vehicle_id: Option<i32>,
    pub client_id: Option<i32>,
}

/// Order workflow status, stored as the legacy one letter codes.
///
/// a status is a plain label: any value may replace any other, transition
/// policy is up to the caller.
#[derive(
    Eq,
    Copy,
    Clone,
    Debug,
    Display,
    Default,
    EnumIter,
    Serialize,
    PartialEq,
    Deserialize,
    DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(1))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "p")]
    Confirmed,
    #[sea_orm(string_value = "v")]
    InProgress,
    #[sea_orm(string_value = "a")]
    Cancelled,
    #[default]
    #[sea_orm(string_value = "t")]
    Confirming,
    #[sea_orm(string_value = "i")]
    Completed,
}

impl OrderStatus {
    /// Lithuanian label shown on the shop UI, verbatim
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Patvirtinta",
            Self::InProgress => "Vykdoma",
            Self::Cancelled => "Atšaukta",
            Self::Confirming => "Tvirtinama",
            Self::Completed => "Įvykdyta",
        }
    }
}

impl Model {
    /// `true` if the order has a deadline and the current time is past it
    ///
    /// all timestamps are UTC, so no time zone normalization is needed here
    pub fn deadline_overdue(&self) -> bool {
        match self.deadline {
            Some(deadline) => Utc::now() > deadline,
            None => false,
        }
    }
}

impl EntityLabels for Entity {
    const VERBOSE_NAME: &'static str = "Užsakymas";
    const VERBOSE_NAME_PLURAL: &'static str = "Užsakymai";

    fn column_label(col: Column) -> Option<&'static str> {
        match col {
            Column::Date => Some("Data"),
            Column::Deadline => Some("Terminas"),
            Column::Status => Some("Būsena"),
            Column::VehicleId => Some("Automobilis"),
            Column::ClientId => Some("Klientas"),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Vehicle,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ClientId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLine,
    #[sea_orm(has_many = "super::order_comment::Entity")]
    OrderComment,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLine.def()
    }
}

impl Related<super::order_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderComment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sea_orm::ActiveEnum;

    fn order(deadline: Option<DateTime<Utc>>) -> Model {
        Model {
            id: 1,
            date: Utc::now(),
            deadline,
            status: OrderStatus::default(),
            vehicle_id: None,
            client_id: None,
        }
    }

    #[test]
    fn no_deadline_is_never_overdue() {
        assert!(!order(None).deadline_overdue());
    }

    #[test]
    fn deadline_one_second_in_the_past_is_overdue() {
        let o = order(Some(Utc::now() - Duration::seconds(1)));
        assert!(o.deadline_overdue());
    }

    #[test]
    fn deadline_one_second_in_the_future_is_not_overdue() {
        let o = order(Some(Utc::now() + Duration::seconds(1)));
        assert!(!o.deadline_overdue());
    }

    #[test]
    fn status_defaults_to_confirming() {
        assert_eq!(OrderStatus::default(), OrderStatus::Confirming);
    }

    #[test]
    fn status_keeps_the_legacy_storage_codes() {
        let codes = [
            (OrderStatus::Confirmed, "p", "Patvirtinta"),
            (OrderStatus::InProgress, "v", "Vykdoma"),
            (OrderStatus::Cancelled, "a", "Atšaukta"),
            (OrderStatus::Confirming, "t", "Tvirtinama"),
            (OrderStatus::Completed, "i", "Įvykdyta"),
        ];

        for (status, code, label) in codes {
            assert_eq!(status.to_value(), code);
            assert_eq!(status.label(), label);
        }
    }
}
