use chrono::{DateTime, Utc};
use entity::order::OrderStatus;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize)]
pub struct CreateOrderDto {
    pub vehicle_id: Option<i32>,

    pub client_id: Option<i32>,

    pub deadline: Option<DateTime<Utc>>,

    /// defaults to `OrderStatus::Confirming` when omitted
    pub status: Option<OrderStatus>,
}

#[derive(Deserialize)]
pub struct UpdateOrderDto {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub deadline: Option<Option<DateTime<Utc>>>,

    pub status: Option<OrderStatus>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub vehicle_id: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub client_id: Option<Option<i32>>,
}

#[derive(Deserialize)]
pub struct ListOrdersDto {
    /// Filter by status code
    pub status: Option<OrderStatus>,

    /// Filter by vehicle
    pub vehicle_id: Option<i32>,
}

#[derive(Deserialize, Validate)]
pub struct CreateOrderLineDto {
    pub service_id: i32,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Deserialize, Validate)]
pub struct CreateOrderCommentDto {
    #[validate(length(min = 1, max = 5000))]
    pub content: String,

    pub author_id: Option<i32>,
}
