use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateServiceDto {
    #[validate(length(min = 1, max = 50))]
    pub name: String,

    /// price in whole currency units, negative prices are not rejected
    /// here since the legacy data never promised it
    pub price: i32,
}

#[derive(Deserialize, Validate)]
pub struct UpdateServiceDto {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    pub price: Option<i32>,
}

#[derive(Deserialize)]
pub struct ListServicesDto {
    /// Search by name
    pub name: Option<String>,
}
