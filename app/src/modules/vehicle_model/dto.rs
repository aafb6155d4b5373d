use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateVehicleModelDto {
    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,
}

#[derive(Deserialize, Validate)]
pub struct UpdateVehicleModelDto {
    #[validate(length(min = 1, max = 50))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub model: Option<String>,
}
