use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateVehicleDto {
    #[validate(length(min = 1, max = 6))]
    pub plate: String,

    #[validate(length(min = 1, max = 17))]
    pub vin: String,

    #[validate(length(min = 1, max = 50))]
    pub owner_name: String,

    pub description: Option<String>,

    pub owner_id: Option<i32>,

    pub vehicle_model_id: Option<i32>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateVehicleDto {
    #[validate(length(min = 1, max = 6))]
    pub plate: Option<String>,

    #[validate(length(min = 1, max = 17))]
    pub vin: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub owner_name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub owner_id: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub vehicle_model_id: Option<Option<i32>>,
}

#[derive(Deserialize)]
pub struct ListVehiclesDto {
    /// Search by plate
    pub plate: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_and_vin_caps_are_enforced() {
        let dto = CreateVehicleDto {
            plate: String::from("ABC123"),
            vin: String::from("WVWZZZ1JZXW000001"),
            owner_name: String::from("Jonas Jonaitis"),
            description: None,
            owner_id: None,
            vehicle_model_id: None,
        };
        assert!(dto.validate().is_ok());

        let too_long_plate = CreateVehicleDto {
            plate: String::from("ABC1234"),
            ..dto
        };
        assert!(too_long_plate.validate().is_err());
    }
}
