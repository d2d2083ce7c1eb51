use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct RegionDto {
    pub id: i32,
    pub province: String,
    pub city: Option<String>,
    /// Display name, e.g. `Seoul Jongno-gu`
    pub full_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct CrimeTypeDto {
    pub id: i32,
    /// Major category, e.g. `Theft`
    pub major: String,
    /// Optional minor category within the major category
    pub minor: Option<String>,
}

impl From<entity::region::Model> for RegionDto {
    fn from(region: entity::region::Model) -> Self {
        Self {
            id: region.id,
            province: region.province,
            city: region.city,
            full_name: region.full_name,
        }
    }
}

impl From<entity::crime_type::Model> for CrimeTypeDto {
    fn from(crime_type: entity::crime_type::Model) -> Self {
        Self {
            id: crime_type.id,
            major: crime_type.major,
            minor: crime_type.minor,
        }
    }
}
