use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::regions::models::{Region, RegionValues};
use crate::shared::validation::{NOT_BLANK_REGEX, REGION_CODE_REGEX};

/// Request body for creating a region
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionDto {
    #[schema(example = "AKL")]
    #[validate(
        length(min = 1, max = 10, message = "code must be between 1 and 10 characters"),
        regex(path = *REGION_CODE_REGEX, message = "code must contain only letters and digits")
    )]
    pub code: String,

    #[schema(example = "Auckland")]
    #[validate(
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters"),
        regex(path = *NOT_BLANK_REGEX, message = "name must not be blank")
    )]
    pub name: String,

    #[schema(example = "https://images.pexels.com/photos/5169056/pexels-photo-5169056.jpeg")]
    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Request body for replacing a region's values
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionDto {
    #[schema(example = "WGN")]
    #[validate(
        length(min = 1, max = 10, message = "code must be between 1 and 10 characters"),
        regex(path = *REGION_CODE_REGEX, message = "code must contain only letters and digits")
    )]
    pub code: String,

    #[schema(example = "Wellington")]
    #[validate(
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters"),
        regex(path = *NOT_BLANK_REGEX, message = "name must not be blank")
    )]
    pub name: String,

    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Response DTO for region data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            image_url: region.image_url,
        }
    }
}

impl From<CreateRegionDto> for RegionValues {
    fn from(dto: CreateRegionDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            image_url: dto.image_url,
        }
    }
}

impl From<UpdateRegionDto> for RegionValues {
    fn from(dto: UpdateRegionDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            image_url: dto.image_url,
        }
    }
}
