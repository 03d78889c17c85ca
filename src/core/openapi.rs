use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_regions,
        regions_handlers::get_region,
        regions_handlers::create_region,
        regions_handlers::update_region,
        regions_handlers::delete_region,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Regions
            regions_dtos::CreateRegionDto,
            regions_dtos::UpdateRegionDto,
            regions_dtos::RegionResponseDto,
        )
    ),
    tags(
        (name = "regions", description = "New Zealand regions (create, read, update, delete)"),
    ),
    info(
        title = "Walks API",
        version = "0.1.0",
        description = "API documentation for Walks",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
