//! New Zealand regions feature.
//!
//! CRUD over the `regions` table. Handlers translate between the wire DTOs
//! and the stored [`models::Region`] record; persistence goes through the
//! [`repositories::RegionRepository`] trait so the store can be swapped for
//! an in-memory one.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions` | List all regions |
//! | GET | `/api/regions/{id}` | Get region by id |
//! | POST | `/api/regions` | Create a region |
//! | PUT | `/api/regions/{id}` | Replace a region's values |
//! | DELETE | `/api/regions/{id}` | Delete a region |

pub mod dtos;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{InMemoryRegionRepository, PgRegionRepository, RegionRepository};
pub use services::RegionService;
