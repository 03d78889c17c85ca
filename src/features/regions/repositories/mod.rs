mod in_memory_region_repository;
mod pg_region_repository;
mod region_repository;

pub use in_memory_region_repository::InMemoryRegionRepository;
pub use pg_region_repository::PgRegionRepository;
pub use region_repository::RegionRepository;
