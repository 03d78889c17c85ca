mod region;

pub use region::{Region, RegionValues};
