use uuid::{uuid, Uuid};

use crate::features::regions::models::Region;

/// Seed regions, matching `migrations/*_seed_lookup_data.sql`.
///
/// Loaded into the in-memory store at startup so both backends start out
/// with the same rows.
const SEED_REGIONS: [(Uuid, &str, &str, Option<&str>); 6] = [
    (
        uuid!("f7248fc3-2585-4efb-8d1d-1c555f4087f6"),
        "AKL",
        "Auckland",
        Some("https://images.pexels.com/photos/5169056/pexels-photo-5169056.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"),
    ),
    (
        uuid!("6884f7d7-ad1f-4101-8df3-7a6fa7387d81"),
        "NTL",
        "Northland",
        None,
    ),
    (
        uuid!("14ceba71-4b51-4777-9b17-46602cf66153"),
        "BOP",
        "Bay Of Plenty",
        None,
    ),
    (
        uuid!("cfa06ed2-bf65-4b65-93ed-c9d286ddb0de"),
        "WGN",
        "Wellington",
        Some("https://images.pexels.com/photos/4350631/pexels-photo-4350631.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"),
    ),
    (
        uuid!("906cb139-415a-4bbb-a174-1a1faf9fb1f6"),
        "NSN",
        "Nelson",
        Some("https://images.pexels.com/photos/13918194/pexels-photo-13918194.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"),
    ),
    (
        uuid!("f077a22e-4248-4bf6-b564-c7cf4e250263"),
        "STL",
        "Southland",
        None,
    ),
];

pub fn seed_regions() -> Vec<Region> {
    SEED_REGIONS
        .iter()
        .map(|(id, code, name, image_url)| Region {
            id: *id,
            code: code.to_string(),
            name: name.to_string(),
            image_url: image_url.map(str::to_string),
        })
        .collect()
}
