use sqlx::FromRow;
use uuid::Uuid;

/// Region row as stored in the `regions` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
}

/// Every column of a region except its id.
///
/// Used as the input to create (the store assigns the id) and as the
/// replacement values on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionValues {
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
}

impl Region {
    /// Build a record from freshly assigned id and values
    pub fn new(id: Uuid, values: RegionValues) -> Self {
        Self {
            id,
            code: values.code,
            name: values.name,
            image_url: values.image_url,
        }
    }

    /// Overwrite every mutable column, keeping the id
    pub fn apply(&mut self, values: RegionValues) {
        self.code = values.code;
        self.name = values.name;
        self.image_url = values.image_url;
    }
}
