//! Region - A place in the world where heroes roam
//!
//! Region is an Entity. Its name is unique across the atlas; the store
//! enforces that, not this type.

/// Unique identifier for a Region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u64);

impl RegionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for RegionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Region {
    id: RegionId,
    name: String,
    /// Free-form biome tag ("forest", "volcanic", ...)
    environment_type: String,
}

impl Region {
    pub fn new(id: RegionId, name: impl Into<String>, environment_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            environment_type: environment_type.into(),
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn environment_type(&self) -> &str {
        &self.environment_type
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Region {}
