use serde::{Deserialize, Serialize};

/// An amenity offered by a hotel (e.g. `POOL`, `GYM`).
///
/// Compared by exact value; no case folding or trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Facility(String);

impl Facility {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Facility {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Facility {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Facility {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
