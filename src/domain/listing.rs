use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Paginated collections exposed by the inventory backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingResource {
    Artworks,
    Orders,
    Artists,
}

impl ListingResource {
    /// Path segment of the collection on the backend.
    pub const fn path(self) -> &'static str {
        match self {
            ListingResource::Artworks => "artworks",
            ListingResource::Orders => "orders",
            ListingResource::Artists => "artists",
        }
    }
}

impl Display for ListingResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ListingResource {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artworks" => Ok(ListingResource::Artworks),
            "orders" => Ok(ListingResource::Orders),
            "artists" => Ok(ListingResource::Artists),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown listing resource `{other}`"
            ))),
        }
    }
}
