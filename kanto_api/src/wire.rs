//! Response bodies of the listing and detail endpoints. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub results: Vec<ItemRef>,
}

/// Lightweight listing entry pointing at a detail resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailBody {
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Option<Sprites>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Sprites {
    /// Official artwork when present, otherwise the default front sprite.
    /// Empty strings count as absent.
    #[must_use]
    pub fn preferred(self) -> Option<String> {
        let artwork = self
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default)
            .filter(|s| !s.is_empty());

        artwork.or_else(|| self.front_default.filter(|s| !s.is_empty()))
    }
}
