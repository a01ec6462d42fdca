//! Listing reference + detail body → [`Entity`]. No I/O happens here.

use kanto_core::error::Result;
use kanto_core::{Entity, LoadError};
use url::Url;

use crate::wire::{DetailBody, ItemRef, Sprites};

pub fn assemble(item: &ItemRef, detail: DetailBody) -> Result<Entity> {
    let id = id_from_url(&item.url)?;

    if item.name.is_empty() {
        return Err(LoadError::parse(format!("entry {id} has an empty name")));
    }

    let types: Vec<String> = detail.types.into_iter().map(|t| t.kind.name).collect();
    if types.is_empty() {
        return Err(LoadError::parse(format!("entry {id} has no types")));
    }

    let image = detail.sprites.and_then(Sprites::preferred);

    Ok(Entity {
        id,
        name: item.name.clone(),
        types,
        image,
    })
}

/// Numeric id from the last non-empty path segment of a detail locator,
/// e.g. `https://pokeapi.co/api/v2/pokemon/4/` → 4.
pub fn id_from_url(locator: &str) -> Result<u32> {
    let url = Url::parse(locator)
        .map_err(|e| LoadError::parse(format!("invalid detail url {locator}: {e}")))?;

    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .ok_or_else(|| LoadError::parse(format!("detail url {locator} has no path")))?;

    match segment.parse::<u32>() {
        Ok(0) | Err(_) => Err(LoadError::parse(format!(
            "detail url {locator} does not end in a positive id"
        ))),
        Ok(id) => Ok(id),
    }
}
