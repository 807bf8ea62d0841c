// SPDX-License-Identifier: MPL-2.0
//! Wire format of a catalog entry and its conversion into a [`Record`].
//!
//! Only the fields the gallery uses are declared; everything else in the
//! payload is ignored. Sprite references are nullable on the wire.

use crate::domain::error::FetchError;
use crate::domain::record::{Ability, BaseStat, Category, Record, RecordId, Vitals};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    id: u32,
    name: String,
    sprites: RawSprites,
    abilities: Vec<RawAbilitySlot>,
    types: Vec<RawTypeSlot>,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    stats: Vec<RawStat>,
}

#[derive(Debug, Deserialize)]
struct RawSprites {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    other: Option<RawOtherSprites>,
}

#[derive(Debug, Deserialize)]
struct RawOtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Deserialize)]
struct RawArtwork {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawNamedRef {
    name: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct RawAbilitySlot {
    ability: RawNamedRef,
}

#[derive(Debug, Deserialize)]
struct RawTypeSlot {
    #[serde(rename = "type")]
    kind: RawNamedRef,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    base_stat: u32,
    stat: RawNamedRef,
}

impl RawSprites {
    /// Official artwork when present and non-empty, else the generic sprite.
    fn primary_image(self) -> Option<String> {
        let artwork = self
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|art| art.front_default)
            .filter(|url| !url.is_empty());
        artwork.or_else(|| self.front_default.filter(|url| !url.is_empty()))
    }
}

impl TryFrom<RawRecord> for Record {
    type Error = FetchError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let id = RecordId::new(raw.id).ok_or_else(|| {
            FetchError::MalformedResponse(format!("invalid identifier {}", raw.id))
        })?;

        let abilities = raw
            .abilities
            .into_iter()
            .map(|slot| Ability::from_source(&slot.ability.name, slot.ability.url))
            .collect();
        let categories = raw
            .types
            .into_iter()
            .map(|slot| Category::from_source(&slot.kind.name, slot.kind.url))
            .collect();
        let vitals = Vitals {
            height: raw.height,
            weight: raw.weight,
            stats: raw
                .stats
                .into_iter()
                .map(|stat| BaseStat::from_source(&stat.stat.name, stat.base_stat))
                .collect(),
        };

        Ok(Record::new(
            id,
            raw.name,
            raw.sprites.primary_image(),
            abilities,
            categories,
        )
        .with_vitals(vitals))
    }
}

/// Decodes a response body into a record.
pub(crate) fn decode(body: &[u8]) -> Result<Record, FetchError> {
    let raw: RawRecord = serde_json::from_slice(body)
        .map_err(|err| FetchError::MalformedResponse(err.to_string()))?;
    Record::try_from(raw)
}
