use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::paged_grid::GridRecord;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of an artwork in the remote collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl ArtworkId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// One artwork as returned by the collection endpoint.
///
/// Only `id` takes part in selection; every other field is display-only.
/// The API returns `null` for missing text and dates, hence the options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Bare record with only an id and a title
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ArtworkId::new(id),
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Field names requested from the API, in column order
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "place_of_origin",
        "artist_display",
        "inscriptions",
        "date_start",
        "date_end",
    ];
}

impl GridRecord for Artwork {
    type Id = ArtworkId;

    fn record_id(&self) -> ArtworkId {
        self.id
    }
}
