//! A001 Artwork — records of the museum collection API

pub mod aggregate;
pub mod response;

pub use aggregate::{Artwork, ArtworkId};
pub use response::{decode_artwork_page, CollectionResponse, Pagination};
