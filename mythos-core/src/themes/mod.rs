//! The thematic skins of the catalog, expressed as data over the shared
//! engine: each theme declares its closed tag and kind enums and a curated
//! seed roster.

pub mod hellas;
pub mod kemet;
