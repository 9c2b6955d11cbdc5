//! Catalog data model and normalization
//!
//! This module holds everything that turns raw storefront text into catalog
//! entries:
//! - `ProductRecord` and its controlled vocabularies
//! - Price text parsing
//! - Language/type inference from product names
//! - Id assignment over the merged catalog

mod classify;
mod merge;
mod price;
mod types;

pub use classify::extract_details_from_name;
pub use merge::assign_ids;
pub use price::parse_price;
pub use types::{Language, Price, ProductRecord, ProductType};
