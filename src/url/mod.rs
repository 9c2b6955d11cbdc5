//! URL handling module for TCG Catalog
//!
//! This module provides listing page URL templates, resolution of product
//! and image references to absolute URLs, and storefront-specific image URL
//! canonicalization.

mod image;
mod resolve;
mod template;

// Re-export main functions
pub use image::strip_image_transform;
pub use resolve::resolve_link;
pub use template::{PageUrlTemplate, PAGE_PLACEHOLDER};
