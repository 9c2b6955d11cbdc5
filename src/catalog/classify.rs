use crate::catalog::types::{Language, ProductType};

/// Infers language and product type from a listing title
///
/// Matching is case-insensitive substring search. Language checks run in the
/// order Japanese, Korean, Simplified Chinese and fall back to English. Type
/// checks run from most to least specific and the first match wins, so a
/// 36-pack display box is never reported as a plain booster box.
///
/// # Example
///
/// ```
/// use tcg_catalog::catalog::extract_details_from_name;
/// use tcg_catalog::{Language, ProductType};
///
/// let (language, product_type) = extract_details_from_name("Japanese Shiny Treasure ex Booster Box");
/// assert_eq!(language, Language::Japanese);
/// assert_eq!(product_type, Some(ProductType::BoosterBox));
/// ```
pub fn extract_details_from_name(name: &str) -> (Language, Option<ProductType>) {
    let lowered = name.to_lowercase();
    (detect_language(&lowered), detect_type(&lowered))
}

fn detect_language(lowered: &str) -> Language {
    if lowered.contains("japanese") {
        Language::Japanese
    } else if lowered.contains("korean") {
        Language::Korean
    } else if lowered.contains("simplified chinese") {
        Language::SimplifiedChinese
    } else {
        Language::English
    }
}

fn detect_type(lowered: &str) -> Option<ProductType> {
    if lowered.contains("booster display box") && lowered.contains("(36 packs)") {
        Some(ProductType::BoosterDisplayBox)
    } else if lowered.contains("precious collector box") {
        Some(ProductType::PreciousCollectorBox)
    } else if lowered.contains("elite trainer box") || lowered.contains("etb") {
        Some(ProductType::EliteTrainerBox)
    } else if lowered.contains("booster box") {
        Some(ProductType::BoosterBox)
    } else if lowered.contains("blister") {
        Some(ProductType::BlisterPack)
    } else if lowered.contains("booster pack") {
        Some(ProductType::BoosterPack)
    } else if lowered.contains("collection box") {
        Some(ProductType::CollectionBox)
    } else {
        None
    }
}
