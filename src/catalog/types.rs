use serde::{Deserialize, Serialize};
use std::fmt;

/// A listed price, kept integral when the storefront shows a whole amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Whole(i64),
    Fractional(f64),
}

/// Printing language of a sealed product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Japanese,
    Korean,
    #[serde(rename = "Simplified Chinese")]
    SimplifiedChinese,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::SimplifiedChinese => "Simplified Chinese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product category labels understood by the front-end filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Elite Trainer Box")]
    EliteTrainerBox,
    #[serde(rename = "Booster Box")]
    BoosterBox,
    #[serde(rename = "Booster Pack")]
    BoosterPack,
    #[serde(rename = "Collection Box")]
    CollectionBox,
    #[serde(rename = "Blister Pack")]
    BlisterPack,
    #[serde(rename = "Booster Display Box (36 Packs)")]
    BoosterDisplayBox,
    #[serde(rename = "Precious Collector Box")]
    PreciousCollectorBox,
    #[serde(rename = "Tin")]
    Tin,
    #[serde(rename = "Booster Bundle")]
    BoosterBundle,
    #[serde(rename = "Japanese Set")]
    JapaneseSet,
    #[serde(rename = "Single Booster Pack")]
    SingleBoosterPack,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EliteTrainerBox => "Elite Trainer Box",
            Self::BoosterBox => "Booster Box",
            Self::BoosterPack => "Booster Pack",
            Self::CollectionBox => "Collection Box",
            Self::BlisterPack => "Blister Pack",
            Self::BoosterDisplayBox => "Booster Display Box (36 Packs)",
            Self::PreciousCollectorBox => "Precious Collector Box",
            Self::Tin => "Tin",
            Self::BoosterBundle => "Booster Bundle",
            Self::JapaneseSet => "Japanese Set",
            Self::SingleBoosterPack => "Single Booster Pack",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry as persisted for the front-end
///
/// Field order matches the serialized key order of the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub price: Option<Price>,
    pub formatted_price: Option<String>,
    pub image: Option<String>,
    pub link: String,
    pub language: Language,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    pub shop: String,
    pub in_stock: bool,
    /// Position in the merged catalog, 1-based; zero until assigned
    #[serde(default)]
    pub id: u32,
}
