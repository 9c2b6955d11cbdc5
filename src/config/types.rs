use crate::catalog::{Language, ProductType};
use serde::Deserialize;

/// Browser identity sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/114.0.0.0 Safari/537.36";

/// Main configuration structure for TCG Catalog
///
/// Storefronts are listed in catalog order: Bored Game Company, TCG Republic,
/// PokeVolt.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub http: HttpConfig,
    pub crawl: CrawlConfig,
    pub output: OutputConfig,
    pub bored_game_company: BoredGameConfig,
    pub tcg_republic: TcgRepublicConfig,
    pub pokevolt: PokeVoltConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    /// User-Agent header value
    pub user_agent: String,

    /// Total attempts per request when the server answers 429
    pub max_attempts: u32,

    /// Delay before the first retry; doubles on each further retry (milliseconds)
    pub backoff_base_ms: u64,

    /// Connection establishment timeout (seconds)
    pub connect_timeout_secs: u64,

    /// Timeout applied to requests without a per-storefront override (seconds)
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_attempts: 3,
            backoff_base_ms: 1000,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

/// Pagination limits shared by every storefront
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlConfig {
    /// Pause between sequential page fetches of storefronts without a fetch gate (milliseconds)
    pub politeness_delay_ms: u64,

    /// Upper bound on pages walked by a single section
    pub max_pages: u32,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            politeness_delay_ms: 250,
            max_pages: 200,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Path of the JSON catalog consumed by the front-end
    pub catalog_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            catalog_path: "frontend/data/products.json".to_string(),
        }
    }
}

/// Bored Game Company search listing
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BoredGameConfig {
    pub enabled: bool,
    pub base_url: String,
    /// Query string of the product search, including the leading `?`
    pub search_query: String,
    pub timeout_secs: Option<u64>,
    pub not_found_ends_pagination: bool,
}

impl Default for BoredGameConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://in.boredgamecompany.com".to_string(),
            search_query: "?s=Pokemon+TCG&post_type=product&product_cat=0".to_string(),
            timeout_secs: None,
            not_found_ends_pagination: false,
        }
    }
}

/// TCG Republic category listing
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TcgRepublicConfig {
    pub enabled: bool,
    pub base_url: String,
    /// Category path with leading and trailing slash
    pub category_path: String,
    pub timeout_secs: Option<u64>,
    pub not_found_ends_pagination: bool,
}

impl Default for TcgRepublicConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://tcgrepublic.in".to_string(),
            category_path: "/product-category/pokemon-tcg/".to_string(),
            timeout_secs: Some(15),
            not_found_ends_pagination: true,
        }
    }
}

/// PokeVolt storefront, crawled as independent category sections
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PokeVoltConfig {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub not_found_ends_pagination: bool,

    /// Maximum in-flight page fetches across all sections
    pub max_concurrent_fetches: u32,

    pub sections: Vec<PokeVoltSection>,
}

impl Default for PokeVoltConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://www.pokevolt.shop".to_string(),
            timeout_secs: Some(15),
            not_found_ends_pagination: false,
            max_concurrent_fetches: 5,
            sections: default_pokevolt_sections(),
        }
    }
}

/// One PokeVolt category page and the metadata applied to its products
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PokeVoltSection {
    pub key: String,
    pub path: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub language: Language,
}

impl PokeVoltSection {
    fn new(key: &str, path: &str, product_type: ProductType, language: Language) -> Self {
        Self {
            key: key.to_string(),
            path: path.to_string(),
            product_type,
            language,
        }
    }
}

fn default_pokevolt_sections() -> Vec<PokeVoltSection> {
    use Language::{English, Japanese};
    use ProductType::*;

    vec![
        PokeVoltSection::new("etb", "/etb", EliteTrainerBox, English),
        PokeVoltSection::new("boosterbundle", "/boosterbundle", BoosterBundle, English),
        // The storefront's own slug is misspelled
        PokeVoltSection::new("japanesesets", "/japenesesets", JapaneseSet, Japanese),
        PokeVoltSection::new("boosterboxes", "/boosterboxes", BoosterBox, English),
        PokeVoltSection::new(
            "singleboosters",
            "/single-booster-packs",
            SingleBoosterPack,
            English,
        ),
        PokeVoltSection::new("tins", "/tins", Tin, English),
        PokeVoltSection::new("collection", "/collection-boxes", CollectionBox, English),
        PokeVoltSection::new("blisters", "/blisters", BlisterPack, English),
    ]
}
