//! Page extraction interface
//!
//! Every storefront implements `PageExtractor` to turn one fetched listing
//! page into product drafts. The crawl loop never inspects markup itself.

use crate::catalog::{parse_price, Language, ProductRecord, ProductType};
use url::Url;

/// A product listing as read from markup, before validation
///
/// Name and link are optional here because markup can be incomplete; drafts
/// missing either are discarded by the crawler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub link: Option<String>,
    pub formatted_price: Option<String>,
    pub image: Option<String>,
    pub language: Language,
    pub product_type: Option<ProductType>,
}

impl ProductDraft {
    /// Converts the draft into an in-stock catalog record for `shop`
    ///
    /// Returns None when the name or link is missing or blank.
    pub fn into_record(self, shop: &str) -> Option<ProductRecord> {
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        let link = self.link.filter(|l| !l.trim().is_empty())?;
        let price = self.formatted_price.as_deref().and_then(parse_price);

        Some(ProductRecord {
            name,
            price,
            formatted_price: self.formatted_price,
            image: self.image,
            link,
            language: self.language,
            product_type: self.product_type,
            shop: shop.to_string(),
            in_stock: true,
            id: 0,
        })
    }
}

/// Drafts extracted from one page plus the continuation signal
#[derive(Debug, Clone, Default)]
pub struct ExtractedPage {
    pub drafts: Vec<ProductDraft>,

    /// False once the page holds no qualifying items
    pub has_more: bool,
}

/// Converts a fetched listing page into product drafts
pub trait PageExtractor: Send + Sync {
    /// Extracts in-stock listings from `body`
    ///
    /// `page_url` is the URL the body was fetched from and is used to resolve
    /// relative links and image sources.
    fn extract(&self, body: &str, page_url: &Url) -> ExtractedPage;
}
