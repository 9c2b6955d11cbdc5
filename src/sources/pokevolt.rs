//! PokeVolt (Wix Stores category pages)
//!
//! Each configured section is a separate category page crawled concurrently
//! with the others. Language and type come from the section table rather
//! than from product names.

use crate::catalog::{Language, ProductType};
use crate::config::{PokeVoltConfig, PokeVoltSection};
use crate::crawler::{
    ExtractedPage, NotFoundPolicy, PageExtractor, ProductDraft, SectionPlan, SourcePlan,
};
use crate::sources::markup::{compile, element_text, first_attr};
use crate::url::{resolve_link, strip_image_transform, PageUrlTemplate, PAGE_PLACEHOLDER};
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const SHOP: &str = "PokeVolt";

struct Selectors {
    item: Selector,
    out_of_stock: Selector,
    link: Selector,
    name: Selector,
    image: Selector,
}

impl Selectors {
    fn new() -> crate::Result<Self> {
        Ok(Self {
            item: compile(r#"li[data-hook="product-list-grid-item"]"#)?,
            out_of_stock: compile(r#"[data-hook="product-item-out-of-stock"]"#)?,
            link: compile(r#"a[data-hook="product-item-container"]"#)?,
            name: compile(r#"[data-hook="product-item-name"]"#)?,
            image: compile("img")?,
        })
    }
}

/// Extracts in-stock products from one PokeVolt category page
pub struct PokeVoltExtractor {
    selectors: Arc<Selectors>,
    language: Language,
    product_type: ProductType,
}

impl PokeVoltExtractor {
    /// Creates an extractor stamping `section`'s language and type on every draft
    pub fn new(section: &PokeVoltSection) -> crate::Result<Self> {
        Ok(Self::with_selectors(Arc::new(Selectors::new()?), section))
    }

    fn with_selectors(selectors: Arc<Selectors>, section: &PokeVoltSection) -> Self {
        Self {
            selectors,
            language: section.language,
            product_type: section.product_type,
        }
    }

    /// First text fragment of the item that starts with the rupee sign
    fn price_text(item: ElementRef<'_>) -> Option<String> {
        item.text()
            .map(str::trim)
            .find(|fragment| fragment.starts_with('₹'))
            .map(str::to_string)
    }
}

impl PageExtractor for PokeVoltExtractor {
    fn extract(&self, body: &str, page_url: &Url) -> ExtractedPage {
        let document = Html::parse_document(body);
        let selectors = &self.selectors;
        let mut drafts = Vec::new();
        let mut listed = 0usize;

        for item in document.select(&selectors.item) {
            listed += 1;

            if item.select(&selectors.out_of_stock).next().is_some() {
                continue;
            }

            let link = item
                .select(&selectors.link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| resolve_link(href, page_url));
            let name = item.select(&selectors.name).next().and_then(element_text);
            let image = item
                .select(&selectors.image)
                .next()
                .and_then(|img| first_attr(img, &["data-src", "data-lazy-src", "src"]))
                .and_then(|src| resolve_link(src, page_url))
                .map(|src| strip_image_transform(&src).to_string());

            drafts.push(ProductDraft {
                name,
                link,
                formatted_price: Self::price_text(item),
                image,
                language: self.language,
                product_type: Some(self.product_type),
            });
        }

        ExtractedPage {
            drafts,
            has_more: listed > 0,
        }
    }
}

/// Builds the crawl plan for PokeVolt, one section per configured category
pub fn plan(config: &PokeVoltConfig) -> crate::Result<SourcePlan> {
    let selectors = Arc::new(Selectors::new()?);

    let sections = config
        .sections
        .iter()
        .map(|section| SectionPlan {
            label: format!("{}:{}", SHOP, section.key),
            pages: PageUrlTemplate::numbered(format!(
                "{}{}?page={}",
                config.base_url, section.path, PAGE_PLACEHOLDER
            )),
            extractor: Arc::new(PokeVoltExtractor::with_selectors(
                Arc::clone(&selectors),
                section,
            )),
        })
        .collect();

    Ok(SourcePlan {
        shop: SHOP.to_string(),
        sections,
        fetch_gate: Some(config.max_concurrent_fetches as usize),
        timeout: config.timeout_secs.map(Duration::from_secs),
        not_found: NotFoundPolicy::from_flag(config.not_found_ends_pagination),
    })
}
