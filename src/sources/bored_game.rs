//! Bored Game Company (WooCommerce search results)

use crate::catalog::extract_details_from_name;
use crate::config::BoredGameConfig;
use crate::crawler::{
    ExtractedPage, NotFoundPolicy, PageExtractor, ProductDraft, SectionPlan, SourcePlan,
};
use crate::sources::markup::{compile, element_text, first_attr, has_class, select_first};
use crate::url::{resolve_link, PageUrlTemplate, PAGE_PLACEHOLDER};
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const SHOP: &str = "Bored Game Company";
const LABEL: &str = "BGC";

/// Extracts in-stock products from a Bored Game Company search page
///
/// Items without the `instock` class are skipped. The page is exhausted when
/// it holds no in-stock item.
pub struct BoredGameExtractor {
    item: Selector,
    title: Selector,
    sale_price: Selector,
    price: Selector,
    image: Selector,
}

impl BoredGameExtractor {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            item: compile("li.product-col")?,
            title: compile("a.product-loop-title")?,
            sale_price: compile("span.price ins .amount")?,
            price: compile("span.price .amount")?,
            image: compile("div.product-image img")?,
        })
    }
}

impl PageExtractor for BoredGameExtractor {
    fn extract(&self, body: &str, page_url: &Url) -> ExtractedPage {
        let document = Html::parse_document(body);
        let mut drafts = Vec::new();

        for item in document.select(&self.item) {
            if !has_class(item, "instock") {
                continue;
            }

            let title = item.select(&self.title).next();
            let name = title.and_then(element_text);
            let link = title
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| resolve_link(href, page_url));
            let formatted_price =
                select_first(item, &[&self.sale_price, &self.price]).and_then(element_text);
            let image = item
                .select(&self.image)
                .next()
                .and_then(|img| first_attr(img, &["src", "data-src"]))
                .and_then(|src| resolve_link(src, page_url));
            let (language, product_type) = name
                .as_deref()
                .map(extract_details_from_name)
                .unwrap_or_default();

            drafts.push(ProductDraft {
                name,
                link,
                formatted_price,
                image,
                language,
                product_type,
            });
        }

        let has_more = !drafts.is_empty();
        ExtractedPage { drafts, has_more }
    }
}

/// Builds the crawl plan for Bored Game Company
pub fn plan(config: &BoredGameConfig) -> crate::Result<SourcePlan> {
    let pages = PageUrlTemplate::with_first_page(
        format!("{}/{}", config.base_url, config.search_query),
        format!(
            "{}/page/{}/{}",
            config.base_url, PAGE_PLACEHOLDER, config.search_query
        ),
    );

    Ok(SourcePlan {
        shop: SHOP.to_string(),
        sections: vec![SectionPlan {
            label: LABEL.to_string(),
            pages,
            extractor: Arc::new(BoredGameExtractor::new()?),
        }],
        fetch_gate: None,
        timeout: config.timeout_secs.map(Duration::from_secs),
        not_found: NotFoundPolicy::from_flag(config.not_found_ends_pagination),
    })
}
