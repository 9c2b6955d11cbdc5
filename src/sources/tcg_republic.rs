//! TCG Republic (WooCommerce / Astra category listing)

use crate::catalog::extract_details_from_name;
use crate::config::TcgRepublicConfig;
use crate::crawler::{
    ExtractedPage, NotFoundPolicy, PageExtractor, ProductDraft, SectionPlan, SourcePlan,
};
use crate::sources::markup::{compile, element_text, first_attr, has_class, select_first};
use crate::url::{resolve_link, PageUrlTemplate, PAGE_PLACEHOLDER};
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const SHOP: &str = "TCG Republic";
const LABEL: &str = "TCGR";

/// Extracts in-stock products from a TCG Republic category page
///
/// An item is out of stock when it carries the Astra out-of-stock badge or
/// the `outofstock` class. The page is exhausted when it lists no products
/// at all, in or out of stock.
pub struct TcgRepublicExtractor {
    item: Selector,
    out_of_stock: Selector,
    title: Selector,
    link: Selector,
    sale_price: Selector,
    price: Selector,
    image: Selector,
}

impl TcgRepublicExtractor {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            item: compile("li.product.type-product")?,
            out_of_stock: compile("span.ast-shop-product-out-of-stock")?,
            title: compile("h2.woocommerce-loop-product__title")?,
            link: compile("a.ast-loop-product__link")?,
            sale_price: compile("span.price ins span.woocommerce-Price-amount.amount bdi")?,
            price: compile("span.price span.woocommerce-Price-amount.amount bdi")?,
            image: compile("div.astra-shop-thumbnail-wrap img")?,
        })
    }
}

impl PageExtractor for TcgRepublicExtractor {
    fn extract(&self, body: &str, page_url: &Url) -> ExtractedPage {
        let document = Html::parse_document(body);
        let mut drafts = Vec::new();
        let mut listed = 0usize;

        for item in document.select(&self.item) {
            listed += 1;

            if item.select(&self.out_of_stock).next().is_some() || has_class(item, "outofstock") {
                continue;
            }

            let name = item.select(&self.title).next().and_then(element_text);
            let link = item
                .select(&self.link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| resolve_link(href, page_url));
            let formatted_price =
                select_first(item, &[&self.sale_price, &self.price]).and_then(element_text);
            let image = item
                .select(&self.image)
                .next()
                .and_then(|img| first_attr(img, &["src", "data-lazy-src"]))
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

        ExtractedPage {
            drafts,
            has_more: listed > 0,
        }
    }
}

/// Builds the crawl plan for TCG Republic
pub fn plan(config: &TcgRepublicConfig) -> crate::Result<SourcePlan> {
    let first = format!("{}{}", config.base_url, config.category_path);
    let pages = PageUrlTemplate::with_first_page(
        first.clone(),
        format!("{}page/{}/", first, PAGE_PLACEHOLDER),
    );

    Ok(SourcePlan {
        shop: SHOP.to_string(),
        sections: vec![SectionPlan {
            label: LABEL.to_string(),
            pages,
            extractor: Arc::new(TcgRepublicExtractor::new()?),
        }],
        fetch_gate: None,
        timeout: config.timeout_secs.map(Duration::from_secs),
        not_found: NotFoundPolicy::from_flag(config.not_found_ends_pagination),
    })
}
