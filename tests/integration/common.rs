//! Shared fixtures for integration tests

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tcg_catalog::config::{Config, CrawlConfig, HttpConfig};
use tcg_catalog::crawler::{
    build_http_client, Crawler, ExtractedPage, Fetcher, NotFoundPolicy, PageExtractor,
    ProductDraft, SectionPlan, SourcePlan,
};
use tcg_catalog::url::PageUrlTemplate;
use url::Url;

/// HTTP settings with near-zero backoff
pub fn fast_http() -> HttpConfig {
    HttpConfig {
        backoff_base_ms: 1,
        request_timeout_secs: 5,
        ..HttpConfig::default()
    }
}

pub fn crawler(max_pages: u32) -> Crawler {
    let http = fast_http();
    let client = build_http_client(&http).expect("Failed to build client");
    Crawler::new(
        Fetcher::new(client, &http),
        &CrawlConfig {
            politeness_delay_ms: 0,
            max_pages,
        },
    )
}

/// Full configuration with every storefront pointed at `base_url`
pub fn mock_config(base_url: &str, catalog_path: &Path) -> Config {
    let mut config = Config::default();
    config.http = fast_http();
    config.crawl.politeness_delay_ms = 0;
    config.output.catalog_path = catalog_path.to_string_lossy().into_owned();
    config.bored_game_company.base_url = base_url.to_string();
    config.tcg_republic.base_url = base_url.to_string();
    config.pokevolt.base_url = base_url.to_string();
    config
}

/// Reads one product per non-empty line, formatted `name|link`
///
/// A page with no lines ends pagination.
pub struct LineExtractor;

impl PageExtractor for LineExtractor {
    fn extract(&self, body: &str, _page_url: &Url) -> ExtractedPage {
        let drafts: Vec<ProductDraft> = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let mut parts = line.splitn(2, '|');
                ProductDraft {
                    name: parts.next().map(str::to_string),
                    link: parts.next().map(str::to_string),
                    formatted_price: Some("₹100".to_string()),
                    ..ProductDraft::default()
                }
            })
            .collect();
        let has_more = !drafts.is_empty();
        ExtractedPage { drafts, has_more }
    }
}

/// A plan whose sections read `{base_url}/{label}/{page}` with `LineExtractor`
pub fn line_plan(
    shop: &str,
    base_url: &str,
    sections: &[&str],
    fetch_gate: Option<usize>,
    not_found: NotFoundPolicy,
) -> SourcePlan {
    SourcePlan {
        shop: shop.to_string(),
        sections: sections
            .iter()
            .map(|label| SectionPlan {
                label: label.to_string(),
                pages: PageUrlTemplate::numbered(format!("{}/{}/{{page}}", base_url, label)),
                extractor: Arc::new(LineExtractor),
            })
            .collect(),
        fetch_gate,
        timeout: Some(Duration::from_secs(5)),
        not_found,
    }
}

pub fn bored_game_page(items: &[(&str, &str, &str, bool)]) -> String {
    let body: String = items
        .iter()
        .map(|(name, href, price, in_stock)| {
            format!(
                r#"<li class="product-col product type-product {}">
  <div class="product-image"><img src="/img/{}.jpg"></div>
  <a class="product-loop-title" href="{}"><h3>{}</h3></a>
  <span class="price"><span class="amount">{}</span></span>
</li>"#,
                if *in_stock { "instock" } else { "outofstock" },
                name.len(),
                href,
                name,
                price
            )
        })
        .collect();
    format!(r#"<html><body><ul class="products">{}</ul></body></html>"#, body)
}

pub fn tcg_republic_page(items: &[(&str, &str, &str)]) -> String {
    let body: String = items
        .iter()
        .map(|(name, href, price)| {
            format!(
                r#"<li class="product type-product instock">
  <a href="{}" class="ast-loop-product__link"><h2 class="woocommerce-loop-product__title">{}</h2></a>
  <span class="price"><span class="woocommerce-Price-amount amount"><bdi>{}</bdi></span></span>
</li>"#,
                href, name, price
            )
        })
        .collect();
    format!(r#"<html><body><ul class="products">{}</ul></body></html>"#, body)
}

pub fn pokevolt_page(items: &[(&str, &str, &str)]) -> String {
    let body: String = items
        .iter()
        .map(|(name, href, price)| {
            format!(
                r#"<li data-hook="product-list-grid-item">
  <a data-hook="product-item-container" href="{}"><img src="https://static.wixstatic.com/media/x.jpg/v1/fill/w_300/x.jpg"></a>
  <p data-hook="product-item-name">{}</p>
  <span data-hook="product-item-price-to-pay">{}</span>
</li>"#,
                href, name, price
            )
        })
        .collect();
    format!(r#"<html><body><ul>{}</ul></body></html>"#, body)
}

pub fn empty_page() -> String {
    "<html><body><p>No products were found matching your selection.</p></body></html>".to_string()
}
