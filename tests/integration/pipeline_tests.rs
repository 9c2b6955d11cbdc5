//! End-to-end tests of the crawl-merge-write cycle
//!
//! Each test serves storefront markup from a mock server, runs
//! `run_catalog`, and inspects the JSON catalog written to a temp directory.

use crate::common::{
    bored_game_page, empty_page, mock_config, pokevolt_page, tcg_republic_page,
};
use serde_json::Value;
use std::time::Duration;
use tcg_catalog::catalog::{Language, ProductType};
use tcg_catalog::config::PokeVoltSection;
use tcg_catalog::{run_catalog, WriteOutcome};
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_pokevolt(server: &MockServer, route: &str, page: &str, body: String, delay_ms: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("page", page))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .set_delay(Duration::from_millis(delay_ms)),
        )
        .mount(server)
        .await;
}

fn read_catalog(path: &std::path::Path) -> Vec<Value> {
    let content = std::fs::read_to_string(path).expect("Failed to read catalog");
    serde_json::from_str(&content).expect("Catalog is not a JSON array")
}

#[tokio::test]
async fn test_bored_game_catalog_written_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_html(
        &server,
        "/",
        bored_game_page(&[
            (
                "Scarlet and Violet 151 Elite Trainer Box",
                "/product/151-etb/",
                "₹5,999",
                true,
            ),
            ("Sold Out Booster Box", "/product/sold/", "₹12,000", false),
            (
                "Terastal Festival Booster Box (Japanese)",
                "/product/terastal/",
                "₹7,499.50",
                true,
            ),
        ]),
    )
    .await;
    mount_html(
        &server,
        "/page/2/",
        bored_game_page(&[("Another Sold Out Tin", "/product/tin/", "₹999", false)]),
    )
    .await;

    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("data").join("products.json");
    let mut config = mock_config(&base, &catalog_path);
    config.tcg_republic.enabled = false;
    config.pokevolt.enabled = false;

    let report = run_catalog(&config).await.expect("Run failed");
    assert_eq!(report.outcome, WriteOutcome::Written { count: 2 });
    assert_eq!(report.statistics.failure_count(), 0);
    assert_eq!(report.statistics.sources[0].pages_fetched, 2);

    let catalog = read_catalog(&catalog_path);
    assert_eq!(catalog.len(), 2);

    assert_eq!(catalog[0]["id"], 1);
    assert_eq!(catalog[0]["shop"], "Bored Game Company");
    assert_eq!(catalog[0]["type"], "Elite Trainer Box");
    assert_eq!(catalog[0]["language"], "English");
    assert_eq!(catalog[0]["price"], 5999);
    assert_eq!(catalog[0]["formattedPrice"], "₹5,999");
    assert_eq!(catalog[0]["inStock"], true);
    assert_eq!(
        catalog[0]["link"],
        format!("{}/product/151-etb/", base).as_str()
    );

    assert_eq!(catalog[1]["id"], 2);
    assert_eq!(catalog[1]["type"], "Booster Box");
    assert_eq!(catalog[1]["language"], "Japanese");
    assert_eq!(catalog[1]["price"], 7499.5);

    let first_bytes = std::fs::read(&catalog_path).unwrap();
    assert!(String::from_utf8(first_bytes.clone()).unwrap().contains("₹5,999"));

    let second = run_catalog(&config).await.expect("Second run failed");
    assert_eq!(second.outcome, WriteOutcome::Unchanged);
    assert_eq!(std::fs::read(&catalog_path).unwrap(), first_bytes);
}

#[tokio::test]
async fn test_storefronts_concatenated_in_declared_order() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Bored Game Company
    mount_html(
        &server,
        "/",
        bored_game_page(&[("Stellar Crown Booster Pack", "/product/sc-pack/", "₹449", true)]),
    )
    .await;
    mount_html(&server, "/page/2/", empty_page()).await;

    // TCG Republic; page 2 is not mounted and answers 404
    mount_html(
        &server,
        "/product-category/pokemon-tcg/",
        tcg_republic_page(&[
            ("Paldean Fates Collection Box", "/product/pf-box/", "₹1,899.00"),
            ("Korean Shiny Treasure Booster Box", "/product/kr-box/", "₹6,200"),
        ]),
    )
    .await;

    // PokeVolt, two sections sharing one product
    mount_pokevolt(
        &server,
        "/etb",
        "1",
        pokevolt_page(&[
            ("Surging Sparks ETB", "/product-page/ss-etb", "₹5,499.00"),
            ("Mixed Bundle", "/product-page/mixed", "₹3,000.00"),
        ]),
        0,
    )
    .await;
    mount_pokevolt(&server, "/etb", "2", empty_page(), 0).await;
    mount_pokevolt(
        &server,
        "/japenesesets",
        "1",
        pokevolt_page(&[
            ("Mixed Bundle", "/product-page/mixed", "₹3,000.00"),
            ("Battle Partners Box", "/product-page/battle-partners", "₹4,999.00"),
        ]),
        // Served after the etb section has claimed the shared link
        300,
    )
    .await;
    mount_pokevolt(&server, "/japenesesets", "2", empty_page(), 0).await;

    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("products.json");
    let mut config = mock_config(&base, &catalog_path);
    config.pokevolt.sections = vec![
        PokeVoltSection {
            key: "etb".to_string(),
            path: "/etb".to_string(),
            product_type: ProductType::EliteTrainerBox,
            language: Language::English,
        },
        PokeVoltSection {
            key: "japanesesets".to_string(),
            path: "/japenesesets".to_string(),
            product_type: ProductType::JapaneseSet,
            language: Language::Japanese,
        },
    ];

    let report = run_catalog(&config).await.expect("Run failed");
    assert_eq!(report.outcome, WriteOutcome::Written { count: 6 });
    assert_eq!(report.statistics.failure_count(), 0);
    assert_eq!(report.statistics.sources[2].duplicates, 1);

    let catalog = read_catalog(&catalog_path);
    let shops: Vec<&str> = catalog.iter().filter_map(|p| p["shop"].as_str()).collect();
    assert_eq!(
        shops,
        vec![
            "Bored Game Company",
            "TCG Republic",
            "TCG Republic",
            "PokeVolt",
            "PokeVolt",
            "PokeVolt"
        ]
    );

    let ids: Vec<u64> = catalog.iter().filter_map(|p| p["id"].as_u64()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    assert_eq!(catalog[1]["type"], "Collection Box");
    assert_eq!(catalog[1]["price"], 1899);
    assert_eq!(catalog[2]["language"], "Korean");

    // Section metadata wins over the product name
    assert_eq!(catalog[3]["type"], "Elite Trainer Box");
    assert_eq!(catalog[4]["name"], "Mixed Bundle");
    assert_eq!(catalog[4]["type"], "Elite Trainer Box");
    assert_eq!(catalog[5]["type"], "Japanese Set");
    assert_eq!(catalog[5]["language"], "Japanese");
    assert_eq!(catalog[5]["image"], "https://static.wixstatic.com/media/x.jpg");
}

#[tokio::test]
async fn test_failing_storefront_does_not_block_catalog() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    mount_html(
        &server,
        "/product-category/pokemon-tcg/",
        tcg_republic_page(&[("Prismatic Evolutions Booster Pack", "/product/pe-pack/", "₹3,299")]),
    )
    .await;

    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("products.json");
    let mut config = mock_config(&base, &catalog_path);
    config.pokevolt.enabled = false;

    let report = run_catalog(&config).await.expect("Run failed");
    assert_eq!(report.outcome, WriteOutcome::Written { count: 1 });
    assert_eq!(report.statistics.failure_count(), 1);
    assert_eq!(report.statistics.sources[0].products, 0);

    let catalog = read_catalog(&catalog_path);
    assert_eq!(catalog[0]["id"], 1);
    assert_eq!(catalog[0]["shop"], "TCG Republic");
    assert_eq!(catalog[0]["type"], "Booster Pack");
}

#[tokio::test]
async fn test_unwritable_catalog_is_an_error() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_html(
        &server,
        "/product-category/pokemon-tcg/",
        tcg_republic_page(&[("Obsidian Flames Tin", "/product/of-tin/", "₹1,699")]),
    )
    .await;

    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut config = mock_config(&base, &blocker.join("products.json"));
    config.bored_game_company.enabled = false;
    config.pokevolt.enabled = false;

    assert!(run_catalog(&config).await.is_err());
}
