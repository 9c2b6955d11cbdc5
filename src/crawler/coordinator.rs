//! Crawler coordinator - main crawl orchestration logic
//!
//! This module runs every storefront concurrently, drives each section's
//! pagination loop, contains per-section failures, and hands the merged
//! catalog to the output writer.

use crate::catalog::{assign_ids, ProductRecord};
use crate::config::{Config, CrawlConfig};
use crate::crawler::harvest::{SectionHarvest, SourceHarvest};
use crate::crawler::plan::{NotFoundPolicy, SectionPlan, SourcePlan};
use crate::crawler::scheduler::SourceScheduler;
use crate::crawler::{build_http_client, Fetcher};
use crate::output::{write_if_changed, RunStatistics, WriteOutcome};
use crate::{sources, CrawlError};
use chrono::Utc;
use futures::future::join_all;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Drives storefront crawls over a shared fetcher
pub struct Crawler {
    fetcher: Fetcher,
    politeness_delay: Duration,
    max_pages: u32,
}

impl Crawler {
    /// Creates a crawler
    ///
    /// # Arguments
    ///
    /// * `fetcher` - The page fetcher shared by all storefronts
    /// * `config` - Politeness delay and page cap
    pub fn new(fetcher: Fetcher, config: &CrawlConfig) -> Self {
        Self {
            fetcher,
            politeness_delay: Duration::from_millis(config.politeness_delay_ms),
            max_pages: config.max_pages,
        }
    }

    /// Crawls every storefront concurrently
    ///
    /// Harvests are returned in the order of `plans`, independent of which
    /// storefront finished first.
    pub async fn crawl_all(&self, plans: &[SourcePlan]) -> Vec<SourceHarvest> {
        join_all(plans.iter().map(|plan| self.crawl_source(plan))).await
    }

    /// Crawls one storefront, running its sections concurrently
    ///
    /// A failing section keeps the records it gathered and never stops its
    /// siblings.
    pub async fn crawl_source(&self, plan: &SourcePlan) -> SourceHarvest {
        let scheduler = SourceScheduler::new(plan.fetch_gate, self.politeness_delay);

        let sections = join_all(
            plan.sections
                .iter()
                .map(|section| self.crawl_section(plan, section, &scheduler)),
        )
        .await;

        let harvest = SourceHarvest::from_sections(plan.shop.as_str(), sections);

        for failure in &harvest.failures {
            tracing::error!("[{}] section error: {}", failure.section, failure.error);
        }

        tracing::info!(
            "{}: {} products from {} pages ({} discarded, {} duplicates)",
            harvest.shop,
            harvest.records.len(),
            harvest.pages_fetched,
            harvest.discarded,
            harvest.duplicates
        );

        harvest
    }

    /// Walks one section page by page until exhaustion or a terminal error
    async fn crawl_section(
        &self,
        plan: &SourcePlan,
        section: &SectionPlan,
        scheduler: &SourceScheduler,
    ) -> SectionHarvest {
        let mut harvest = SectionHarvest::new(section.label.as_str());
        let mut page = 1u32;

        loop {
            if page > self.max_pages {
                harvest.error = Some(CrawlError::PaginationLimit {
                    section: section.label.clone(),
                    max_pages: self.max_pages,
                });
                break;
            }

            let url = section.pages.url_for(page);
            let page_url = match Url::parse(&url) {
                Ok(u) => u,
                Err(source) => {
                    harvest.error = Some(CrawlError::InvalidUrl { url, source });
                    break;
                }
            };

            let fetched = {
                let _permit = scheduler.admit(page).await;
                tracing::info!("[{}] {}", section.label, url);
                self.fetcher.fetch(&url, plan.timeout).await
            };

            let body = match fetched {
                Ok(body) => body,
                Err(e) if e.is_not_found() && plan.not_found == NotFoundPolicy::EndOfPagination => {
                    tracing::debug!("[{}] {} not found, pagination ended", section.label, url);
                    break;
                }
                Err(e) => {
                    harvest.error = Some(e.into());
                    break;
                }
            };
            harvest.pages_fetched += 1;

            let extracted = section.extractor.extract(&body, &page_url);

            for draft in extracted.drafts {
                let Some(record) = draft.into_record(&plan.shop) else {
                    harvest.discarded += 1;
                    continue;
                };

                if scheduler.mark_seen(&record.link) {
                    harvest.records.push(record);
                } else {
                    tracing::debug!("[{}] duplicate link {}", section.label, record.link);
                    harvest.duplicates += 1;
                }
            }

            if !extracted.has_more {
                break;
            }
            page += 1;
        }

        harvest
    }
}

/// Concatenates harvests in order and assigns catalog ids
pub fn into_catalog(harvests: Vec<SourceHarvest>) -> Vec<ProductRecord> {
    let mut products: Vec<ProductRecord> = harvests
        .into_iter()
        .flat_map(|harvest| harvest.records)
        .collect();
    assign_ids(&mut products);
    products
}

/// Outcome of one full crawl-merge-write cycle
#[derive(Debug)]
pub struct RunReport {
    pub catalog_path: PathBuf,
    pub outcome: WriteOutcome,
    pub statistics: RunStatistics,
}

/// Runs one complete crawl-merge-write cycle
///
/// 1. Build the HTTP client and storefront plans
/// 2. Crawl all storefronts concurrently
/// 3. Concatenate in storefront order and assign ids
/// 4. Write the catalog if it differs from the previous one
///
/// Storefront failures are contained and reported in the statistics. Only
/// setup failures and catalog write failures are returned as errors.
///
/// # Example
///
/// ```no_run
/// use tcg_catalog::config::Config;
/// use tcg_catalog::crawler::run_catalog;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_catalog(&Config::default()).await?;
/// println!("{:?}", report.outcome);
/// # Ok(())
/// # }
/// ```
pub async fn run_catalog(config: &Config) -> crate::Result<RunReport> {
    let started_at = Utc::now();

    let client = build_http_client(&config.http)?;
    let fetcher = Fetcher::new(client, &config.http);
    let plans = sources::build_plans(config)?;
    let crawler = Crawler::new(fetcher, &config.crawl);

    tracing::info!("Crawling {} storefronts", plans.len());
    let harvests = crawler.crawl_all(&plans).await;

    let statistics = RunStatistics::from_harvests(&harvests, started_at, Utc::now());
    let products = into_catalog(harvests);

    let catalog_path = PathBuf::from(&config.output.catalog_path);
    let outcome = write_if_changed(&catalog_path, &products)?;

    Ok(RunReport {
        catalog_path,
        outcome,
        statistics,
    })
}
