//! Crawler module for storefront fetching and pagination
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with rate-limit retry
//! - The page extractor interface implemented by each storefront
//! - Fetch gating, politeness pacing and link deduplication
//! - Overall crawl coordination and catalog assembly

mod coordinator;
mod extract;
mod fetcher;
mod harvest;
mod plan;
mod scheduler;

pub use coordinator::{into_catalog, run_catalog, Crawler, RunReport};
pub use extract::{ExtractedPage, PageExtractor, ProductDraft};
pub use fetcher::{build_http_client, Fetcher};
pub use harvest::{SectionFailure, SectionHarvest, SourceHarvest};
pub use plan::{NotFoundPolicy, SectionPlan, SourcePlan};
pub use scheduler::SourceScheduler;
