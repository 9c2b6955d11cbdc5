//! Run statistics
//!
//! This module summarizes what each storefront contributed to a run and
//! prints the summary in a human-readable form.

use crate::crawler::SourceHarvest;
use chrono::{DateTime, Utc};

/// Per-storefront counters for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStatistics {
    pub shop: String,
    pub pages_fetched: u32,
    pub products: usize,
    pub discarded: usize,
    pub duplicates: usize,
    /// `section: error` lines for sections that stopped early
    pub failures: Vec<String>,
}

/// Statistics for a complete run
#[derive(Debug, Clone)]
pub struct RunStatistics {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub sources: Vec<SourceStatistics>,
}

impl RunStatistics {
    /// Builds statistics from storefront harvests
    pub fn from_harvests(
        harvests: &[SourceHarvest],
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let sources = harvests
            .iter()
            .map(|harvest| SourceStatistics {
                shop: harvest.shop.clone(),
                pages_fetched: harvest.pages_fetched,
                products: harvest.records.len(),
                discarded: harvest.discarded,
                duplicates: harvest.duplicates,
                failures: harvest
                    .failures
                    .iter()
                    .map(|f| format!("{}: {}", f.section, f.error))
                    .collect(),
            })
            .collect();

        Self {
            started_at,
            finished_at,
            sources,
        }
    }

    pub fn total_products(&self) -> usize {
        self.sources.iter().map(|s| s.products).sum()
    }

    pub fn total_discarded(&self) -> usize {
        self.sources.iter().map(|s| s.discarded).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.sources.iter().map(|s| s.failures.len()).sum()
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Catalog Run ===\n");

    println!(
        "Started: {}  Duration: {}s",
        stats.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
        stats.duration_seconds()
    );
    println!();

    println!("Storefronts:");
    for source in &stats.sources {
        println!(
            "  {}: {} products, {} pages, {} discarded, {} duplicates",
            source.shop, source.products, source.pages_fetched, source.discarded, source.duplicates
        );
    }
    println!();

    if stats.failure_count() > 0 {
        println!("Section Errors ({}):", stats.failure_count());
        for source in &stats.sources {
            for failure in &source.failures {
                println!("  - {}", failure);
            }
        }
        println!();
    }

    println!(
        "Total: {} products ({} listings discarded for missing name or link)",
        stats.total_products(),
        stats.total_discarded()
    );
}
