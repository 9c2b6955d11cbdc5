//! Per-storefront fetch scheduling
//!
//! This module handles:
//! - The optional counting gate bounding in-flight fetches across sections
//! - The politeness pause between sequential fetches of ungated storefronts
//! - The seen-link set shared by all sections of a storefront

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::{Semaphore, SemaphorePermit};

/// Scheduling state shared by the concurrently running sections of one storefront
#[derive(Debug)]
pub struct SourceScheduler {
    /// Bounds simultaneous fetches when present
    gate: Option<Semaphore>,

    /// Pause between sequential page fetches, used only without a gate
    politeness_delay: Duration,

    /// Links already emitted by any section of this storefront
    seen: Mutex<HashSet<String>>,
}

impl SourceScheduler {
    /// Creates a scheduler
    ///
    /// # Arguments
    ///
    /// * `fetch_gate` - Maximum in-flight fetches, or None for sequential politeness pacing
    /// * `politeness_delay` - Pause between pages when ungated
    pub fn new(fetch_gate: Option<usize>, politeness_delay: Duration) -> Self {
        Self {
            gate: fetch_gate.map(|permits| Semaphore::new(permits.max(1))),
            politeness_delay,
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Waits until page `page` of a section may be fetched
    ///
    /// Gated storefronts receive a permit to hold for the duration of the
    /// fetch. Ungated storefronts sleep for the politeness delay before every
    /// page after the first.
    pub async fn admit(&self, page: u32) -> Option<SemaphorePermit<'_>> {
        match &self.gate {
            Some(gate) => gate.acquire().await.ok(),
            None => {
                if page > 1 && !self.politeness_delay.is_zero() {
                    tokio::time::sleep(self.politeness_delay).await;
                }
                None
            }
        }
    }

    /// Records `link` and returns true if no section has emitted it before
    pub fn mark_seen(&self, link: &str) -> bool {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        seen.insert(link.to_string())
    }

    /// Returns the number of fetch permits currently available
    pub fn available_permits(&self) -> Option<usize> {
        self.gate.as_ref().map(Semaphore::available_permits)
    }
}
