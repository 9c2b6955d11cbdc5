use crate::catalog::ProductRecord;
use crate::CrawlError;

/// Records gathered by one section's pagination loop
#[derive(Debug, Default)]
pub struct SectionHarvest {
    pub label: String,
    pub records: Vec<ProductRecord>,
    pub pages_fetched: u32,
    /// Drafts dropped for a missing name or link
    pub discarded: usize,
    /// Records dropped because another page or section already emitted the link
    pub duplicates: usize,
    /// Why the loop stopped early, if it did
    pub error: Option<CrawlError>,
}

impl SectionHarvest {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// A section that ended with a terminal error
#[derive(Debug)]
pub struct SectionFailure {
    pub section: String,
    pub error: CrawlError,
}

/// Everything one storefront contributed to a run
#[derive(Debug, Default)]
pub struct SourceHarvest {
    pub shop: String,
    /// Records in section declaration order, then page order
    pub records: Vec<ProductRecord>,
    pub pages_fetched: u32,
    pub discarded: usize,
    pub duplicates: usize,
    pub failures: Vec<SectionFailure>,
}

impl SourceHarvest {
    /// Combines section harvests, preserving their order
    pub fn from_sections(shop: impl Into<String>, sections: Vec<SectionHarvest>) -> Self {
        let mut harvest = Self {
            shop: shop.into(),
            ..Self::default()
        };

        for section in sections {
            harvest.records.extend(section.records);
            harvest.pages_fetched += section.pages_fetched;
            harvest.discarded += section.discarded;
            harvest.duplicates += section.duplicates;
            if let Some(error) = section.error {
                harvest.failures.push(SectionFailure {
                    section: section.label,
                    error,
                });
            }
        }

        harvest
    }

    /// Returns true if every section finished without a terminal error
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
