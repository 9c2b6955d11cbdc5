use crate::crawler::extract::PageExtractor;
use crate::url::PageUrlTemplate;
use std::sync::Arc;
use std::time::Duration;

/// How a storefront's HTTP 404 is interpreted during pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// The page past the last one answers 404; stop normally
    EndOfPagination,
    /// 404 is a terminal fetch error
    Error,
}

impl NotFoundPolicy {
    pub fn from_flag(ends_pagination: bool) -> Self {
        if ends_pagination {
            Self::EndOfPagination
        } else {
            Self::Error
        }
    }
}

/// One independently paginated listing within a storefront
#[derive(Clone)]
pub struct SectionPlan {
    /// Label used in progress logs, e.g. `PokeVolt:etb`
    pub label: String,
    pub pages: PageUrlTemplate,
    pub extractor: Arc<dyn PageExtractor>,
}

/// Everything needed to crawl one storefront
#[derive(Clone)]
pub struct SourcePlan {
    /// Shop name stamped on every record
    pub shop: String,
    /// Sections in catalog order
    pub sections: Vec<SectionPlan>,
    /// Maximum in-flight fetches across sections; None crawls with a politeness pause instead
    pub fetch_gate: Option<usize>,
    /// Per-request timeout override
    pub timeout: Option<Duration>,
    pub not_found: NotFoundPolicy,
}

impl std::fmt::Debug for SectionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionPlan")
            .field("label", &self.label)
            .field("pages", &self.pages)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for SourcePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourcePlan")
            .field("shop", &self.shop)
            .field("sections", &self.sections)
            .field("fetch_gate", &self.fetch_gate)
            .field("timeout", &self.timeout)
            .field("not_found", &self.not_found)
            .finish()
    }
}
