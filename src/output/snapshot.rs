use crate::catalog::ProductRecord;
use std::path::Path;

/// Loads the catalog written by a previous run
///
/// A missing or unparsable file is treated as an empty previous catalog.
pub fn load_previous(path: &Path) -> Vec<ProductRecord> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("No previous catalog at {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(
                "Ignoring unreadable previous catalog {}: {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}
