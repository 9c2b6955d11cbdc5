use crate::catalog::ProductRecord;
use crate::output::snapshot::load_previous;
use std::path::{Path, PathBuf};

/// Result of comparing the new catalog with the persisted one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The catalog matched the previous snapshot; nothing was written
    Unchanged,
    /// The catalog was written with `count` products
    Written { count: usize },
}

/// Renders the catalog as pretty-printed JSON with 2-space indentation
///
/// Non-ASCII characters are written verbatim.
pub fn render_catalog(products: &[ProductRecord]) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(products)?)
}

/// Writes `products` to `path` unless they equal the previous snapshot
///
/// Equality is order- and field-sensitive. The destination directory is
/// created when missing, and the file is replaced atomically through a
/// sibling temporary file.
///
/// # Returns
///
/// * `Ok(WriteOutcome)` - Whether a write happened
/// * `Err(CatalogError)` - The catalog could not be serialized or written
pub fn write_if_changed(path: &Path, products: &[ProductRecord]) -> crate::Result<WriteOutcome> {
    let previous = load_previous(path);
    if previous.as_slice() == products {
        tracing::info!("No changes, skipping write of {}", path.display());
        return Ok(WriteOutcome::Unchanged);
    }

    let rendered = render_catalog(products)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    std::fs::write(&staging, rendered.as_bytes())?;
    if let Err(e) = std::fs::rename(&staging, path) {
        let _ = std::fs::remove_file(&staging);
        return Err(e.into());
    }

    tracing::info!("Wrote {} products to {}", products.len(), path.display());
    Ok(WriteOutcome::Written {
        count: products.len(),
    })
}

/// Temporary file next to `path`, e.g. `data/.products.json.tmp`
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}
