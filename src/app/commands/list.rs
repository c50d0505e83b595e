//! List command - describes the embedded template catalog.

use serde::Serialize;

use crate::domain::TemplateCatalog;
use crate::domain::verify::hash_content;

/// One catalog entry as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogListing {
    pub path: String,
    pub bytes: usize,
    pub sha256: String,
}

/// Execute the list command.
///
/// Returns one listing per catalog entry, in catalog order.
pub fn execute(catalog: &TemplateCatalog) -> Vec<CatalogListing> {
    catalog
        .iter()
        .map(|(path, content)| CatalogListing {
            path: path.to_string(),
            bytes: content.len(),
            sha256: hash_content(content.as_bytes()),
        })
        .collect()
}
