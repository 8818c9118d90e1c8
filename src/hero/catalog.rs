//! Ordered image catalog driving the hero rotation.

/// A single catalog entry: a category key and the image it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub url: String,
}

/// Ordered, immutable mapping from category key to image URL.
///
/// Insertion order defines rotation order. Keys are unique; the catalog
/// cannot be modified after construction.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    entries: Vec<CatalogEntry>,
}

impl ImageCatalog {
    /// Build a catalog from `(key, url)` pairs in rotation order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if no entries are given, or
    /// `CatalogError::DuplicateKey` if a key appears more than once.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries: Vec<CatalogEntry> = entries
            .into_iter()
            .map(|(key, url)| CatalogEntry { key, url })
            .collect();

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.key == entry.key) {
                return Err(CatalogError::DuplicateKey(entry.key.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Number of entries in rotation order.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A catalog is never empty after construction, but the check is kept
    /// for completeness.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `key` in rotation order, if present.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Entry at `index`. Panics if out of range; callers only pass indices
    /// produced by this catalog.
    pub fn entry_at(&self, index: usize) -> &CatalogEntry {
        &self.entries[index]
    }

    /// Image URL for `key`, if present.
    pub fn url_for(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.url.as_str())
    }

    /// Entries in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

/// Errors that can occur when building an image catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no images")]
    Empty,

    #[error("duplicate category key '{0}'")]
    DuplicateKey(String),

    #[error("default category '{0}' is not in the catalog")]
    UnknownDefault(String),
}
