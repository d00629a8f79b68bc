use tracing::debug;

use super::data::{sample_pictures, Picture};
use super::error::ValidationError;

/// The GalleryStore owns the ordered collection of pictures.
///
/// Insertion order is preserved. No two pictures share an id, and no two
/// share a url under case-insensitive comparison; every mutation keeps that
/// invariant.
#[derive(Debug, Clone, Default)]
pub struct GalleryStore {
    pictures: Vec<Picture>,
    /// Bumped on every committed mutation so views can tell when to refresh
    version: u64,
}

impl GalleryStore {
    /// Create a gallery pre-populated with the five demo pictures
    pub fn initialize() -> Self {
        let store = Self {
            pictures: sample_pictures(),
            version: 0,
        };
        debug!(count = store.len(), "gallery seeded with demo pictures");
        store
    }

    /// All pictures in insertion order
    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self, id: i32) -> Option<&Picture> {
        self.pictures.iter().find(|p| p.id == id)
    }

    /// Urls of the current pictures, in order
    pub fn urls(&self) -> impl Iterator<Item = &str> + '_ {
        self.pictures.iter().map(|p| p.url.as_str())
    }

    /// Validate raw form input and append a new picture.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// id format, author, url, then duplicates. On failure the
    /// gallery is left untouched.
    pub fn add(
        &mut self,
        candidate_id: &str,
        candidate_author: &str,
        candidate_url: &str,
    ) -> Result<Picture, ValidationError> {
        let id: i32 = candidate_id
            .parse()
            .map_err(|_| ValidationError::InvalidId)?;

        let author = candidate_author.trim();
        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }

        let url = candidate_url.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }

        if self.pictures.iter().any(|p| p.id == id || p.has_url(url)) {
            return Err(ValidationError::DuplicateRecord);
        }

        let picture = Picture::new(id, author, url);
        self.pictures.push(picture.clone());
        self.version += 1;

        debug!(id, author, url, version = self.version, "picture added");
        Ok(picture)
    }

    /// Remove every picture with `target_id`.
    ///
    /// Returns how many were removed; removing an unknown id is a no-op.
    pub fn remove(&mut self, target_id: i32) -> usize {
        let before = self.pictures.len();
        self.pictures.retain(|p| p.id != target_id);
        let removed = before - self.pictures.len();

        if removed > 0 {
            self.version += 1;
            debug!(id = target_id, version = self.version, "picture removed");
        }

        removed
    }

    /// Drop every picture. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.pictures.len();
        self.pictures.clear();

        if dropped > 0 {
            self.version += 1;
            debug!(dropped, version = self.version, "gallery cleared");
        }

        dropped
    }

    /// Pictures whose author contains `query`, ignoring case.
    ///
    /// A blank query selects everything. Order follows the gallery.
    pub fn filter(&self, query: &str) -> Vec<&Picture> {
        let pictures = self.pictures().iter();
        if query.trim().is_empty() {
            return pictures.collect();
        }

        pictures
            .filter(|p| p.matches_author(query))
            .collect()
    }
}
