use std::collections::{HashMap, HashSet};

use iced::widget::image::Handle;

use super::loader::FetchError;

/// Load state of one remote picture
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Handle),
    Failed,
}

/// Per-url load state for every picture currently in the gallery
#[derive(Debug, Default)]
pub struct ImageSlots {
    slots: HashMap<String, ImageState>,
}

impl ImageSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `url` as loading. Returns true only when the url was not
    /// tracked yet, i.e. when the caller should start a fetch.
    pub fn request(&mut self, url: &str) -> bool {
        if self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), ImageState::Loading);
        true
    }

    /// Record the outcome of a fetch.
    ///
    /// Results for urls that were dropped in the meantime are discarded.
    pub fn resolve(&mut self, url: &str, result: Result<Handle, FetchError>) {
        if let Some(slot) = self.slots.get_mut(url) {
            *slot = match result {
                Ok(handle) => ImageState::Ready(handle),
                Err(_) => ImageState::Failed,
            };
        }
    }

    pub fn state(&self, url: &str) -> Option<&ImageState> {
        self.slots.get(url)
    }

    /// Forget every url not in `urls`
    pub fn retain<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        let keep: HashSet<&str> = urls.into_iter().collect();
        self.slots.retain(|url, _| keep.contains(url.as_str()));
    }

    /// Number of urls currently tracked
    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> Handle {
        Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255])
    }

    #[test]
    fn test_request_only_once() {
        let mut slots = ImageSlots::new();
        assert!(slots.request("http://a"));
        assert!(!slots.request("http://a"));
        assert!(matches!(slots.state("http://a"), Some(ImageState::Loading)));
    }

    #[test]
    fn test_resolve_success_and_failure() {
        let mut slots = ImageSlots::new();
        slots.request("http://a");
        slots.request("http://b");

        slots.resolve("http://a", Ok(pixel()));
        slots.resolve("http://b", Err(FetchError::Status(404)));

        assert!(matches!(slots.state("http://a"), Some(ImageState::Ready(_))));
        assert!(matches!(slots.state("http://b"), Some(ImageState::Failed)));
    }

    #[test]
    fn test_resolve_for_dropped_url_is_ignored() {
        let mut slots = ImageSlots::new();
        slots.resolve("http://gone", Ok(pixel()));
        assert!(slots.state("http://gone").is_none());
        assert_eq!(slots.len(), 0);
    }

    #[test]
    fn test_retain_drops_unwanted_urls() {
        let mut slots = ImageSlots::new();
        slots.request("http://a");
        slots.request("http://b");
        slots.request("http://c");

        slots.retain(["http://a", "http://c"]);

        assert_eq!(slots.len(), 2);
        assert!(slots.state("http://b").is_none());
        // A dropped url is fetched again when it comes back
        assert!(slots.request("http://b"));
    }
}
