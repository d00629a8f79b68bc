/// Remote picture loading module
///
/// This module handles:
/// - Fetching picture bytes over HTTP (loader.rs)
/// - Decoding and downscaling them off the UI thread (loader.rs)
/// - Tracking the loading/ready/failed state of each url (slots.rs)
///
/// The gallery store never sees any of this; a failed load only turns the
/// tile into an error placeholder.

pub mod loader;
pub mod slots;

pub use loader::{FetchError, Thumbnail};
pub use slots::{ImageSlots, ImageState};
