/// State management module
///
/// This module handles all application state, including:
/// - The authoritative picture collection (gallery.rs)
/// - Shared data structures (data.rs)
/// - Validation errors surfaced to the add form (error.rs)
/// - Presentation preferences kept apart from the data (prefs.rs)

pub mod data;
pub mod error;
pub mod gallery;
pub mod prefs;

pub use data::Picture;
pub use error::ValidationError;
pub use gallery::GalleryStore;
