use thiserror::Error;

/// Why a candidate picture was rejected by the gallery.
///
/// The display text is shown as-is under the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ID must be an integer")]
    InvalidId,
    #[error("Author must not be empty")]
    EmptyAuthor,
    #[error("URL must not be empty")]
    EmptyUrl,
    #[error("A picture with this ID or URL already exists")]
    DuplicateRecord,
}
