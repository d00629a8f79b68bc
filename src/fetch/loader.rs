//! Remote picture loader
//!
//! Downloads a picture by url and decodes it into RGBA pixels small enough
//! for a gallery tile.

use std::time::Duration;

use iced::widget::image::Handle;
use image::imageops::FilterType;
use thiserror::Error;
use tokio::task;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("failed to decode picture: {0}")]
    Decode(String),
    #[error("task join error: {0}")]
    Join(String),
}

/// A decoded, downscaled picture ready to hand to the renderer
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major
    pub pixels: Vec<u8>,
}

impl Thumbnail {
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Build the HTTP client shared by every picture fetch
pub fn create_client(timeout: Duration) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!("picture-gallery/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}

/// Fetch a picture and decode it
///
/// # Arguments
/// * `client` - Shared HTTP client
/// * `url` - Location of the picture
/// * `max_edge` - Longest edge of the result, in pixels
pub async fn fetch_image(
    client: reqwest::Client,
    url: String,
    max_edge: u32,
) -> Result<Thumbnail, FetchError> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    tracing::trace!(url = %url, size = bytes.len(), "picture downloaded");

    // Spawn blocking because decoding and resizing are CPU-intensive
    task::spawn_blocking(move || decode_thumbnail(&bytes, max_edge))
        .await
        .map_err(|e| FetchError::Join(e.to_string()))?
}

/// Decode encoded picture bytes, shrinking them to fit `max_edge`.
///
/// Pictures already within bounds keep their size.
pub fn decode_thumbnail(bytes: &[u8], max_edge: u32) -> Result<Thumbnail, FetchError> {
    let img = image::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

    let img = if img.width() > max_edge || img.height() > max_edge {
        img.resize(max_edge, max_edge, FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
