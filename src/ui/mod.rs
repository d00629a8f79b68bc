/// Gallery view widgets
///
/// - `list.rs` - single-column layout, one row per picture
/// - `grid.rs` - wrapping grid of square cells
/// - `tile.rs` - the picture itself, or its loading/error placeholder
/// - `add_dialog.rs` - form for adding a picture

pub mod add_dialog;
pub mod grid;
pub mod list;
pub mod tile;

pub use add_dialog::{AddForm, FormField};
