use iced::widget::{column, container, keyed_column, mouse_area, responsive, scrollable, text, Row};
use iced::{Element, Length, Size};

use super::tile::picture_tile;
use crate::fetch::ImageSlots;
use crate::state::Picture;
use crate::Message;

/// Cells never get narrower than this; extra room is shared between them
const MIN_CELL_WIDTH: f32 = 140.0;
const SPACING: f32 = 12.0;
const PADDING: f32 = 12.0;
/// Room kept free for the vertical scrollbar
const SCROLLBAR_ALLOWANCE: f32 = 12.0;

/// How many cells fit on a row of `width`, and how wide each one gets
pub fn grid_columns(width: f32) -> (usize, f32) {
    let available = (width - 2.0 * PADDING - SCROLLBAR_ALLOWANCE).max(MIN_CELL_WIDTH);
    let columns = ((available + SPACING) / (MIN_CELL_WIDTH + SPACING)).floor() as usize;
    let columns = columns.max(1);
    let cell_width = (available - SPACING * (columns - 1) as f32) / columns as f32;
    (columns, cell_width)
}

/// Grid layout: square picture with author and id underneath.
///
/// Rows are keyed by the id of their first picture. Clicking a cell
/// removes the picture.
pub fn view<'a>(pictures: Vec<&'a Picture>, images: &'a ImageSlots) -> Element<'a, Message> {
    responsive(move |size: Size| {
        let (columns, cell_width) = grid_columns(size.width);

        let rows = pictures.chunks(columns).map(|chunk| {
            let cells = chunk
                .iter()
                .map(|&picture| cell(picture, images, cell_width));
            let row: Element<'a, Message> = Row::with_children(cells).spacing(SPACING).into();
            (chunk[0].id, row)
        });

        scrollable(
            container(keyed_column(rows).spacing(SPACING))
                .padding(PADDING)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    })
    .into()
}

fn cell<'a>(picture: &'a Picture, images: &'a ImageSlots, width: f32) -> Element<'a, Message> {
    let content = column![
        picture_tile(images.state(&picture.url), width, width),
        column![
            text(&picture.author).size(16),
            text(format!("id: {}", picture.id)).size(12),
        ]
        .spacing(2)
        .padding(8),
    ];

    mouse_area(
        container(content)
            .width(Length::Fixed(width))
            .style(container::rounded_box),
    )
    .on_press(Message::Remove(picture.id))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_window_keeps_one_min_width_column() {
        assert_eq!(grid_columns(100.0), (1, MIN_CELL_WIDTH));
        assert_eq!(grid_columns(0.0), (1, MIN_CELL_WIDTH));
    }

    #[test]
    fn test_cells_stretch_to_fill_the_row() {
        let width = 1000.0;
        let (columns, cell_width) = grid_columns(width);
        assert_eq!(columns, 6);
        assert!(cell_width >= MIN_CELL_WIDTH);

        let used = columns as f32 * cell_width + SPACING * (columns - 1) as f32;
        let available = width - 2.0 * PADDING - SCROLLBAR_ALLOWANCE;
        assert!((used - available).abs() < 0.01);
    }

    #[test]
    fn test_column_added_once_it_fits() {
        // Exactly two minimum cells plus one gap
        let width = 2.0 * MIN_CELL_WIDTH + SPACING + 2.0 * PADDING + SCROLLBAR_ALLOWANCE;
        assert_eq!(grid_columns(width).0, 2);
        assert_eq!(grid_columns(width - 1.0).0, 1);
    }
}
