use iced::widget::{column, container, keyed_column, mouse_area, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::tile::picture_tile;
use crate::fetch::ImageSlots;
use crate::state::Picture;
use crate::Message;

/// Edge of the square picture on each row
const IMAGE_SIZE: f32 = 96.0;

/// Single-column layout: picture on the left, author/id/url on the right.
/// Rows are keyed by picture id; clicking a row removes the picture.
pub fn view<'a>(pictures: Vec<&'a Picture>, images: &'a ImageSlots) -> Element<'a, Message> {
    let rows = pictures.into_iter().map(|picture| {
        let details = column![
            text(&picture.author).size(18),
            text(format!("id: {}", picture.id)).size(12),
            text(&picture.url).size(12),
        ]
        .spacing(4)
        .width(Length::Fill);

        let card = container(
            row![
                picture_tile(images.state(&picture.url), IMAGE_SIZE, IMAGE_SIZE),
                details,
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
        .padding(12)
        .width(Length::Fill)
        .style(container::rounded_box);

        let element: Element<'a, Message> = mouse_area(card)
            .on_press(Message::Remove(picture.id))
            .into();
        (picture.id, element)
    });

    scrollable(container(keyed_column(rows).spacing(12)).padding(12))
        .height(Length::Fill)
        .into()
}
