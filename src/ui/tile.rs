use iced::widget::{container, image, Space};
use iced::{Background, Color, ContentFit, Element, Length, Theme};

use crate::fetch::ImageState;
use crate::Message;

/// Which placeholder to draw instead of the picture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Loading,
    Error,
}

/// Render a picture at a fixed size.
///
/// Untracked urls count as loading: the fetch is issued right after the
/// store changes, so the view may briefly run ahead of it.
pub fn picture_tile<'a>(state: Option<&ImageState>, width: f32, height: f32) -> Element<'a, Message> {
    match state {
        Some(ImageState::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageState::Failed) => placeholder(Placeholder::Error, width, height),
        Some(ImageState::Loading) | None => placeholder(Placeholder::Loading, width, height),
    }
}

fn placeholder<'a>(kind: Placeholder, width: f32, height: f32) -> Element<'a, Message> {
    container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(move |theme: &Theme| container::Style {
            background: Some(Background::Color(placeholder_color(theme, kind))),
            ..container::Style::default()
        })
        .into()
}

fn placeholder_color(theme: &Theme, kind: Placeholder) -> Color {
    let palette = theme.extended_palette();
    match kind {
        Placeholder::Loading => palette.background.weak.color,
        Placeholder::Error => palette.danger.weak.color,
    }
}
