//! Dialog for adding a picture
//!
//! Holds the raw text of the three inputs. A failed submit keeps the input
//! and shows the reason; a successful one lets the caller close the dialog.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length, Theme};

use crate::state::{GalleryStore, Picture, ValidationError};
use crate::Message;

const HINT: &str = "Uniqueness is checked by ID and URL (case-insensitive).";

/// The input being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Author,
    Url,
}

#[derive(Debug, Clone, Default)]
pub struct AddForm {
    id: String,
    author: String,
    url: String,
    error: Option<String>,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&mut self, field: FormField, value: String) {
        match field {
            FormField::Id => self.id = value,
            FormField::Author => self.author = value,
            FormField::Url => self.url = value,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Author => &self.author,
            FormField::Url => &self.url,
        }
    }

    /// Message from the last failed submit, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Try to add the picture described by the current input.
    ///
    /// On failure the error message is kept for display and the input
    /// stays as typed.
    pub fn submit(&mut self, store: &mut GalleryStore) -> Result<Picture, ValidationError> {
        match store.add(&self.id, &self.author, &self.url) {
            Ok(picture) => {
                self.error = None;
                Ok(picture)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input = |label: &'static str, field: FormField| {
            column![
                text(label).size(12),
                text_input(label, self.value(field))
                    .on_input(move |value| Message::FormEdited(field, value))
                    .on_submit(Message::SubmitAdd)
                    .padding(8),
            ]
            .spacing(4)
        };

        let footer: Element<'_, Message> = match self.error() {
            Some(message) => text(message)
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                })
                .into(),
            None => text(HINT).size(12).into(),
        };

        let actions = row![
            button("Cancel").on_press(Message::CancelAdd).style(button::text),
            button("Add").on_press(Message::SubmitAdd),
        ]
        .spacing(8);

        container(
            column![
                text("New picture").size(22),
                input("ID (integer)", FormField::Id),
                input("Author", FormField::Author),
                input("URL", FormField::Url),
                footer,
                container(actions).align_right(Length::Fill),
            ]
            .spacing(12),
        )
        .width(Length::Fixed(360.0))
        .padding(20)
        .style(container::rounded_box)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(id: &str, author: &str, url: &str) -> AddForm {
        let mut form = AddForm::new();
        form.edit(FormField::Id, id.to_string());
        form.edit(FormField::Author, author.to_string());
        form.edit(FormField::Url, url.to_string());
        form
    }

    #[test]
    fn test_edit_updates_only_one_field() {
        let mut form = filled("1", "A", "u");
        form.edit(FormField::Author, "B".to_string());
        assert_eq!(form.value(FormField::Id), "1");
        assert_eq!(form.value(FormField::Author), "B");
        assert_eq!(form.value(FormField::Url), "u");
    }

    #[test]
    fn test_failed_submit_keeps_input_and_reports() {
        let mut store = GalleryStore::initialize();
        let mut form = filled("x", "Nina", "http://x/img");

        assert_eq!(form.submit(&mut store), Err(ValidationError::InvalidId));
        assert_eq!(form.error(), Some("ID must be an integer"));
        assert_eq!(form.value(FormField::Id), "x");
        assert_eq!(form.value(FormField::Author), "Nina");
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_successful_submit_clears_error() {
        let mut store = GalleryStore::initialize();
        let mut form = filled("1", "Nina", "http://x/img");
        assert_eq!(form.submit(&mut store), Err(ValidationError::DuplicateRecord));
        assert!(form.error().is_some());

        form.edit(FormField::Id, "7".to_string());
        let picture = form.submit(&mut store).unwrap();

        assert_eq!(picture.id, 7);
        assert!(form.error().is_none());
        assert_eq!(store.len(), 6);
    }
}
