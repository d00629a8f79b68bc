use std::time::Duration;

use iced::widget::{
    button, center, column, container, horizontal_space, opaque, row, stack, text, text_input,
};
use iced::{Alignment, Color, Element, Length, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod fetch;
mod state;
mod ui;

use config::{Config, CONFIG};
use fetch::{loader, FetchError, ImageSlots, Thumbnail};
use state::prefs::{LayoutMode, Preferences};
use state::GalleryStore;
use ui::{AddForm, FormField};

/// Main application state
struct Gallery {
    /// The authoritative picture collection
    store: GalleryStore,
    /// Layout and theme, independent of the pictures
    prefs: Preferences,
    /// Live author search text
    search: String,
    /// Open add dialog, if any
    add_form: Option<AddForm>,
    /// Load state of every picture url in the store
    images: ImageSlots,
    /// Store version the image slots were last synced against
    synced_version: Option<u64>,
    /// Shared HTTP client; None if it could not be built
    client: Option<reqwest::Client>,
    thumbnail_size: u32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Search text changed
    SearchChanged(String),
    /// User clicked the layout toggle
    ToggleLayout,
    /// User clicked "Clear all"
    ClearAll,
    /// User clicked "+"
    OpenAddForm,
    /// A field of the add dialog changed
    FormEdited(FormField, String),
    SubmitAdd,
    CancelAdd,
    /// User clicked a picture
    Remove(i32),
    /// Background fetch for a url finished
    ImageLoaded(String, Result<iced::widget::image::Handle, FetchError>),
}

impl Gallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let mut gallery = Gallery::from_config(&CONFIG);

        info!(
            pictures = gallery.store.len(),
            layout = ?gallery.prefs.layout,
            "🖼️ Gallery initialized"
        );

        let task = gallery.sync_images();
        (gallery, task)
    }

    /// Build the initial state: demo pictures, no fetches started yet
    fn from_config(config: &Config) -> Self {
        let client = match loader::create_client(Duration::from_secs(config.fetch_timeout_secs)) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, "pictures will not load");
                None
            }
        };

        Gallery {
            store: GalleryStore::initialize(),
            prefs: Preferences::from_config(config),
            search: String::new(),
            add_form: None,
            images: ImageSlots::new(),
            synced_version: None,
            client,
            thumbnail_size: config.thumbnail_size,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.search = query;
                Task::none()
            }
            Message::ToggleLayout => {
                self.prefs.toggle_layout();
                debug!(layout = ?self.prefs.layout, "layout toggled");
                Task::none()
            }
            Message::ClearAll => {
                let dropped = self.store.clear();
                info!(dropped, "gallery cleared");
                self.sync_images()
            }
            Message::OpenAddForm => {
                self.add_form = Some(AddForm::new());
                Task::none()
            }
            Message::FormEdited(field, value) => {
                if let Some(form) = self.add_form.as_mut() {
                    form.edit(field, value);
                }
                Task::none()
            }
            Message::SubmitAdd => {
                let Some(form) = self.add_form.as_mut() else {
                    return Task::none();
                };

                match form.submit(&mut self.store) {
                    Ok(picture) => {
                        info!(id = picture.id, author = %picture.author, "picture added");
                        self.add_form = None;
                        self.sync_images()
                    }
                    Err(err) => {
                        debug!(error = %err, "add rejected");
                        Task::none()
                    }
                }
            }
            Message::CancelAdd => {
                self.add_form = None;
                Task::none()
            }
            Message::Remove(id) => {
                if let Some(picture) = self.store.get(id) {
                    info!(id, author = %picture.author, "removing picture");
                }
                self.store.remove(id);
                self.sync_images()
            }
            Message::ImageLoaded(url, result) => {
                if let Err(err) = &result {
                    warn!(url = %url, error = %err, "picture failed to load");
                }
                self.images.resolve(&url, result);
                Task::none()
            }
        }
    }

    /// Bring the image slots in line with the store and start the fetches
    /// that became necessary.
    fn sync_images(&mut self) -> Task<Message> {
        let wanted = self.pending_fetches();
        if wanted.is_empty() {
            return Task::none();
        }

        let Some(client) = &self.client else {
            for url in &wanted {
                self.images
                    .resolve(url, Err(FetchError::Client("no HTTP client".to_string())));
            }
            return Task::none();
        };

        debug!(
            count = wanted.len(),
            tracked = self.images.len(),
            "fetching pictures"
        );

        Task::batch(wanted.into_iter().map(|url| {
            let fetch = loader::fetch_image(client.clone(), url.clone(), self.thumbnail_size);
            Task::perform(fetch, move |result| {
                Message::ImageLoaded(url.clone(), result.map(Thumbnail::into_handle))
            })
        }))
    }

    /// Drop slots for urls that left the store and claim a slot for every
    /// url seen for the first time. Returns the urls that need a fetch.
    ///
    /// Nothing happens while the store version is unchanged.
    fn pending_fetches(&mut self) -> Vec<String> {
        let version = self.store.version();
        if self.synced_version == Some(version) {
            return Vec::new();
        }
        self.synced_version = Some(version);

        self.images.retain(self.store.urls());

        self.store
            .urls()
            .filter(|url| self.images.request(url))
            .map(str::to_string)
            .collect()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let toolbar = row![
            text("Gallery").size(28),
            horizontal_space(),
            button(self.prefs.layout.toggle_label())
                .on_press(Message::ToggleLayout)
                .style(button::text),
            button("Clear all")
                .on_press(Message::ClearAll)
                .style(button::text),
            button(text("+").size(20))
                .on_press(Message::OpenAddForm)
                .padding([4, 14]),
        ]
        .spacing(8)
        .padding(12)
        .align_y(Alignment::Center);

        let search = container(
            text_input("Search by author", &self.search)
                .on_input(Message::SearchChanged)
                .padding(10),
        )
        .padding([0, 12]);

        // Recomputed on every render so it always reflects the live store
        let pictures = self.store.filter(&self.search);

        let body: Element<Message> = if pictures.is_empty() {
            let hint = if self.store.is_empty() {
                "No pictures"
            } else {
                "No author matches the search"
            };
            center(text(hint).size(16)).into()
        } else {
            match self.prefs.layout {
                LayoutMode::List => ui::list::view(pictures, &self.images),
                LayoutMode::Grid => ui::grid::view(pictures, &self.images),
            }
        };

        let screen: Element<Message> = column![toolbar, search, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match &self.add_form {
            Some(form) => modal(screen, form.view()),
            None => screen,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.prefs.theme.theme()
    }
}

/// Lay `dialog` over `base`, blocking interaction with everything behind it.
/// Clicking the backdrop does not dismiss the dialog.
fn modal<'a>(base: Element<'a, Message>, dialog: Element<'a, Message>) -> Element<'a, Message> {
    stack![
        base,
        opaque(center(opaque(dialog)).style(|_theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: 0.6,
                    ..Color::BLACK
                }
                .into()
            ),
            ..container::Style::default()
        }))
    ]
    .into()
}

fn main() -> iced::Result {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application("Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .window_size((900.0, 700.0))
        .centered()
        .run_with(Gallery::new)
}
