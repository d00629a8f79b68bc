//! Presentation preferences
//!
//! Layout and theme live outside the gallery store: they only change how
//! pictures are shown, never which pictures exist.

use iced::Theme;
use serde::Deserialize;

use crate::config::Config;

/// How the gallery is laid out on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Single column, one row per picture
    List,
    /// Adaptive columns of cells that fill the window width
    #[default]
    Grid,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::List => LayoutMode::Grid,
            LayoutMode::Grid => LayoutMode::List,
        }
    }

    /// Label for the toolbar button: names the layout it switches to
    pub fn toggle_label(self) -> &'static str {
        match self.toggled() {
            LayoutMode::List => "List",
            LayoutMode::Grid => "Grid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn theme(self) -> Theme {
        match self {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub layout: LayoutMode,
    pub theme: ThemeChoice,
}

impl Preferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            layout: config.layout,
            theme: config.theme,
        }
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggled();
    }
}
