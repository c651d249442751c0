use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_ADDRESS_BOOK_PATH: &str = "data/addressbook.json";

/// Window geometry. Kept so preferences written by a graphical front end survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    pub window_x: Option<i32>,
    pub window_y: Option<i32>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: 740.0,
            window_height: 600.0,
            window_x: None,
            window_y: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    pub gui_settings: GuiSettings,
    pub address_book_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_PATH),
        }
    }
}

impl UserPrefs {
    pub fn reset_data(&mut self, other: &UserPrefs) {
        *self = other.clone();
    }

    pub fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }
}
