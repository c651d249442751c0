pub mod json_file;
pub mod json_address_book;

use std::path::Path;

use tracing::{debug, info};

use crate::error::EstateResult;
use crate::model::{AddressBook, UserPrefs};

pub use json_address_book::{JsonAdaptedBuyer, JsonAdaptedSeller, JsonSerializableAddressBook};
pub use json_file::{read_json, save_json};

/// Loads the address book at `path`. A missing file is `Ok(None)`.
pub fn read_address_book(path: &Path) -> EstateResult<Option<AddressBook>> {
    let Some(data) = read_json::<JsonSerializableAddressBook>(path)? else {
        return Ok(None);
    };
    let book = data.to_model()?;
    debug!(
        file = %path.display(),
        buyers = book.buyers().len(),
        sellers = book.sellers().len(),
        "address book loaded"
    );
    Ok(Some(book))
}

pub fn save_address_book(path: &Path, book: &AddressBook) -> EstateResult<()> {
    save_json(path, &JsonSerializableAddressBook::from(book))
}

pub fn read_user_prefs(path: &Path) -> EstateResult<Option<UserPrefs>> {
    read_json(path)
}

pub fn save_user_prefs(path: &Path, prefs: &UserPrefs) -> EstateResult<()> {
    info!(file = %path.display(), "saving user preferences");
    save_json(path, prefs)
}
