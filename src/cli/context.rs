use std::io::{self, Write};
use std::path::PathBuf;

use crate::commands::CommandResult;
use crate::error::EstateError;
use crate::logic::Logic;
use crate::model::{Buyer, Contact, ModelListener, Seller, UserPrefs};

pub struct CLIContext {
    pub logic: Logic,
    pub user_prefs_path: PathBuf,
    /// Data file path as read from the preferences file, before any `--data` override.
    pub configured_data_path: PathBuf,
}

impl CLIContext {
    pub fn new(logic: Logic, user_prefs_path: PathBuf, configured_data_path: PathBuf) -> Self {
        Self {
            logic,
            user_prefs_path,
            configured_data_path,
        }
    }

    /// Current preferences with the data file path the user configured.
    /// A one-off `--data` override is never written back.
    pub fn prefs_to_save(&self) -> UserPrefs {
        let mut prefs = self.logic.model().user_prefs().clone();
        prefs.address_book_file_path = self.configured_data_path.clone();
        prefs
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    pub fn print_result(&self, result: &CommandResult) {
        println!("{}", result.feedback);
        if result.show_help {
            super::print_help();
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &EstateError) {
        println!("Error: {}", e);
    }

    /// Prints both lists as currently displayed.
    pub fn print_lists(&self) {
        let model = self.logic.model();
        ListPrinter.buyers_changed(&model.filtered_buyers());
        ListPrinter.sellers_changed(&model.filtered_sellers());
    }
}

/// Stands in for the list panels: prints a list whenever the model reports a change.
pub struct ListPrinter;

impl ListPrinter {
    fn print(title: &str, contacts: impl ExactSizeIterator<Item = Contact>) {
        let count = contacts.len();
        println!("{} ({}):", title, count);
        if count == 0 {
            println!("  (none)");
        }
        for (i, contact) in contacts.enumerate() {
            println!("  {}", contact.display(i + 1));
        }
    }
}

impl ModelListener for ListPrinter {
    fn buyers_changed(&self, buyers: &[&Buyer]) {
        Self::print("Buyers", buyers.iter().map(|b| Contact::Buyer((*b).clone())));
    }

    fn sellers_changed(&self, sellers: &[&Seller]) {
        Self::print("Sellers", sellers.iter().map(|s| Contact::Seller((*s).clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AddressBook, GuiSettings, ModelManager};

    fn context_with_override(configured: &str, overridden: &str) -> CLIContext {
        let prefs = UserPrefs {
            gui_settings: GuiSettings::default(),
            address_book_file_path: PathBuf::from(overridden),
        };
        let model = ModelManager::new(AddressBook::new(), prefs);
        CLIContext::new(
            Logic::new(model),
            PathBuf::from("preferences.json"),
            PathBuf::from(configured),
        )
    }

    #[test]
    fn data_override_is_not_saved() {
        let ctx = context_with_override("data/addressbook.json", "/tmp/scratch.json");
        assert_eq!(
            ctx.logic.model().address_book_file_path(),
            PathBuf::from("/tmp/scratch.json").as_path()
        );
        assert_eq!(
            ctx.prefs_to_save().address_book_file_path,
            PathBuf::from("data/addressbook.json")
        );
    }
}
