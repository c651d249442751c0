pub mod edit;
pub mod buyer_commands;
pub mod seller_commands;
pub mod list_commands;

use crate::error::{EstateError, EstateResult};
use crate::model::{Buyer, ModelManager, Seller, SortOrder};

pub use edit::{EditBuyerDescriptor, EditPersonDescriptor, EditSellerDescriptor};

pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const EXIT_USAGE: &str = "exit: Exits the program.";

pub const SHOWING_HELP_MESSAGE: &str = "Showing help.";
pub const EXIT_MESSAGE: &str = "Exiting address book as requested ...";

/// A single user intent, ready to run against the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddBuyer(Buyer),
    AddSeller(Seller),
    DeleteBuyer(usize),
    DeleteSeller(usize),
    EditBuyer {
        index: usize,
        changes: EditBuyerDescriptor,
    },
    EditSeller {
        index: usize,
        changes: EditSellerDescriptor,
    },
    FindBuyer(Vec<String>),
    FindSeller(Vec<String>),
    SortBuyer(SortOrder),
    SortSeller(SortOrder),
    List,
    Clear,
    Help,
    Exit,
}

/// Outcome shown to the user after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn message(feedback: String) -> Self {
        Self {
            feedback,
            show_help: false,
            exit: false,
        }
    }
}

impl Command {
    pub fn execute(&self, model: &mut ModelManager) -> EstateResult<CommandResult> {
        match self {
            Command::AddBuyer(buyer) => buyer_commands::add(model, buyer.clone()),
            Command::AddSeller(seller) => seller_commands::add(model, seller.clone()),
            Command::DeleteBuyer(index) => buyer_commands::delete(model, *index),
            Command::DeleteSeller(index) => seller_commands::delete(model, *index),
            Command::EditBuyer { index, changes } => buyer_commands::edit(model, *index, changes),
            Command::EditSeller { index, changes } => seller_commands::edit(model, *index, changes),
            Command::FindBuyer(keywords) => list_commands::find_buyers(model, keywords),
            Command::FindSeller(keywords) => list_commands::find_sellers(model, keywords),
            Command::SortBuyer(order) => list_commands::sort_buyers(model, *order),
            Command::SortSeller(order) => list_commands::sort_sellers(model, *order),
            Command::List => list_commands::list(model),
            Command::Clear => list_commands::clear(model),
            Command::Help => Ok(CommandResult {
                feedback: SHOWING_HELP_MESSAGE.to_string(),
                show_help: true,
                exit: false,
            }),
            Command::Exit => Ok(CommandResult {
                feedback: EXIT_MESSAGE.to_string(),
                show_help: false,
                exit: true,
            }),
        }
    }

    /// True if running the command may change the address book.
    pub fn mutates_data(&self) -> bool {
        matches!(
            self,
            Command::AddBuyer(_)
                | Command::AddSeller(_)
                | Command::DeleteBuyer(_)
                | Command::DeleteSeller(_)
                | Command::EditBuyer { .. }
                | Command::EditSeller { .. }
                | Command::Clear
        )
    }
}

/// Picks the entry at a one-based `index` of a displayed list.
fn select<T: Clone>(shown: Vec<&T>, index: usize, entity: &str) -> EstateResult<T> {
    index
        .checked_sub(1)
        .and_then(|i| shown.get(i))
        .map(|item| (*item).clone())
        .ok_or_else(|| EstateError::InvalidIndex {
            entity: entity.to_string(),
        })
}
