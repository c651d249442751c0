pub mod context;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::commands::buyer_commands::{ADD_BUYER_USAGE, DELETE_BUYER_USAGE, EDIT_BUYER_USAGE};
use crate::commands::list_commands::{
    CLEAR_USAGE, FIND_BUYER_USAGE, FIND_SELLER_USAGE, LIST_USAGE, SORT_BUYER_USAGE,
    SORT_SELLER_USAGE,
};
use crate::commands::seller_commands::{ADD_SELLER_USAGE, DELETE_SELLER_USAGE, EDIT_SELLER_USAGE};
use crate::commands::{EXIT_USAGE, HELP_USAGE};
use crate::config::Config;
use crate::logic::Logic;
use crate::model::{sample_data, AddressBook, ModelManager, UserPrefs};
use crate::storage;
use context::{CLIContext, ListPrinter};

/// Run the interactive REPL.
pub fn run(config: &Config, data_path: Option<PathBuf>) {
    println!("estatebook - buyers and sellers address book");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut prefs = load_user_prefs(&config.user_prefs_file_path);
    let configured_data_path = prefs.address_book_file_path.clone();
    if let Some(path) = data_path {
        info!(file = %path.display(), "using data file given on the command line");
        prefs.address_book_file_path = path;
    }

    let book = load_address_book(prefs.address_book_file_path());
    let mut model = ModelManager::new(book, prefs);
    model.subscribe(Box::new(ListPrinter));

    let ctx = CLIContext::new(
        Logic::new(model),
        config.user_prefs_file_path.clone(),
        configured_data_path,
    );
    ctx.print_lists();
    let ctx = repl_loop(ctx);

    let prefs = ctx.prefs_to_save();
    if let Err(e) = storage::save_user_prefs(&ctx.user_prefs_path, &prefs) {
        warn!(error = %e, "could not save user preferences");
    }
    info!("exiting");
}

fn load_user_prefs(path: &Path) -> UserPrefs {
    match storage::read_user_prefs(path) {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            info!(file = %path.display(), "preferences file not found, using defaults");
            UserPrefs::default()
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "preferences file unreadable, using defaults");
            UserPrefs::default()
        }
    }
}

/// Missing file starts from sample data; an unreadable one starts empty.
fn load_address_book(path: &Path) -> AddressBook {
    match storage::read_address_book(path) {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!(file = %path.display(), "data file not found, starting with sample data");
            sample_data::sample_address_book().unwrap_or_default()
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "data file unreadable, starting with an empty address book");
            println!("Could not read {}: {}", path.display(), e);
            println!("Starting with an empty address book.");
            AddressBook::new()
        }
    }
}

fn repl_loop(mut ctx: CLIContext) -> CLIContext {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match ctx.logic.execute(input) {
            Ok(result) => {
                ctx.print_result(&result);
                if result.exit {
                    break;
                }
            }
            Err(e) => ctx.print_error(&e),
        }
    }
    ctx
}

pub fn print_help() {
    let usages = [
        ADD_BUYER_USAGE,
        ADD_SELLER_USAGE,
        EDIT_BUYER_USAGE,
        EDIT_SELLER_USAGE,
        DELETE_BUYER_USAGE,
        DELETE_SELLER_USAGE,
        FIND_BUYER_USAGE,
        FIND_SELLER_USAGE,
        SORT_BUYER_USAGE,
        SORT_SELLER_USAGE,
        LIST_USAGE,
        CLEAR_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ];
    println!();
    println!("COMMANDS:");
    for usage in usages {
        println!();
        for line in usage.lines() {
            println!("  {}", line);
        }
    }
    println!();
}
