use crate::error::EstateResult;
use crate::model::{AddressBook, Filter, ModelManager, SortOrder};

use super::CommandResult;

pub const FIND_BUYER_WORD: &str = "findbuyer";
pub const FIND_SELLER_WORD: &str = "findseller";
pub const SORT_BUYER_WORD: &str = "sortbuyer";
pub const SORT_SELLER_WORD: &str = "sortseller";
pub const LIST_WORD: &str = "list";
pub const CLEAR_WORD: &str = "clear";

pub const FIND_BUYER_USAGE: &str = "findbuyer: Finds all buyers whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: findbuyer alice bob charlie";

pub const FIND_SELLER_USAGE: &str = "findseller: Finds all sellers whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: findseller alice bob charlie";

pub const SORT_BUYER_USAGE: &str = "sortbuyer: Sorts the displayed buyer list.\n\
Parameters: by/KEY [o/ORDER] where KEY is one of name, phone, email, address, info or default \
and ORDER is asc or desc\n\
Example: sortbuyer by/name o/desc";

pub const SORT_SELLER_USAGE: &str = "sortseller: Sorts the displayed seller list.\n\
Parameters: by/KEY [o/ORDER] where KEY is one of name, phone, email, address, info or default \
and ORDER is asc or desc\n\
Example: sortseller by/phone";

pub const LIST_USAGE: &str = "list: Lists all buyers and sellers.";
pub const CLEAR_USAGE: &str = "clear: Clears all buyers and sellers.";

pub fn find_buyers(model: &mut ModelManager, keywords: &[String]) -> EstateResult<CommandResult> {
    model.update_filtered_buyer_list(Filter::name_keywords(keywords.iter().cloned()));
    let count = model.filtered_buyers().len();
    Ok(CommandResult::message(format!("{} buyers listed!", count)))
}

pub fn find_sellers(model: &mut ModelManager, keywords: &[String]) -> EstateResult<CommandResult> {
    model.update_filtered_seller_list(Filter::name_keywords(keywords.iter().cloned()));
    let count = model.filtered_sellers().len();
    Ok(CommandResult::message(format!("{} sellers listed!", count)))
}

pub fn sort_buyers(model: &mut ModelManager, order: SortOrder) -> EstateResult<CommandResult> {
    model.update_filtered_sorted_buyer_list(order);
    Ok(CommandResult::message(format!("Buyers sorted by {}", order)))
}

pub fn sort_sellers(model: &mut ModelManager, order: SortOrder) -> EstateResult<CommandResult> {
    model.update_filtered_sorted_seller_list(order);
    Ok(CommandResult::message(format!("Sellers sorted by {}", order)))
}

pub fn list(model: &mut ModelManager) -> EstateResult<CommandResult> {
    model.update_filtered_buyer_list(Filter::ShowAll);
    model.update_filtered_seller_list(Filter::ShowAll);
    Ok(CommandResult::message("Listed all buyers and sellers".to_string()))
}

pub fn clear(model: &mut ModelManager) -> EstateResult<CommandResult> {
    model.set_address_book(&AddressBook::new());
    Ok(CommandResult::message("Address book has been cleared!".to_string()))
}
