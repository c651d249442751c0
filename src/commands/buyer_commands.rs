use tracing::info;

use crate::error::EstateResult;
use crate::model::{Buyer, Contact, ModelManager};

use super::edit::EditBuyerDescriptor;
use super::{select, CommandResult};

pub const ADD_BUYER_WORD: &str = "addbuyer";
pub const DELETE_BUYER_WORD: &str = "deletebuyer";
pub const EDIT_BUYER_WORD: &str = "editbuyer";

pub const ADD_BUYER_USAGE: &str = "addbuyer: Adds a buyer to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL ah/HOME_ADDRESS i/HOUSE_INFO [t/TAG]...\n\
Example: addbuyer n/John Doe p/98765432 e/johnd@example.com ah/311, Clementi Ave 2, #02-25 \
i/4-room flat in the west t/firsttime";

pub const DELETE_BUYER_USAGE: &str = "deletebuyer: Deletes the buyer identified by the index \
number used in the displayed buyer list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: deletebuyer 1";

pub const EDIT_BUYER_USAGE: &str = "editbuyer: Edits the details of the buyer identified by \
the index number used in the displayed buyer list. Existing values will be overwritten by the \
input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [ah/HOME_ADDRESS] \
[i/HOUSE_INFO] [t/TAG]...\n\
Example: editbuyer 1 p/91234567 e/johndoe@example.com";

pub fn add(model: &mut ModelManager, buyer: Buyer) -> EstateResult<CommandResult> {
    let shown = Contact::from(buyer.clone());
    model.add_buyer(buyer)?;
    info!(name = %shown.name(), "buyer added");
    Ok(CommandResult::message(format!("New buyer added: {}", shown)))
}

pub fn delete(model: &mut ModelManager, index: usize) -> EstateResult<CommandResult> {
    let target = select(model.filtered_buyers(), index, "buyer")?;
    model.delete_buyer(&target)?;
    info!(name = %target.name, "buyer deleted");
    Ok(CommandResult::message(format!(
        "Deleted buyer: {}",
        Contact::from(target)
    )))
}

pub fn edit(
    model: &mut ModelManager,
    index: usize,
    changes: &EditBuyerDescriptor,
) -> EstateResult<CommandResult> {
    let target = select(model.filtered_buyers(), index, "buyer")?;
    let edited = changes.apply(&target);
    model.set_buyer(&target, edited.clone())?;
    info!(name = %edited.name, "buyer edited");
    Ok(CommandResult::message(format!(
        "Edited buyer: {}",
        Contact::from(edited)
    )))
}
