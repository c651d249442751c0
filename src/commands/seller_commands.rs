use tracing::info;

use crate::error::EstateResult;
use crate::model::{Contact, ModelManager, Seller};

use super::edit::EditSellerDescriptor;
use super::{select, CommandResult};

pub const ADD_SELLER_WORD: &str = "addseller";
pub const DELETE_SELLER_WORD: &str = "deleteseller";
pub const EDIT_SELLER_WORD: &str = "editseller";

pub const ADD_SELLER_USAGE: &str = "addseller: Adds a seller to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL ah/HOME_ADDRESS as/SELLING_ADDRESS i/HOUSE_INFO [t/TAG]...\n\
Example: addseller n/Jane Lim p/91234567 e/janel@example.com ah/12 Holland Road \
as/Blk 88 Toa Payoh Lor 4, #10-02 i/3-room HDB, high floor t/urgent";

pub const DELETE_SELLER_USAGE: &str = "deleteseller: Deletes the seller identified by the index \
number used in the displayed seller list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: deleteseller 1";

pub const EDIT_SELLER_USAGE: &str = "editseller: Edits the details of the seller identified by \
the index number used in the displayed seller list. Existing values will be overwritten by the \
input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [ah/HOME_ADDRESS] \
[as/SELLING_ADDRESS] [i/HOUSE_INFO] [t/TAG]...\n\
Example: editseller 1 p/91234567 e/johndoe@example.com";

pub fn add(model: &mut ModelManager, seller: Seller) -> EstateResult<CommandResult> {
    let shown = Contact::from(seller.clone());
    model.add_seller(seller)?;
    info!(name = %shown.name(), "seller added");
    Ok(CommandResult::message(format!("New seller added: {}", shown)))
}

pub fn delete(model: &mut ModelManager, index: usize) -> EstateResult<CommandResult> {
    let target = select(model.filtered_sellers(), index, "seller")?;
    model.delete_seller(&target)?;
    info!(name = %target.name, "seller deleted");
    Ok(CommandResult::message(format!(
        "Deleted seller: {}",
        Contact::from(target)
    )))
}

pub fn edit(
    model: &mut ModelManager,
    index: usize,
    changes: &EditSellerDescriptor,
) -> EstateResult<CommandResult> {
    let target = select(model.filtered_sellers(), index, "seller")?;
    let edited = changes.apply(&target);
    model.set_seller(&target, edited.clone())?;
    info!(name = %edited.name, "seller edited");
    Ok(CommandResult::message(format!(
        "Edited seller: {}",
        Contact::from(edited)
    )))
}
