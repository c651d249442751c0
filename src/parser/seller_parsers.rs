use crate::commands::seller_commands::{ADD_SELLER_USAGE, DELETE_SELLER_USAGE, EDIT_SELLER_USAGE};
use crate::commands::{Command, EditPersonDescriptor, EditSellerDescriptor};
use crate::error::{EstateError, EstateResult};
use crate::model::{Address, Email, HouseInfo, Name, Person, Phone, Seller, SellerProfile};

use super::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_EMAIL, PREFIX_HOME_ADDRESS, PREFIX_INFO,
    PREFIX_NAME, PREFIX_PHONE, PREFIX_SELLING_ADDRESS, PREFIX_TAG,
};
use super::{
    no_duplicates, optional, parse_edit_tags, parse_index, parse_tags, rejected, require_exact,
    required,
};

const PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_HOME_ADDRESS,
    PREFIX_SELLING_ADDRESS,
    PREFIX_INFO,
    PREFIX_TAG,
];

const SINGLE_VALUED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_HOME_ADDRESS,
    PREFIX_SELLING_ADDRESS,
    PREFIX_INFO,
];

/// `n/NAME p/PHONE e/EMAIL ah/HOME_ADDRESS as/SELLING_ADDRESS i/HOUSE_INFO [t/TAG]...`
pub fn parse_add(args: &str) -> EstateResult<Command> {
    let map = tokenize(args, PREFIXES);
    require_exact(&map, SINGLE_VALUED, ADD_SELLER_USAGE)?;
    let seller = build_seller(&map).map_err(|e| rejected(e, ADD_SELLER_USAGE))?;
    Ok(Command::AddSeller(seller))
}

fn build_seller(map: &ArgumentMultimap) -> EstateResult<Seller> {
    Ok(Person::new(
        Name::parse(required(map, PREFIX_NAME))?,
        Phone::parse(required(map, PREFIX_PHONE))?,
        Email::parse(required(map, PREFIX_EMAIL))?,
        Address::parse(required(map, PREFIX_HOME_ADDRESS))?,
        parse_tags(map.all_values(PREFIX_TAG))?,
        SellerProfile {
            selling_address: Address::parse(required(map, PREFIX_SELLING_ADDRESS))?,
            house_info: HouseInfo::parse(required(map, PREFIX_INFO))?,
        },
    ))
}

/// `INDEX`
pub fn parse_delete(args: &str) -> EstateResult<Command> {
    parse_index(args, DELETE_SELLER_USAGE).map(Command::DeleteSeller)
}

/// `INDEX [n/NAME] [p/PHONE] [e/EMAIL] [ah/HOME_ADDRESS] [as/SELLING_ADDRESS] [i/HOUSE_INFO] [t/TAG]...`
pub fn parse_edit(args: &str) -> EstateResult<Command> {
    let map = tokenize(args, PREFIXES);
    let index = parse_index(map.preamble(), EDIT_SELLER_USAGE)?;
    no_duplicates(&map, SINGLE_VALUED, EDIT_SELLER_USAGE)?;

    let changes = edit_descriptor(&map).map_err(|e| rejected(e, EDIT_SELLER_USAGE))?;
    if changes.is_empty() {
        return Err(EstateError::invalid_format(EDIT_SELLER_USAGE));
    }
    Ok(Command::EditSeller { index, changes })
}

fn edit_descriptor(map: &ArgumentMultimap) -> EstateResult<EditSellerDescriptor> {
    Ok(EditSellerDescriptor {
        person: EditPersonDescriptor {
            name: optional(map, PREFIX_NAME, Name::parse)?,
            phone: optional(map, PREFIX_PHONE, Phone::parse)?,
            email: optional(map, PREFIX_EMAIL, Email::parse)?,
            address: optional(map, PREFIX_HOME_ADDRESS, Address::parse)?,
            tags: parse_edit_tags(map.all_values(PREFIX_TAG))?,
        },
        selling_address: optional(map, PREFIX_SELLING_ADDRESS, Address::parse)?,
        house_info: optional(map, PREFIX_INFO, HouseInfo::parse)?,
    })
}
